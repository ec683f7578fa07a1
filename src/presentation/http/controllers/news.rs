// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::news::{CreateNewsCommand, DeleteNewsCommand, UpdateNewsCommand},
    dto::{NewsDeletedDto, NewsDto, Page},
    queries::news::{GetNewsByIdQuery, ListNewsQuery},
};
use crate::domain::news::DateOrder;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewsListParams {
    /// Page size; defaults to 10, capped at 100.
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default, rename = "dateOrder")]
    pub date_order: DateOrder,
    /// Substring matched case-insensitively against title or content.
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNewsRequest {
    #[schema(example = "Your news title", min_length = 5)]
    pub title: String,
    #[schema(example = "Your news content.", min_length = 10)]
    pub content: String,
    #[schema(example = "2025-05-21", format = Date)]
    pub date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNewsRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[utoipa::path(
    get,
    path = "/news",
    params(NewsListParams),
    responses(
        (status = 200, description = "Windowed news listing with the total count of matches.", body = crate::presentation::http::openapi::NewsListResponse)
    ),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NewsListParams>,
) -> HttpResult<Json<Page<NewsDto>>> {
    let query = ListNewsQuery {
        limit: params.limit,
        offset: params.offset,
        date_order: params.date_order,
        search: params.search,
    };

    state
        .services
        .news_queries
        .list_news(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "News record id")),
    responses(
        (status = 200, description = "The requested record.", body = NewsDto),
        (status = 404, description = "No record with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn get_news_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<NewsDto>> {
    state
        .services
        .news_queries
        .get_news_by_id(GetNewsByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/news",
    request_body = CreateNewsRequest,
    responses(
        (status = 201, description = "Created record with generated fields.", body = NewsDto),
        (status = 400, description = "Validation failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateNewsRequest>,
) -> HttpResult<(StatusCode, Json<NewsDto>)> {
    let command = CreateNewsCommand {
        title: payload.title,
        content: payload.content,
        date: payload.date,
    };

    let created = state
        .services
        .news_commands
        .create_news(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "News record id")),
    request_body = UpdateNewsRequest,
    responses(
        (status = 200, description = "Record after the partial update.", body = NewsDto),
        (status = 404, description = "No record with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn update_news(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNewsRequest>,
) -> HttpResult<Json<NewsDto>> {
    let command = UpdateNewsCommand {
        id,
        title: payload.title,
        content: payload.content,
        date: payload.date,
    };

    state
        .services
        .news_commands
        .update_news(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "News record id")),
    responses(
        (status = 200, description = "Deletion confirmation naming the id.", body = NewsDeletedDto),
        (status = 404, description = "No record with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn delete_news(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<NewsDeletedDto>> {
    state
        .services
        .news_commands
        .delete_news(DeleteNewsCommand { id })
        .await
        .into_http()
        .map(Json)
}
