// src/presentation/http/openapi.rs
use crate::application::dto::{NewsDto, Page};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsListResponse {
    pub data: Vec<NewsDto>,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
}

impl From<Page<NewsDto>> for NewsListResponse {
    fn from(page: Page<NewsDto>) -> Self {
        Self {
            data: page.data,
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::get_news_by_id,
        crate::presentation::http::controllers::news::create_news,
        crate::presentation::http::controllers::news::update_news,
        crate::presentation::http::controllers::news::delete_news,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            NewsListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::news::CreateNewsRequest,
            crate::presentation::http::controllers::news::UpdateNewsRequest,
            crate::application::dto::NewsDto,
            crate::application::dto::NewsDeletedDto
        )
    ),
    tags(
        (name = "News", description = "News record store: create, list, fetch, patch, delete."),
        (name = "System", description = "Service health.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
