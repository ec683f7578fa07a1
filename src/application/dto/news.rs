use crate::domain::news::News;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: i64,
    #[schema(example = "Your news title")]
    pub title: String,
    #[schema(example = "Your news content.")]
    pub content: String,
    #[schema(example = "2025-05-21")]
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<News> for NewsDto {
    fn from(record: News) -> Self {
        Self {
            id: record.id.into(),
            title: record.title.into(),
            content: record.content.into(),
            date: record.date,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Confirmation payload returned after a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsDeletedDto {
    #[schema(example = "Id 1 deleted successfully")]
    pub message: String,
}

impl NewsDeletedDto {
    pub fn for_id(id: i64) -> Self {
        Self {
            message: format!("Id {id} deleted successfully"),
        }
    }
}
