// src/domain/news/entity.rs
use crate::domain::news::value_objects::{DateOrder, NewsContent, NewsId, NewsTitle};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct News {
    pub id: NewsId,
    pub title: NewsTitle,
    pub content: NewsContent,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: NewsTitle,
    pub content: NewsContent,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sparse field set for a partial update. Absent fields are left untouched;
/// `updated_at` is always written.
#[derive(Debug, Clone)]
pub struct NewsUpdate {
    pub id: NewsId,
    pub title: Option<NewsTitle>,
    pub content: Option<NewsContent>,
    pub date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

impl NewsUpdate {
    pub fn new(id: NewsId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            date: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: NewsTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: NewsContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_field_free(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.date.is_none()
    }
}

/// One listing request: optional substring filter, date ordering, and the
/// offset window. The repository compiles this into a count query and a
/// fetch query over the same predicate.
#[derive(Debug, Clone)]
pub struct NewsListing {
    pub search: Option<String>,
    pub order: DateOrder,
    pub limit: u32,
    pub offset: u32,
}

impl NewsListing {
    /// Search term with blank input treated as no filter.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}
