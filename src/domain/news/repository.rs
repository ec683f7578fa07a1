use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{NewNews, News, NewsListing, NewsUpdate};
use crate::domain::news::value_objects::NewsId;
use async_trait::async_trait;

#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    async fn insert(&self, record: NewNews) -> DomainResult<News>;
    /// Apply a sparse update. Fails with `DomainError::NotFound` when the
    /// engine reports zero affected rows.
    async fn update(&self, update: NewsUpdate) -> DomainResult<()>;
    /// Physical removal. Fails with `DomainError::NotFound` when zero rows
    /// were affected.
    async fn delete(&self, id: NewsId) -> DomainResult<()>;
}

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<News>>;
    /// Returns the windowed page and the total count of records matching the
    /// filter, ignoring the window.
    async fn list_page(&self, listing: &NewsListing) -> DomainResult<(Vec<News>, i64)>;
}
