use super::NewsQueryService;
use crate::{
    application::{
        dto::{NewsDto, Page},
        error::ApplicationResult,
    },
    domain::news::{DateOrder, NewsListing},
};

pub struct ListNewsQuery {
    pub limit: u32,
    pub offset: u32,
    pub date_order: DateOrder,
    pub search: Option<String>,
}

impl NewsQueryService {
    pub async fn list_news(&self, query: ListNewsQuery) -> ApplicationResult<Page<NewsDto>> {
        let listing = NewsListing {
            search: query.search,
            order: query.date_order,
            limit: normalize_limit(query.limit),
            offset: query.offset,
        };

        let (records, total) = self.read_repo.list_page(&listing).await?;
        let data = records.into_iter().map(Into::into).collect();
        Ok(Page::new(data, total, listing.limit, listing.offset))
    }
}

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

/// Zero falls back to the default page size; oversized requests are capped.
fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
