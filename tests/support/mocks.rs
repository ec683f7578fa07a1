// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use kawaraban_core::application::ports::time::Clock;
use kawaraban_core::domain::errors::{DomainError, DomainResult};
use kawaraban_core::domain::news::{
    DateOrder, NewNews, News, NewsId, NewsListing, NewsReadRepository, NewsUpdate,
    NewsWriteRepository,
};

/// Base instant every test clock starts from.
pub static TEST_EPOCH: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 5, 21, 12, 0, 0).unwrap());

/// Manually advanced clock so timestamp ordering is observable in tests.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(*TEST_EPOCH),
        }
    }
}

impl FixedClock {
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::seconds(secs);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Default)]
struct Store {
    records: Vec<News>,
    next_id: i64,
}

/// In-memory stand-in for the Postgres repositories, mirroring their
/// observable contract: id assignment on insert, rows-affected style
/// not-found on update/delete, and windowed listing with an un-windowed
/// total.
#[derive(Default)]
pub struct InMemoryNewsRepository {
    store: Mutex<Store>,
}

impl InMemoryNewsRepository {
    pub fn record_count(&self) -> usize {
        self.store.lock().unwrap().records.len()
    }
}

#[async_trait]
impl NewsWriteRepository for InMemoryNewsRepository {
    async fn insert(&self, record: NewNews) -> DomainResult<News> {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let created = News {
            id: NewsId::new(store.next_id).unwrap(),
            title: record.title,
            content: record.content,
            date: record.date,
            created_at: record.created_at,
            updated_at: record.updated_at,
        };
        store.records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<()> {
        let mut store = self.store.lock().unwrap();
        let record = store
            .records
            .iter_mut()
            .find(|record| record.id == update.id)
            .ok_or_else(|| DomainError::NotFound("news record not found".into()))?;

        if let Some(title) = update.title {
            record.title = title;
        }
        if let Some(content) = update.content {
            record.content = content;
        }
        if let Some(date) = update.date {
            record.date = date;
        }
        record.updated_at = update.updated_at;
        Ok(())
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let mut store = self.store.lock().unwrap();
        let before = store.records.len();
        store.records.retain(|record| record.id != id);
        if store.records.len() == before {
            return Err(DomainError::NotFound("news record not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsReadRepository for InMemoryNewsRepository {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<News>> {
        let store = self.store.lock().unwrap();
        Ok(store.records.iter().find(|record| record.id == id).cloned())
    }

    async fn list_page(&self, listing: &NewsListing) -> DomainResult<(Vec<News>, i64)> {
        let store = self.store.lock().unwrap();

        let needle = listing.search_term().map(str::to_lowercase);
        let mut matching: Vec<News> = store
            .records
            .iter()
            .filter(|record| match &needle {
                Some(needle) => {
                    record.title.as_str().to_lowercase().contains(needle)
                        || record.content.as_str().to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = a
                .date
                .cmp(&b.date)
                .then(i64::from(a.id).cmp(&i64::from(b.id)));
            match listing.order {
                DateOrder::Asc => ordering,
                DateOrder::Desc => ordering.reverse(),
            }
        });

        let total = matching.len() as i64;
        let page: Vec<News> = matching
            .into_iter()
            .skip(listing.offset as usize)
            .take(listing.limit as usize)
            .collect();

        Ok((page, total))
    }
}
