// src/infrastructure/repositories/postgres_news.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{
    DateOrder, NewNews, News, NewsContent, NewsId, NewsListing, NewsReadRepository, NewsTitle,
    NewsUpdate, NewsWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresNewsWriteRepository {
    pool: PgPool,
}

impl PostgresNewsWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresNewsReadRepository {
    pool: PgPool,
}

impl PostgresNewsReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsRow {
    id: i64,
    title: String,
    content: String,
    date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NewsRow> for News {
    type Error = DomainError;

    fn try_from(row: NewsRow) -> Result<Self, Self::Error> {
        Ok(News {
            id: NewsId::new(row.id)?,
            title: NewsTitle::new(row.title)?,
            content: NewsContent::new(row.content)?,
            date: row.date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl NewsWriteRepository for PostgresNewsWriteRepository {
    async fn insert(&self, record: NewNews) -> DomainResult<News> {
        let NewNews {
            title,
            content,
            date,
            created_at,
            updated_at,
        } = record;

        let row = sqlx::query_as::<_, NewsRow>(
            "INSERT INTO news (title, content, date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, content, date, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(date)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        News::try_from(row)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<()> {
        let NewsUpdate {
            id,
            title,
            content,
            date,
            updated_at,
        } = update;

        // The SET clause always carries updated_at, so the statement stays
        // valid for a field-free update and the engine reports one affected
        // row whenever the id exists.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE news SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(content) = content {
            let content_str: String = content.into();
            builder.push(", content = ");
            builder.push_bind(content_str);
        }

        if let Some(date) = date {
            builder.push(", date = ");
            builder.push_bind(date);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("news record not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("news record not found".into()));
        }
        Ok(())
    }
}

impl PostgresNewsReadRepository {
    fn apply_search<'a>(builder: &mut QueryBuilder<'a, Postgres>, pattern: Option<&'a str>) {
        if let Some(pattern) = pattern {
            builder.push(" WHERE (title ILIKE ");
            builder.push_bind(pattern);
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, order: DateOrder) {
        // Secondary key keeps pagination deterministic when dates collide.
        match order {
            DateOrder::Asc => builder.push(" ORDER BY date ASC, id ASC"),
            DateOrder::Desc => builder.push(" ORDER BY date DESC, id DESC"),
        };
    }

    async fn count_matching(&self, pattern: Option<&str>) -> DomainResult<i64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM news");
        Self::apply_search(&mut builder, pattern);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl NewsReadRepository for PostgresNewsReadRepository {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<News>> {
        let row = sqlx::query_as::<_, NewsRow>(
            "SELECT id, title, content, date, created_at, updated_at
             FROM news WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(News::try_from).transpose()
    }

    async fn list_page(&self, listing: &NewsListing) -> DomainResult<(Vec<News>, i64)> {
        let pattern = listing.search_term().map(|term| format!("%{term}%"));
        let pattern = pattern.as_deref();

        let total = self.count_matching(pattern).await?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, title, content, date, created_at, updated_at FROM news",
        );
        Self::apply_search(&mut builder, pattern);
        Self::apply_ordering(&mut builder, listing.order);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(listing.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(listing.offset));

        let rows = builder
            .build_query_as::<NewsRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let records = rows
            .into_iter()
            .map(News::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, total))
    }
}
