use super::{NewsCommandService, fields};
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        news::{NewsContent, NewsId, NewsTitle, NewsUpdate},
    },
};

/// Partial field set; absent fields stay untouched. A field-free request is
/// still a valid update attempt and still requires the row to exist.
pub struct UpdateNewsCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

impl NewsCommandService {
    pub async fn update_news(&self, command: UpdateNewsCommand) -> ApplicationResult<NewsDto> {
        let id = NewsId::new(command.id)?;
        let mut update = NewsUpdate::new(id, self.clock.now());

        if let Some(title) = command.title {
            update = update.with_title(NewsTitle::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(NewsContent::new(content)?);
        }
        if let Some(date) = command.date {
            update = update.with_date(fields::parse_date(&date)?);
        }

        self.write_repo.update(update).await.map_err(|err| match err {
            DomainError::NotFound(_) => {
                ApplicationError::not_found(format!("Id {} not found", command.id))
            }
            other => other.into(),
        })?;

        // Re-fetch through the same path findOne uses so the caller sees the
        // engine-refreshed record.
        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("Id {} not found", command.id)))?;
        Ok(record.into())
    }
}
