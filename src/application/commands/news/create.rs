// src/application/commands/news/create.rs
use super::{NewsCommandService, fields};
use crate::{
    application::{dto::NewsDto, error::ApplicationResult},
    domain::news::NewNews,
};

pub struct CreateNewsCommand {
    pub title: String,
    pub content: String,
    pub date: String,
}

impl NewsCommandService {
    pub async fn create_news(&self, command: CreateNewsCommand) -> ApplicationResult<NewsDto> {
        let title = fields::create_title(command.title)?;
        let content = fields::create_content(command.content)?;
        let date = fields::parse_date(&command.date)?;

        let now = self.clock.now();
        let record = NewNews {
            title,
            content,
            date,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(record).await?;
        Ok(created.into())
    }
}
