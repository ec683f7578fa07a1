// src/application/commands/news/delete.rs
use super::NewsCommandService;
use crate::{
    application::{
        dto::NewsDeletedDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, news::NewsId},
};

pub struct DeleteNewsCommand {
    pub id: i64,
}

impl NewsCommandService {
    pub async fn delete_news(&self, command: DeleteNewsCommand) -> ApplicationResult<NewsDeletedDto> {
        let id = NewsId::new(command.id)?;

        match self.write_repo.delete(id).await {
            Ok(()) => Ok(NewsDeletedDto::for_id(command.id)),
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found(format!(
                "Id {} not found",
                command.id
            ))),
            Err(other) => Err(other.into()),
        }
    }
}
