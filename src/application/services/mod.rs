// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::news::NewsCommandService, ports::time::Clock, queries::news::NewsQueryService,
    },
    domain::news::{NewsReadRepository, NewsWriteRepository},
};

pub struct ApplicationServices {
    pub news_commands: Arc<NewsCommandService>,
    pub news_queries: Arc<NewsQueryService>,
}

impl ApplicationServices {
    pub fn new(
        news_write_repo: Arc<dyn NewsWriteRepository>,
        news_read_repo: Arc<dyn NewsReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let news_commands = Arc::new(NewsCommandService::new(
            Arc::clone(&news_write_repo),
            Arc::clone(&news_read_repo),
            Arc::clone(&clock),
        ));
        let news_queries = Arc::new(NewsQueryService::new(Arc::clone(&news_read_repo)));

        Self {
            news_commands,
            news_queries,
        }
    }
}
