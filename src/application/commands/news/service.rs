// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::news::{NewsReadRepository, NewsWriteRepository},
};

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsCommandService {
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}
