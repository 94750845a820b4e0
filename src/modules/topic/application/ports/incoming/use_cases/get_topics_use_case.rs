use async_trait::async_trait;

use crate::topic::application::ports::outgoing::{Page, PageRequest, TopicRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicsError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

/// Paginated listing of live (non-deleted) topics, newest first.
#[async_trait]
pub trait GetTopicsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<Page<TopicRecord>, GetTopicsError>;
}
