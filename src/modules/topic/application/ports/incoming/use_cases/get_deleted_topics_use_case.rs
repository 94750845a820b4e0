use async_trait::async_trait;

use crate::topic::application::ports::outgoing::{Page, PageRequest, TopicRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDeletedTopicsError {
    #[error("Failed to fetch deleted topics: {0}")]
    QueryFailed(String),
}

/// Trash listing: only soft-deleted topics.
#[async_trait]
pub trait GetDeletedTopicsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest)
        -> Result<Page<TopicRecord>, GetDeletedTopicsError>;
}
