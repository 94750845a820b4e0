use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Soft-delete a single topic.
#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: Uuid) -> Result<(), DeleteTopicError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Soft-delete a batch of topics. Unknown or already-deleted ids are skipped;
/// the batch size cap is enforced by the HTTP layer.
#[async_trait]
pub trait DeleteTopicsUseCase: Send + Sync {
    async fn execute(&self, topic_ids: Vec<Uuid>) -> Result<(), DeleteTopicsError>;
}
