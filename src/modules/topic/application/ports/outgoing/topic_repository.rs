use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::ports::outgoing::TopicRecord;

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub name: String,
    pub description: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct TopicPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("A topic with this name already exists")]
    DuplicateName,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn insert_topic(&self, data: NewTopic) -> Result<TopicRecord, TopicRepositoryError>;

    async fn update_topic(
        &self,
        topic_id: Uuid,
        patch: TopicPatch,
    ) -> Result<TopicRecord, TopicRepositoryError>;

    async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;

    /// Bulk soft-delete. Ids that are unknown or already deleted are skipped.
    async fn soft_delete_topics(&self, topic_ids: &[Uuid]) -> Result<(), TopicRepositoryError>;
}
