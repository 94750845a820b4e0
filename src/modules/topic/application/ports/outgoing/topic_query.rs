use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// Read-side DTO for a topic as the store knows it.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub follower_count: u64,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn empty(request: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            page: request.page,
            per_page: request.per_page,
            total: 0,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Fetch a single non-deleted topic. Soft-deleted topics read as absent.
    async fn get_topic(&self, topic_id: Uuid) -> Result<Option<TopicRecord>, TopicQueryError>;

    /// Newest-first listing. `deleted` selects between the live list and the
    /// trash list.
    async fn list_topics(
        &self,
        deleted: bool,
        page: PageRequest,
    ) -> Result<Page<TopicRecord>, TopicQueryError>;

    /// Fetch the non-deleted topics among `topic_ids`, newest first.
    async fn get_topics_by_ids(
        &self,
        topic_ids: &[Uuid],
    ) -> Result<Vec<TopicRecord>, TopicQueryError>;
}
