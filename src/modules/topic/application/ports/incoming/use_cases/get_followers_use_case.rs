use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::{Page, PageRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFollowersError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch followers: {0}")]
    QueryFailed(String),
}

/// Followers of a topic. User records are external; only ids are reported.
#[async_trait]
pub trait GetFollowersUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<UserId>, GetFollowersError>;
}
