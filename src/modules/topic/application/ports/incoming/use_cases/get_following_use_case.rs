use async_trait::async_trait;

use crate::role::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFollowingError {
    #[error("Failed to fetch followed topics: {0}")]
    QueryFailed(String),
}

/// Live topics a user follows. An unknown user simply follows nothing.
#[async_trait]
pub trait GetFollowingUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<TopicRecord>, GetFollowingError>;
}
