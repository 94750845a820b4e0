use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Follow
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Already following this topic")]
    AlreadyFollowing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Add a follow edge. Returns the follower count after the change.
#[async_trait]
pub trait FollowTopicUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, topic_id: Uuid) -> Result<u64, FollowTopicError>;
}

//
// ──────────────────────────────────────────────────────────
// Unfollow
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnfollowTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Not following this topic")]
    NotFollowing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Remove a follow edge. Returns the follower count after the change.
#[async_trait]
pub trait UnfollowTopicUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, topic_id: Uuid) -> Result<u64, UnfollowTopicError>;
}
