use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::{Page, PageRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Already following this topic")]
    AlreadyFollowing,

    #[error("Not following this topic")]
    NotFollowing,
}

/// Follow edges between users and topics. Existence and deletion state of
/// the topic itself are checked by the caller against `TopicQuery`.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    async fn add_follow(&self, user_id: UserId, topic_id: Uuid)
        -> Result<(), FollowRepositoryError>;

    async fn remove_follow(
        &self,
        user_id: UserId,
        topic_id: Uuid,
    ) -> Result<(), FollowRepositoryError>;

    async fn follower_count(&self, topic_id: Uuid) -> Result<u64, FollowRepositoryError>;

    /// Followers of a topic in the order they followed.
    async fn followers_of(
        &self,
        topic_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<UserId>, FollowRepositoryError>;

    /// Ids of every topic a user follows, including soft-deleted ones;
    /// callers filter through `TopicQuery`.
    async fn topics_followed_by(&self, user_id: UserId)
        -> Result<Vec<Uuid>, FollowRepositoryError>;
}
