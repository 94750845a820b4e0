use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::UserId;
use crate::topic::application::ports::{
    incoming::use_cases::{
        FollowTopicError, FollowTopicUseCase, UnfollowTopicError, UnfollowTopicUseCase,
    },
    outgoing::{FollowRepository, FollowRepositoryError, TopicQuery},
};

/// Follow and unfollow share the same collaborators and the same shape:
/// confirm the topic is live, mutate the edge, report the new count.
#[derive(Debug, Clone)]
pub struct FollowTopicService<Q, F>
where
    Q: TopicQuery,
    F: FollowRepository,
{
    query: Q,
    follows: F,
}

impl<Q, F> FollowTopicService<Q, F>
where
    Q: TopicQuery,
    F: FollowRepository,
{
    pub fn new(query: Q, follows: F) -> Self {
        Self { query, follows }
    }
}

#[async_trait]
impl<Q, F> FollowTopicUseCase for FollowTopicService<Q, F>
where
    Q: TopicQuery + Send + Sync,
    F: FollowRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, topic_id: Uuid) -> Result<u64, FollowTopicError> {
        let topic = self
            .query
            .get_topic(topic_id)
            .await
            .map_err(|e| FollowTopicError::RepositoryError(e.to_string()))?;

        if topic.is_none() {
            return Err(FollowTopicError::TopicNotFound);
        }

        self.follows
            .add_follow(user_id, topic_id)
            .await
            .map_err(|e| match e {
                FollowRepositoryError::AlreadyFollowing => FollowTopicError::AlreadyFollowing,
                other => FollowTopicError::RepositoryError(other.to_string()),
            })?;

        self.follows
            .follower_count(topic_id)
            .await
            .map_err(|e| FollowTopicError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q, F> UnfollowTopicUseCase for FollowTopicService<Q, F>
where
    Q: TopicQuery + Send + Sync,
    F: FollowRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, topic_id: Uuid) -> Result<u64, UnfollowTopicError> {
        let topic = self
            .query
            .get_topic(topic_id)
            .await
            .map_err(|e| UnfollowTopicError::RepositoryError(e.to_string()))?;

        if topic.is_none() {
            return Err(UnfollowTopicError::TopicNotFound);
        }

        self.follows
            .remove_follow(user_id, topic_id)
            .await
            .map_err(|e| match e {
                FollowRepositoryError::NotFollowing => UnfollowTopicError::NotFollowing,
                other => UnfollowTopicError::RepositoryError(other.to_string()),
            })?;

        self.follows
            .follower_count(topic_id)
            .await
            .map_err(|e| UnfollowTopicError::RepositoryError(e.to_string()))
    }
}
