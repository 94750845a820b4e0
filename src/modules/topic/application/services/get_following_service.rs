use async_trait::async_trait;

use crate::role::application::domain::entities::UserId;
use crate::topic::application::ports::{
    incoming::use_cases::{GetFollowingError, GetFollowingUseCase},
    outgoing::{FollowRepository, TopicQuery, TopicRecord},
};

#[derive(Debug, Clone)]
pub struct GetFollowingService<Q, F>
where
    Q: TopicQuery,
    F: FollowRepository,
{
    query: Q,
    follows: F,
}

impl<Q, F> GetFollowingService<Q, F>
where
    Q: TopicQuery,
    F: FollowRepository,
{
    pub fn new(query: Q, follows: F) -> Self {
        Self { query, follows }
    }
}

#[async_trait]
impl<Q, F> GetFollowingUseCase for GetFollowingService<Q, F>
where
    Q: TopicQuery + Send + Sync,
    F: FollowRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<TopicRecord>, GetFollowingError> {
        let topic_ids = self
            .follows
            .topics_followed_by(user_id)
            .await
            .map_err(|e| GetFollowingError::QueryFailed(e.to_string()))?;

        // Soft-deleted topics drop out here: the query only returns live rows.
        self.query
            .get_topics_by_ids(&topic_ids)
            .await
            .map_err(|e| GetFollowingError::QueryFailed(e.to_string()))
    }
}
