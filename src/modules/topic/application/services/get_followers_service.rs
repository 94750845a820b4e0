use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::UserId;
use crate::topic::application::ports::{
    incoming::use_cases::{GetFollowersError, GetFollowersUseCase},
    outgoing::{FollowRepository, Page, PageRequest, TopicQuery},
};

#[derive(Debug, Clone)]
pub struct GetFollowersService<Q, F>
where
    Q: TopicQuery,
    F: FollowRepository,
{
    query: Q,
    follows: F,
}

impl<Q, F> GetFollowersService<Q, F>
where
    Q: TopicQuery,
    F: FollowRepository,
{
    pub fn new(query: Q, follows: F) -> Self {
        Self { query, follows }
    }
}

#[async_trait]
impl<Q, F> GetFollowersUseCase for GetFollowersService<Q, F>
where
    Q: TopicQuery + Send + Sync,
    F: FollowRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<UserId>, GetFollowersError> {
        let topic = self
            .query
            .get_topic(topic_id)
            .await
            .map_err(|e| GetFollowersError::QueryFailed(e.to_string()))?;

        if topic.is_none() {
            return Err(GetFollowersError::TopicNotFound);
        }

        self.follows
            .followers_of(topic_id, page)
            .await
            .map_err(|e| GetFollowersError::QueryFailed(e.to_string()))
    }
}
