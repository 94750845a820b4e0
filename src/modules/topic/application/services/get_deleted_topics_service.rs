use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{GetDeletedTopicsError, GetDeletedTopicsUseCase},
    outgoing::{Page, PageRequest, TopicQuery, TopicRecord},
};

#[derive(Debug, Clone)]
pub struct GetDeletedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetDeletedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDeletedTopicsUseCase for GetDeletedTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<Page<TopicRecord>, GetDeletedTopicsError> {
        self.query
            .list_topics(true, page)
            .await
            .map_err(|e| GetDeletedTopicsError::QueryFailed(e.to_string()))
    }
}
