use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{NewTopic, TopicRecord, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError> {
        let data = NewTopic {
            name: command.name().to_string(),
            description: command.description().to_string(),
        };

        self.repository
            .insert_topic(data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::DuplicateName => CreateTopicError::DuplicateName,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })
    }
}
