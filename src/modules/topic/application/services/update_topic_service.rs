use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicPatch, TopicRecord, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicRecord, UpdateTopicError> {
        let patch = TopicPatch {
            name: command.name().cloned(),
            description: command.description().cloned(),
        };

        self.repository
            .update_topic(command.topic_id(), patch)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                TopicRepositoryError::DuplicateName => UpdateTopicError::DuplicateName,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })
    }
}
