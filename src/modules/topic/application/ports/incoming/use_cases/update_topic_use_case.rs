use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::ports::incoming::use_cases::create_topic_use_case::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
};
use crate::topic::application::ports::outgoing::TopicRecord;

/// Partial update of a topic. Absent fields keep their stored value; the
/// same validation rules as creation apply to the fields that are present.
#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    topic_id: Uuid,
    name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateTopicCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must not exceed {MAX_NAME_LEN} characters")]
    NameTooLong,

    #[error("Description must not exceed {MAX_DESCRIPTION_LEN} characters")]
    DescriptionTooLong,
}

impl UpdateTopicCommand {
    pub fn new(
        topic_id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, UpdateTopicCommandError> {
        let name = match name {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(UpdateTopicCommandError::EmptyName);
                }
                if trimmed.chars().count() > MAX_NAME_LEN {
                    return Err(UpdateTopicCommandError::NameTooLong);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        if let Some(desc) = &description {
            if desc.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(UpdateTopicCommandError::DescriptionTooLong);
            }
        }

        Ok(Self {
            topic_id,
            name,
            description,
        })
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("A topic with this name already exists")]
    DuplicateName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicRecord, UpdateTopicError>;
}
