use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicRecord;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    name: String,
    description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must not exceed {MAX_NAME_LEN} characters")]
    NameTooLong,

    #[error("Description must not exceed {MAX_DESCRIPTION_LEN} characters")]
    DescriptionTooLong,
}

impl CreateTopicCommand {
    pub fn new(
        name: String,
        description: Option<String>,
    ) -> Result<Self, CreateTopicCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateTopicCommandError::EmptyName);
        }

        if name.chars().count() > MAX_NAME_LEN {
            return Err(CreateTopicCommandError::NameTooLong);
        }

        let description = description.unwrap_or_default();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(CreateTopicCommandError::DescriptionTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("A topic with this name already exists")]
    DuplicateName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError>;
}
