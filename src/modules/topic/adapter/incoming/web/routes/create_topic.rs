use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::role::adapter::incoming::web::extractors::auth::ManagerUser;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub name: String,
    pub description: Option<String>,
}

#[post("/api/topics")]
pub async fn create_topic_handler(
    _manager: ManagerUser,
    body: web::Json<CreateTopicRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();

    let command = match CreateTopicCommand::new(body.name, body.description) {
        Ok(command) => command,
        Err(CreateTopicCommandError::EmptyName) => {
            return ApiResponse::bad_request("EMPTY_NAME", "Topic name cannot be empty");
        }
        Err(CreateTopicCommandError::NameTooLong) => {
            return ApiResponse::bad_request("NAME_TOO_LONG", "Topic name is too long");
        }
        Err(CreateTopicCommandError::DescriptionTooLong) => {
            return ApiResponse::bad_request(
                "DESCRIPTION_TOO_LONG",
                "Topic description is too long",
            );
        }
    };

    match data.topic.create.execute(command).await {
        Ok(topic) => ApiResponse::created(topic),

        Err(CreateTopicError::DuplicateName) => {
            ApiResponse::conflict("DUPLICATE_NAME", "A topic with this name already exists")
        }

        Err(CreateTopicError::RepositoryError(msg)) => {
            error!("Failed to create topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
