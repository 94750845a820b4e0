use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::role::adapter::incoming::web::extractors::auth::ManagerUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::{
    UpdateTopicCommand, UpdateTopicCommandError, UpdateTopicError,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateTopicRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[patch("/api/topics/{topic_id}")]
pub async fn update_topic_handler(
    _manager: ManagerUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTopicRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let body = body.into_inner();

    let command = match UpdateTopicCommand::new(topic_id, body.name, body.description) {
        Ok(command) => command,
        Err(UpdateTopicCommandError::EmptyName) => {
            return ApiResponse::bad_request("EMPTY_NAME", "Topic name cannot be empty");
        }
        Err(UpdateTopicCommandError::NameTooLong) => {
            return ApiResponse::bad_request("NAME_TOO_LONG", "Topic name is too long");
        }
        Err(UpdateTopicCommandError::DescriptionTooLong) => {
            return ApiResponse::bad_request(
                "DESCRIPTION_TOO_LONG",
                "Topic description is too long",
            );
        }
    };

    match data.topic.update.execute(command).await {
        Ok(topic) => ApiResponse::success(topic),

        Err(UpdateTopicError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }

        Err(UpdateTopicError::DuplicateName) => {
            ApiResponse::conflict("DUPLICATE_NAME", "A topic with this name already exists")
        }

        Err(UpdateTopicError::RepositoryError(msg)) => {
            error!("Failed to update topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}
