use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::role::adapter::incoming::web::extractors::auth::ManagerUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::DeleteTopicError;
use crate::AppState;

#[delete("/api/topics/{topic_id}")]
pub async fn delete_topic_handler(
    _manager: ManagerUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.delete.execute(topic_id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteTopicError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }

        Err(DeleteTopicError::RepositoryError(msg)) => {
            error!("Failed to delete topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}
