use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::GetTopicError;
use crate::AppState;

#[get("/api/topics/{topic_id}")]
pub async fn get_topic_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get_one.execute(topic_id).await {
        Ok(topic) => ApiResponse::success(topic),

        Err(GetTopicError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }

        Err(GetTopicError::QueryFailed(msg)) => {
            error!("Failed to fetch topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}
