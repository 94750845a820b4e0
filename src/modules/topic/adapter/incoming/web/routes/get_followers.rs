use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::GetFollowersError;
use crate::AppState;

use super::PageQuery;

#[get("/api/topics/{topic_id}/followers")]
pub async fn get_followers_handler(
    path: web::Path<Uuid>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data
        .topic
        .get_followers
        .execute(topic_id, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),

        Err(GetFollowersError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }

        Err(GetFollowersError::QueryFailed(msg)) => {
            error!("Failed to list followers of topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}
