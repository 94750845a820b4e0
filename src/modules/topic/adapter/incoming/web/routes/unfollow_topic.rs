use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::role::adapter::incoming::web::extractors::auth::CurrentUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::UnfollowTopicError;
use crate::AppState;

use super::follow_topic::FollowerCountResponse;

#[delete("/api/topics/{topic_id}/followers")]
pub async fn unfollow_topic_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.unfollow.execute(user.user_id, topic_id).await {
        Ok(follower_count) => ApiResponse::success(FollowerCountResponse { follower_count }),

        Err(UnfollowTopicError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }

        Err(UnfollowTopicError::NotFollowing) => {
            ApiResponse::bad_request("NOT_FOLLOWING", "You do not follow this topic")
        }

        Err(UnfollowTopicError::RepositoryError(msg)) => {
            error!("Failed to unfollow topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}
