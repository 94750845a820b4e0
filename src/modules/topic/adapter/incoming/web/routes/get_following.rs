use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::role::adapter::incoming::web::extractors::auth::CurrentUser;
use crate::role::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::GetFollowingError;
use crate::AppState;

/// Topics followed by an arbitrary user.
#[get("/api/users/{user_id}/following_topics")]
pub async fn get_user_following_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    following(UserId::from(path.into_inner()), &data).await
}

/// Topics followed by the caller.
#[get("/api/user/following_topics")]
pub async fn get_my_following_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
) -> impl Responder {
    following(user.user_id, &data).await
}

async fn following(user_id: UserId, data: &web::Data<AppState>) -> impl Responder {
    match data.topic.get_following.execute(user_id).await {
        Ok(topics) => ApiResponse::success(topics),

        Err(GetFollowingError::QueryFailed(msg)) => {
            error!("Failed to list followed topics of {}: {}", user_id, msg);
            ApiResponse::internal_error()
        }
    }
}
