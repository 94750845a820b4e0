use actix_web::{get, web, Responder};
use tracing::error;

use crate::role::adapter::incoming::web::extractors::auth::ManagerUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::GetDeletedTopicsError;
use crate::AppState;

use super::PageQuery;

#[get("/api/trash/topics")]
pub async fn get_deleted_topics_handler(
    _manager: ManagerUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .topic
        .get_deleted
        .execute(query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),

        Err(GetDeletedTopicsError::QueryFailed(msg)) => {
            error!("Failed to list deleted topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
