use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::GetTopicsError;
use crate::AppState;

use super::PageQuery;

#[get("/api/topics")]
pub async fn get_topics_handler(
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.get_list.execute(query.into_inner().into()).await {
        Ok(page) => ApiResponse::success(page),

        Err(GetTopicsError::QueryFailed(msg)) => {
            error!("Failed to list topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
