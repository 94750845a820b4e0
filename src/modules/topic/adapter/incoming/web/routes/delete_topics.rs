use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::role::adapter::incoming::web::extractors::auth::ManagerUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::DeleteTopicsError;
use crate::AppState;

const MAX_BULK_DELETE: usize = 100;

#[derive(Debug, Deserialize)]
pub struct DeleteTopicsQuery {
    /// Comma-separated topic ids, e.g. `?topic_id=a,b,c`.
    #[serde(default)]
    pub topic_id: String,
}

fn parse_ids(raw: &str) -> Result<Vec<Uuid>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Uuid::parse_str(s).map_err(|_| s.to_string()))
        .collect()
}

#[delete("/api/topics")]
pub async fn delete_topics_handler(
    _manager: ManagerUser,
    query: web::Query<DeleteTopicsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ids = match parse_ids(&query.topic_id) {
        Ok(ids) => ids,
        Err(bad) => {
            return ApiResponse::bad_request("INVALID_ID", &format!("Invalid topic id: {bad}"));
        }
    };

    if ids.len() > MAX_BULK_DELETE {
        return ApiResponse::bad_request(
            "TOO_MANY_IDS",
            &format!("At most {MAX_BULK_DELETE} topics can be deleted per request"),
        );
    }

    // An empty list is a no-op, same as ids that are already gone.
    match data.topic.delete_many.execute(ids).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteTopicsError::RepositoryError(msg)) => {
            error!("Failed to bulk delete topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
