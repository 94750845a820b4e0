use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::role::adapter::incoming::web::extractors::auth::CurrentUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::FollowTopicError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FollowerCountResponse {
    pub follower_count: u64,
}

#[post("/api/topics/{topic_id}/followers")]
pub async fn follow_topic_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.follow.execute(user.user_id, topic_id).await {
        Ok(follower_count) => ApiResponse::success(FollowerCountResponse { follower_count }),

        Err(FollowTopicError::TopicNotFound) => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }

        Err(FollowTopicError::AlreadyFollowing) => {
            ApiResponse::conflict("ALREADY_FOLLOWING", "You already follow this topic")
        }

        Err(FollowTopicError::RepositoryError(msg)) => {
            error!("Failed to follow topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value as JsonValue;

    use crate::role::application::domain::entities::UserId;
    use crate::tests::support::app_state_builder::member_role_service;
    use crate::tests::support::TestAppStateBuilder;
    use crate::topic::application::ports::incoming::use_cases::FollowTopicUseCase;

    #[derive(Clone)]
    struct MockFollowTopicUseCase {
        result: Result<u64, FollowTopicError>,
    }

    #[async_trait]
    impl FollowTopicUseCase for MockFollowTopicUseCase {
        async fn execute(
            &self,
            _user_id: UserId,
            _topic_id: Uuid,
        ) -> Result<u64, FollowTopicError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_follow_topic_returns_follower_count() {
        let app_state = TestAppStateBuilder::default()
            .with_follow_topic(MockFollowTopicUseCase { result: Ok(7) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(member_role_service())
                .service(follow_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{}/followers", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer member-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["data"]["follower_count"], 7);
    }

    #[actix_web::test]
    async fn test_follow_topic_twice_conflicts() {
        let app_state = TestAppStateBuilder::default()
            .with_follow_topic(MockFollowTopicUseCase {
                result: Err(FollowTopicError::AlreadyFollowing),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(member_role_service())
                .service(follow_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{}/followers", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer member-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ALREADY_FOLLOWING");
    }

    #[actix_web::test]
    async fn test_follow_topic_requires_authentication() {
        let app_state = TestAppStateBuilder::default()
            .with_follow_topic(MockFollowTopicUseCase { result: Ok(1) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(member_role_service())
                .service(follow_topic_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/topics/{}/followers", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
