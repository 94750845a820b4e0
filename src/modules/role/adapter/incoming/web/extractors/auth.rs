use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::role::application::domain::entities::UserId;
use crate::role::application::ports::outgoing::RoleService;
use crate::shared::api::ApiResponse;

/// Any authenticated user. Extraction fails with 401 when the bearer token
/// is missing or unknown.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// A user holding the manager role. Manager-gated handlers take this
/// extractor, so the role check always runs before the handler body.
#[derive(Debug, Clone)]
pub struct ManagerUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn identify(req: &HttpRequest) -> Result<crate::role::application::ports::outgoing::Identity, ActixError> {
    let role_service = match req.app_data::<actix_web::web::Data<Arc<dyn RoleService>>>() {
        Some(service) => service,
        None => {
            return Err(create_api_error(ApiResponse::internal_error()));
        }
    };

    let token = match extract_token_from_header(req) {
        Some(t) => t,
        None => {
            return Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            )));
        }
    };

    role_service.identify(&token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Unknown or expired token",
        ))
    })
}

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(identify(req).map(|identity| CurrentUser {
            user_id: identity.user_id,
        }))
    }
}

impl FromRequest for ManagerUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = match identify(req) {
            Ok(identity) => identity,
            Err(e) => return ready(Err(e)),
        };

        if !identity.is_manager {
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "MANAGER_REQUIRED",
                "This operation requires the manager role",
            ))));
        }

        ready(Ok(ManagerUser {
            user_id: identity.user_id,
        }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
