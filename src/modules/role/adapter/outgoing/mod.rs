mod static_token_role_service;

pub use static_token_role_service::{StaticTokenRoleService, TokenSpecError};
