use crate::role::application::domain::entities::UserId;

/// Who the bearer of a token is, and whether they hold the manager role.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: UserId,
    pub is_manager: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RoleError {
    #[error("Unknown or expired token")]
    UnknownToken,
}

/// Outgoing port for identity resolution. How tokens map to identities is
/// owned by the adapter behind this trait.
pub trait RoleService: Send + Sync {
    fn identify(&self, token: &str) -> Result<Identity, RoleError>;
}
