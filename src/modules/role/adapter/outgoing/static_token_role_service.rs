use std::collections::HashMap;

use uuid::Uuid;

use crate::role::application::domain::entities::UserId;
use crate::role::application::ports::outgoing::{Identity, RoleError, RoleService};

/// Identity adapter backed by a static token table from configuration.
///
/// Token spec format (the `API_TOKENS` variable):
///
/// ```text
/// alice-token=6b6f0214-...:member,bob-token=91c1a7f3-...:manager
/// ```
///
/// Real credential handling lives outside this service; this adapter only
/// exists so local runs and deployments fronted by an auth proxy can map
/// opaque bearer tokens to identities.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenRoleService {
    tokens: HashMap<String, Identity>,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenSpecError {
    #[error("Malformed token entry: {0}")]
    MalformedEntry(String),

    #[error("Invalid user id in token entry: {0}")]
    InvalidUserId(String),

    #[error("Unknown role {role} in token entry (expected member or manager)")]
    UnknownRole { role: String },
}

impl StaticTokenRoleService {
    pub fn parse(spec: &str) -> Result<Self, TokenSpecError> {
        let mut tokens = HashMap::new();

        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (token, rest) = entry
                .split_once('=')
                .ok_or_else(|| TokenSpecError::MalformedEntry(entry.to_string()))?;
            let (user_id, role) = rest
                .split_once(':')
                .ok_or_else(|| TokenSpecError::MalformedEntry(entry.to_string()))?;

            let user_id = Uuid::parse_str(user_id.trim())
                .map_err(|_| TokenSpecError::InvalidUserId(entry.to_string()))?;

            let is_manager = match role.trim() {
                "manager" => true,
                "member" => false,
                other => {
                    return Err(TokenSpecError::UnknownRole {
                        role: other.to_string(),
                    })
                }
            };

            tokens.insert(
                token.trim().to_string(),
                Identity {
                    user_id: UserId::from(user_id),
                    is_manager,
                },
            );
        }

        Ok(Self { tokens })
    }

    /// Build from the `API_TOKENS` environment variable. An unset variable
    /// yields an empty table, which rejects every request.
    pub fn from_env() -> Result<Self, TokenSpecError> {
        match std::env::var("API_TOKENS") {
            Ok(spec) => Self::parse(&spec),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl RoleService for StaticTokenRoleService {
    fn identify(&self, token: &str) -> Result<Identity, RoleError> {
        self.tokens.get(token).copied().ok_or(RoleError::UnknownToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_member_and_manager_entries() {
        let member_id = Uuid::new_v4();
        let manager_id = Uuid::new_v4();
        let spec = format!("alice={}:member, bob={}:manager", member_id, manager_id);

        let service = StaticTokenRoleService::parse(&spec).unwrap();

        let alice = service.identify("alice").unwrap();
        assert_eq!(alice.user_id.value(), member_id);
        assert!(!alice.is_manager);

        let bob = service.identify("bob").unwrap();
        assert_eq!(bob.user_id.value(), manager_id);
        assert!(bob.is_manager);
    }

    #[test]
    fn parse_empty_spec_yields_empty_table() {
        let service = StaticTokenRoleService::parse("").unwrap();

        assert!(matches!(
            service.identify("anything"),
            Err(RoleError::UnknownToken)
        ));
    }

    #[test]
    fn parse_rejects_entry_without_role() {
        let spec = format!("alice={}", Uuid::new_v4());

        let result = StaticTokenRoleService::parse(&spec);

        assert!(matches!(result, Err(TokenSpecError::MalformedEntry(_))));
    }

    #[test]
    fn parse_rejects_unknown_role() {
        let spec = format!("alice={}:admin", Uuid::new_v4());

        let result = StaticTokenRoleService::parse(&spec);

        assert!(matches!(result, Err(TokenSpecError::UnknownRole { .. })));
    }

    #[test]
    fn parse_rejects_bad_uuid() {
        let result = StaticTokenRoleService::parse("alice=not-a-uuid:member");

        assert!(matches!(result, Err(TokenSpecError::InvalidUserId(_))));
    }

    #[test]
    fn identify_unknown_token_fails() {
        let spec = format!("alice={}:member", Uuid::new_v4());
        let service = StaticTokenRoleService::parse(&spec).unwrap();

        assert!(matches!(
            service.identify("mallory"),
            Err(RoleError::UnknownToken)
        ));
    }
}
