use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::WebError;

/// Role carried by an access token. Admins can do anything a coordinator
/// can; any valid token clears the student gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Coordinator,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value.to_ascii_lowercase().as_str() {
            "student" => Some(Role::Student),
            "coordinator" => Some(Role::Coordinator),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn allows(self, required: Role) -> bool {
        match required {
            Role::Student => true,
            Role::Coordinator => matches!(self, Role::Coordinator | Role::Admin),
            Role::Admin => matches!(self, Role::Admin),
        }
    }
}

/// Authenticated caller, resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: Role,
}

/// Token table issued by the external credential service, configured as
/// comma-separated `token:user-uuid:role` triples.
#[derive(Clone, Default)]
pub struct AccessTokens {
    tokens: HashMap<String, Principal>,
}

impl AccessTokens {
    pub fn from_comma_separated(raw: &str) -> Self {
        let mut tokens = HashMap::new();

        for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let mut parts = entry.splitn(3, ':');
            let (Some(token), Some(user), Some(role)) = (parts.next(), parts.next(), parts.next())
            else {
                tracing::warn!("Ignoring malformed access token entry");
                continue;
            };
            let Ok(user_id) = Uuid::parse_str(user.trim()) else {
                tracing::warn!("Ignoring access token entry with invalid user id");
                continue;
            };
            let Some(role) = Role::parse(role.trim()) else {
                tracing::warn!("Ignoring access token entry with unknown role");
                continue;
            };
            tokens.insert(token.trim().to_string(), Principal { user_id, role });
        }

        Self { tokens }
    }

    pub fn resolve(&self, token: &str) -> Option<&Principal> {
        self.tokens.get(token)
    }
}

pub async fn require_auth(
    State(tokens): State<AccessTokens>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    require_role(Role::Student, "a participant", tokens, req, next).await
}

pub async fn require_coordinator(
    State(tokens): State<AccessTokens>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    require_role(Role::Coordinator, "a coordinator", tokens, req, next).await
}

pub async fn require_admin(
    State(tokens): State<AccessTokens>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    require_role(Role::Admin, "an admin", tokens, req, next).await
}

async fn require_role(
    required: Role,
    label: &str,
    tokens: AccessTokens,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let principal = authenticate(&tokens, &req)?;

    if !principal.role.allows(required) {
        return Err(WebError::Forbidden(format!("Not authorized as {label}")));
    }

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

fn authenticate(tokens: &AccessTokens, req: &Request) -> Result<Principal, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| WebError::Unauthorized("Not authorized, no token".to_string()))?;

    tokens.resolve(token).cloned().ok_or_else(|| {
        tracing::warn!("Invalid access token attempt");
        WebError::Unauthorized("Not authorized, token failed".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_clears_every_gate() {
        assert!(Role::Admin.allows(Role::Student));
        assert!(Role::Admin.allows(Role::Coordinator));
        assert!(Role::Admin.allows(Role::Admin));
    }

    #[test]
    fn test_coordinator_is_not_admin() {
        assert!(Role::Coordinator.allows(Role::Coordinator));
        assert!(!Role::Coordinator.allows(Role::Admin));
    }

    #[test]
    fn test_student_only_clears_student_gate() {
        assert!(Role::Student.allows(Role::Student));
        assert!(!Role::Student.allows(Role::Coordinator));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("COORDINATOR"), Some(Role::Coordinator));
        assert_eq!(Role::parse("judge"), None);
    }

    #[test]
    fn test_token_triples_parse() {
        let tokens = AccessTokens::from_comma_separated(
            "tok-a:11111111-1111-1111-1111-111111111111:admin, \
             tok-b:22222222-2222-2222-2222-222222222222:student",
        );

        let admin = tokens.resolve("tok-a").unwrap();
        assert_eq!(admin.role, Role::Admin);

        let student = tokens.resolve("tok-b").unwrap();
        assert_eq!(
            student.user_id,
            Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap()
        );
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let tokens =
            AccessTokens::from_comma_separated("just-a-token, tok:not-a-uuid:admin, ,tok2:33333333-3333-3333-3333-333333333333:queen");
        assert!(tokens.resolve("just-a-token").is_none());
        assert!(tokens.resolve("tok").is_none());
        assert!(tokens.resolve("tok2").is_none());
    }

    #[test]
    fn test_empty_config_resolves_nothing() {
        let tokens = AccessTokens::from_comma_separated("");
        assert!(tokens.resolve("anything").is_none());
    }
}
