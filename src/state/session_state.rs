// ============================================================================
// SESSION STATE - pure machine behind the session context
// ============================================================================
// INIT → REFRESHING → {AUTHENTICATED, ANONYMOUS}. No automatic transitions
// after resolution; token expiry surfaces through failing API calls.
// ============================================================================

use crate::models::auth::{RefreshResponse, User};
use crate::services::error::RequestError;

/// The bearer token and current user. An empty token means anonymous; token
/// and user are always set or cleared together.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    token: String,
    user: Option<User>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionPhase {
    Init,
    Refreshing,
    Authenticated,
    Anonymous,
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Self { token: String::new(), user: None }
    }

    /// The only way to enter the authenticated state: both halves at once.
    pub fn authenticated(token: String, user: User) -> Self {
        Self { token, user: Some(user) }
    }

    /// Outcome of the startup refresh call. Any failure degrades to the
    /// anonymous session; this is recoverable, not fatal.
    pub fn from_refresh(result: Result<RefreshResponse, RequestError>) -> Self {
        match result {
            Ok(response) => {
                log::info!("🔑 Session refreshed for {}", response.user.email);
                Self::authenticated(response.access_token, response.user)
            }
            Err(error) => {
                log::warn!("⚠️ Session refresh failed, continuing anonymous: {}", error);
                Self::anonymous()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty() && self.user.is_some()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Authorization header pair, present only when authenticated.
    pub fn bearer_header(&self) -> Option<(String, String)> {
        if self.token.is_empty() {
            None
        } else {
            Some(("Authorization".to_string(), format!("Bearer {}", self.token)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Role;

    fn jane() -> User {
        User { id: "u1".to_string(), email: "jane@example.com".to_string(), role: Role::User }
    }

    #[test]
    fn refresh_success_sets_token_and_user_together() {
        let session = Session::from_refresh(Ok(RefreshResponse {
            access_token: "tok".to_string(),
            user: jane(),
        }));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), "tok");
        assert_eq!(session.user().unwrap().email, "jane@example.com");
        assert_eq!(session.phase(), SessionPhase::Authenticated);
    }

    #[test]
    fn refresh_failure_degrades_to_anonymous() {
        let session = Session::from_refresh(Err(RequestError::Network("offline".to_string())));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), "");
        assert!(session.user().is_none());
        assert_eq!(session.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn bearer_header_exists_only_when_authenticated() {
        assert!(Session::anonymous().bearer_header().is_none());
        let session = Session::authenticated("tok".to_string(), jane());
        let (name, value) = session.bearer_header().unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer tok");
    }
}
