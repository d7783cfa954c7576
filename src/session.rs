//! Explicit session context.
//!
//! Authentication state is carried as a plain value rather than a
//! process-wide singleton. `login`, `logout`, and `check_auth` are pure
//! transitions: they take a session and return the next one, so callers
//! decide where the state lives.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{User, UserRole};

/// Authentication state for one caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// An unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns the session after a successful login.
    pub fn login(self, user: User) -> Session {
        Session { user: Some(user) }
    }

    /// Returns the session with any authentication cleared.
    pub fn logout(self) -> Session {
        Session { user: None }
    }

    /// Whether the session carries an authenticated user.
    pub fn check_auth(&self) -> bool {
        self.user.is_some()
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the authenticated user, or `NotAuthenticated`.
    pub fn require_auth(&self) -> EngineResult<&User> {
        self.user.as_ref().ok_or(EngineError::NotAuthenticated)
    }

    /// Returns the authenticated user when they hold the required role.
    ///
    /// Admins pass every role check.
    pub fn require_role(&self, role: UserRole) -> EngineResult<&User> {
        let user = self.require_auth()?;
        if user.role == role || user.role == UserRole::Admin {
            Ok(user)
        } else {
            Err(EngineError::Forbidden {
                required: role.as_str().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_agent() -> User {
        User {
            id: "user_001".to_string(),
            name: "John Sales".to_string(),
            email: "john@aspcranes.com".to_string(),
            role: UserRole::SalesAgent,
        }
    }

    #[test]
    fn test_anonymous_session_is_unauthenticated() {
        let session = Session::anonymous();
        assert!(!session.check_auth());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_login_then_logout_round_trip() {
        let session = Session::anonymous().login(sales_agent());
        assert!(session.check_auth());
        assert_eq!(session.user().unwrap().id, "user_001");

        let session = session.logout();
        assert!(!session.check_auth());
    }

    #[test]
    fn test_require_auth_on_anonymous_session_fails() {
        let session = Session::anonymous();
        let result = session.require_auth();
        assert!(matches!(result, Err(EngineError::NotAuthenticated)));
    }

    #[test]
    fn test_require_role_matches_own_role() {
        let session = Session::anonymous().login(sales_agent());
        assert!(session.require_role(UserRole::SalesAgent).is_ok());
    }

    #[test]
    fn test_require_role_rejects_other_role() {
        let session = Session::anonymous().login(sales_agent());
        let result = session.require_role(UserRole::OperationsManager);
        match result.unwrap_err() {
            EngineError::Forbidden { required } => {
                assert_eq!(required, "operations_manager");
            }
            other => panic!("Expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn test_admin_passes_every_role_check() {
        let admin = User {
            role: UserRole::Admin,
            ..sales_agent()
        };
        let session = Session::anonymous().login(admin);
        assert!(session.require_role(UserRole::SalesAgent).is_ok());
        assert!(session.require_role(UserRole::OperationsManager).is_ok());
        assert!(session.require_role(UserRole::Operator).is_ok());
    }

    #[test]
    fn test_transitions_are_values_not_shared_state() {
        let anonymous = Session::anonymous();
        let logged_in = anonymous.clone().login(sales_agent());
        // The original session is untouched by the transition.
        assert!(!anonymous.check_auth());
        assert!(logged_in.check_auth());
    }
}
