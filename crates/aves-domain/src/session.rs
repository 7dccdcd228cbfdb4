//! Authenticated session state
//!
//! The session is an explicit object handed by reference into the stores,
//! with a defined login/logout lifecycle. Stores only read it; the login
//! and registration flows write it.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Role tag attached to a credential by the user service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "USER")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }

    /// Parse the role tag the user service hands out.
    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

/// Bearer credential and role for the current user, if any.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
    pub role: Option<Role>,
    pub authenticated: bool,
}

/// Shared handle the stores read the credential through.
pub type SessionHandle = Arc<RwLock<Session>>;

impl Session {
    /// Fresh anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Install a credential after a successful login or registration.
    pub fn login(&mut self, token: String, username: String, role: Role) {
        self.token = Some(token);
        self.username = Some(username);
        self.role = Some(role);
        self.authenticated = true;
    }

    /// Clear all credential state.
    pub fn logout(&mut self) {
        *self = Session::default();
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated && self.role == Some(Role::Admin)
    }

    /// Wrap in the shared handle the stores expect.
    pub fn into_handle(self) -> SessionHandle {
        Arc::new(RwLock::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_then_logout() {
        let mut session = Session::anonymous();
        assert!(!session.authenticated);

        session.login("tok-1".into(), "maria".into(), Role::Admin);
        assert!(session.authenticated);
        assert!(session.is_admin());
        assert_eq!(session.token.as_deref(), Some("tok-1"));

        session.logout();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn user_role_is_not_admin() {
        let mut session = Session::anonymous();
        session.login("tok-2".into(), "pedro".into(), Role::User);
        assert!(!session.is_admin());
    }

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
    }
}
