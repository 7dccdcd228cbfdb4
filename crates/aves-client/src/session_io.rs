//! Session persistence
//!
//! The credential survives an app restart: `token`, `username`, `userRole`
//! and `isAuthenticated` live under fixed keys in the local key-value
//! store, written at login and cleared at logout. Navigation guards read
//! the same keys.

use aves_domain::{Role, Session};
use aves_store::{KeyValue, StoreError};

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "userRole";
pub const AUTHENTICATED_KEY: &str = "isAuthenticated";

/// Write the session fields under the fixed keys.
pub fn save_session(store: &mut impl KeyValue, session: &Session) -> Result<(), StoreError> {
    match &session.token {
        Some(token) => store.set(TOKEN_KEY, token)?,
        None => store.remove(TOKEN_KEY)?,
    }
    match &session.username {
        Some(username) => store.set(USERNAME_KEY, username)?,
        None => store.remove(USERNAME_KEY)?,
    }
    match session.role {
        Some(role) => store.set(ROLE_KEY, role.as_str())?,
        None => store.remove(ROLE_KEY)?,
    }
    if session.authenticated {
        store.set(AUTHENTICATED_KEY, "true")?;
    } else {
        store.remove(AUTHENTICATED_KEY)?;
    }
    Ok(())
}

/// Rebuild the session from storage. A fresh device, with none of the keys
/// written yet, yields an anonymous session.
pub fn load_session(store: &impl KeyValue) -> Result<Session, StoreError> {
    let token = store.get(TOKEN_KEY)?;
    let username = store.get(USERNAME_KEY)?;
    let role = store.get(ROLE_KEY)?.and_then(|tag| Role::from_tag(&tag));
    let authenticated = store.get(AUTHENTICATED_KEY)?.as_deref() == Some("true");

    Ok(Session {
        token,
        username,
        role,
        authenticated,
    })
}

/// Remove every session key; the logout counterpart of [`save_session`].
pub fn clear_session(store: &mut impl KeyValue) -> Result<(), StoreError> {
    store.remove(TOKEN_KEY)?;
    store.remove(USERNAME_KEY)?;
    store.remove(ROLE_KEY)?;
    store.remove(AUTHENTICATED_KEY)?;
    Ok(())
}
