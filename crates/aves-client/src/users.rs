//! User service client
//!
//! Account flows: registration with a username availability check, login
//! that installs the credential into the shared session, password change,
//! and the admin user list with deletion.

use crate::error::ApiError;
use crate::gateway::Gateway;
use crate::http::Transport;
use crate::wire::{LoginRequest, LoginResponse, PasswordChange, RegisterRequest, UserRecord};

pub struct UserClient<T: Transport> {
    gateway: Gateway<T>,
}

impl<T: Transport> UserClient<T> {
    pub fn new(gateway: Gateway<T>) -> Self {
        Self { gateway }
    }

    /// Authenticate and install the returned credential into the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.gateway.post_json("/api/auth/login", &body).await?;
        if let Ok(mut session) = self.gateway.session().write() {
            session.login(
                response.token.clone(),
                response.username.clone(),
                response.role,
            );
        }
        Ok(response)
    }

    /// Create an account. Registration and the follow-up login are two
    /// separate calls; composing them stays with the caller.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.gateway.post_json_unit("/api/users/register", &body).await
    }

    /// Availability check used while the registration form is being typed.
    pub async fn username_exists(&self, username: &str) -> Result<bool, ApiError> {
        self.gateway
            .get_json(&format!("/api/users/exists/{username}"))
            .await
    }

    /// The authenticated user's own record.
    pub async fn me(&self) -> Result<UserRecord, ApiError> {
        self.gateway.get_json("/api/users/me").await
    }

    /// All users. The service only answers this for administrators.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.gateway.get_json("/api/users").await
    }

    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let body = PasswordChange {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.gateway
            .put_json_unit(&format!("/api/users/{user_id}/password"), &body)
            .await
    }

    /// Remove another user's account (admin flow). Local session untouched.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("/api/users/{user_id}")).await
    }

    /// Remove the authenticated user's own account and clear the session.
    pub async fn delete_account(&self, user_id: i64) -> Result<(), ApiError> {
        self.delete_user(user_id).await?;
        if let Ok(mut session) = self.gateway.session().write() {
            session.logout();
        }
        Ok(())
    }
}
