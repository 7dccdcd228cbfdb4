//! Wire representations of the remote services
//!
//! The bird service names its key `birdId` and lowercases `scientificname`;
//! the client-facing field is `id`. The translation is declared here, at the
//! gateway boundary, instead of inline renames at each call site.

use aves_domain::{Bird, NewBird, Role};
use serde::{Deserialize, Serialize};

/// A bird as the service returns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BirdRecord {
    #[serde(rename = "birdId")]
    pub bird_id: i64,
    pub name: String,
    #[serde(rename = "scientificname")]
    pub scientific_name: String,
    pub description: String,
    pub image: String,
}

impl BirdRecord {
    /// Remap the server-assigned key into the client `id` field.
    pub fn into_bird(self) -> Bird {
        Bird {
            id: self.bird_id,
            name: self.name,
            scientific_name: self.scientific_name,
            description: self.description,
            image: self.image,
        }
    }
}

/// Body of a bird create/replace request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BirdPayload {
    pub name: String,
    #[serde(rename = "scientificname")]
    pub scientific_name: String,
    pub description: String,
    pub image: String,
}

impl From<NewBird> for BirdPayload {
    fn from(new: NewBird) -> Self {
        Self {
            name: new.name,
            scientific_name: new.scientific_name,
            description: new.description,
            image: new.image,
        }
    }
}

/// A user as the user service returns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
    #[serde(rename = "userRole")]
    pub role: Role,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordChange {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}
