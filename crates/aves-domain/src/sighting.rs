//! Sighting domain model

use crate::region::Region;
use serde::{Deserialize, Serialize};

/// A community sighting of a bird.
///
/// `id`, `created_at`, `likes` and `liked_by` are assigned by the sighting
/// log at creation time, never by the caller. `bird_id` is a soft foreign
/// key: it should reference an existing Bird but is never validated against
/// the live catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub id: i64,
    pub bird_id: i64,
    /// Date of the observation as entered in the form (YYYY-MM-DD).
    pub sighting_date: String,
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Base64 image data or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub likes: u32,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// Declared for one-like-per-user bookkeeping but never written after
    /// creation; the like counter increments unconditionally.
    #[serde(default)]
    pub liked_by: Vec<String>,
}

/// Caller input for recording a sighting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewSighting {
    pub bird_id: i64,
    pub sighting_date: String,
    pub region: Region,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}
