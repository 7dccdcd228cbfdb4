//! Bird domain model

use serde::{Deserialize, Serialize};

/// A bird species in the catalog.
///
/// `id` is assigned by the bird service; clients never invent one. The
/// catalog store is the sole mutator of the bird collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    /// URL of the species image.
    pub image: String,
}

/// Payload for creating or replacing a bird. Carries no id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBird {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image: String,
}

impl Bird {
    /// Rebuild a bird from a creation payload plus its server-assigned id.
    pub fn from_new(id: i64, new: NewBird) -> Self {
        Self {
            id,
            name: new.name,
            scientific_name: new.scientific_name,
            description: new.description,
            image: new.image,
        }
    }
}
