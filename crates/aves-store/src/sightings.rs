//! The community sighting log
//!
//! Append-oriented, newest first, persisted in full after every mutation
//! under a fixed key. Sightings are never updated or deleted; the only
//! post-creation mutation is the like counter, which increments
//! unconditionally (`liked_by` is carried but not consulted).

use aves_domain::{NewSighting, Sighting};
use chrono::Utc;

use crate::kv::KeyValue;

/// Fixed key the serialized log lives under.
pub const SIGHTINGS_KEY: &str = "sightings";

/// The sighting log, sole mutator of the sighting collection.
pub struct SightingLog<S: KeyValue> {
    storage: S,
    sightings: Vec<Sighting>,
}

impl<S: KeyValue> SightingLog<S> {
    /// Hydrate the log from storage. An absent or unparseable value yields
    /// an empty log, never an error.
    pub fn open(storage: S) -> Self {
        let sightings = match storage.get(SIGHTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(sightings) => sightings,
                Err(e) => {
                    tracing::warn!("Discarding unparseable sighting log: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read sighting log: {}", e);
                Vec::new()
            }
        };
        Self { storage, sightings }
    }

    /// All sightings, newest first.
    pub fn sightings(&self) -> &[Sighting] {
        &self.sightings
    }

    /// Record a new sighting and prepend it so it renders first.
    ///
    /// The id is derived from the current timestamp in milliseconds, bumped
    /// past the head entry's id so two adds within the same millisecond stay
    /// distinct. `bird_id` is taken as given; it is not checked against the
    /// catalog.
    pub fn add_sighting(&mut self, new: NewSighting) -> &Sighting {
        let mut id = Utc::now().timestamp_millis();
        if let Some(head) = self.sightings.first() {
            if id <= head.id {
                id = head.id + 1;
            }
        }

        let sighting = Sighting {
            id,
            bird_id: new.bird_id,
            sighting_date: new.sighting_date,
            region: new.region,
            location_name: new.location_name,
            comments: new.comments,
            photo: new.photo,
            likes: 0,
            created_at: Utc::now().to_rfc3339(),
            liked_by: Vec::new(),
        };

        self.sightings.insert(0, sighting);
        self.persist();
        &self.sightings[0]
    }

    /// Increment the like counter of the matching sighting by exactly 1.
    ///
    /// No caller-identity check: the same user liking twice counts twice.
    /// An unknown id leaves the log untouched.
    pub fn toggle_like(&mut self, sighting_id: i64) {
        if let Some(sighting) = self.sightings.iter_mut().find(|s| s.id == sighting_id) {
            sighting.likes += 1;
            self.persist();
        }
    }

    /// Sightings for one bird, stored order preserved. Pure read.
    pub fn sightings_for_bird(&self, bird_id: i64) -> Vec<&Sighting> {
        self.sightings
            .iter()
            .filter(|s| s.bird_id == bird_id)
            .collect()
    }

    /// Route-parameter variant: the bird id arrives as a string and is
    /// coerced to numeric form before matching. Non-numeric input matches
    /// nothing.
    pub fn sightings_for_bird_param(&self, raw: &str) -> Vec<&Sighting> {
        match raw.trim().parse::<i64>() {
            Ok(bird_id) => self.sightings_for_bird(bird_id),
            Err(_) => Vec::new(),
        }
    }

    /// Re-serialize the full sequence to the fixed key. A write failure is
    /// logged and does not poison in-memory state.
    fn persist(&mut self) {
        match serde_json::to_string(&self.sightings) {
            Ok(json) => {
                if let Err(e) = self.storage.set(SIGHTINGS_KEY, &json) {
                    tracing::warn!("Could not persist sighting log: {}", e);
                }
            }
            Err(e) => tracing::warn!("Could not serialize sighting log: {}", e),
        }
    }
}
