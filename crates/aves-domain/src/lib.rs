//! Domain types shared between the Aves de Chile client crates
//!
//! This crate provides the canonical domain models for the bird-watching
//! catalog and community sightings:
//! - Bird: a species in the admin-curated catalog
//! - Sighting: a user-submitted observation of a bird
//! - Region: the 16 fixed Chilean regions a sighting can reference
//! - Session/Role: the authenticated user's credential and role tag
//! - Validation: input-time field checks for bird creation forms

pub mod bird;
pub mod region;
pub mod session;
pub mod sighting;
pub mod validation;

pub use bird::*;
pub use region::*;
pub use session::*;
pub use sighting::*;
pub use validation::*;
