//! aves-store: device-local persistence for the Aves de Chile apps
//!
//! Sightings are single-device state: there is no remote authority and no
//! cross-device convergence. The log is kept in memory newest-first and
//! re-serialized in full to a local key-value store on every mutation.

pub mod kv;
pub mod sightings;

pub use kv::*;
pub use sightings::*;
