//! aves-client: HTTP access to the bird and user services
//!
//! The gateway attaches the session's bearer credential to every request
//! that has one and translates non-2xx statuses into the shared error
//! taxonomy. The bird catalog store mirrors the remote catalog with
//! confirmed-only updates: local state changes only after the server
//! acknowledges a mutation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod session_io;
pub mod users;
pub mod wire;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use gateway::*;
pub use http::*;
pub use users::*;
pub use wire::*;

#[cfg(test)]
pub(crate) mod testing;
