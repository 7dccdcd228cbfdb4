//! Error taxonomy for remote operations

use thiserror::Error;

/// Fixed user-facing message for 401/403 responses, shown regardless of
/// what the server put in the body.
pub const PERMISSION_DENIED_MESSAGE: &str = "No tienes permiso para realizar esta acción";

/// Errors surfaced by the gateway and the stores built on it.
///
/// Mutation errors are never swallowed: callers receive one of these with a
/// displayable message. No variant triggers a retry.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered 401 or 403 to a mutation.
    #[error("No tienes permiso para realizar esta acción")]
    PermissionDenied,

    /// Any other non-2xx answer. The message carries the response body text.
    #[error("La operación falló ({status}): {body}")]
    RequestFailed { status: u16, body: String },

    /// Transport-level failure (unreachable host, marshalling error).
    #[error("Error de red: {0}")]
    Network(String),

    /// The configured base URL or a derived endpoint is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
