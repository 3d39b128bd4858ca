//! Identity service-specific error types.

/// Errors that can occur while talking to the identity service.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Configured default header could not be used
    #[error("Invalid request header '{name}': {message}")]
    InvalidHeader { name: String, message: String },
}
