//! Error types for font-policy resolution.
//!
//! Both variants are recovered internally with documented defaults; they
//! exist so diagnostics can name what went wrong, not to surface failures
//! to callers.

/// Result type alias for font-policy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a font policy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token that looked like a point size failed to parse.
    #[error("malformed size token '{token}': {message}")]
    MalformedSizeToken { token: String, message: String },

    /// Platform detection was unavailable.
    #[error("platform detection unavailable: {0}")]
    DetectionUnavailable(#[from] velour_platform::DetectError),
}

impl Error {
    /// Create a malformed-size-token error.
    pub fn malformed_size_token(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedSizeToken {
            token: token.into(),
            message: message.into(),
        }
    }
}
