//! Shared error type across Release Radar crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or malformed input.
    Validation,
    /// Resource already exists.
    Conflict,
    /// Resource does not exist.
    NotFound,
    /// Request body over the configured limit.
    PayloadTooLarge,
    /// Configuration rejected at startup.
    InvalidConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Validation => "VALIDATION_ERROR",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RadarError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RadarError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RadarError::Validation(_) => ClientCode::Validation,
            RadarError::Conflict(_) => ClientCode::Conflict,
            RadarError::NotFound(_) => ClientCode::NotFound,
            RadarError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            RadarError::Config(_) => ClientCode::InvalidConfig,
            RadarError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            RadarError::Internal(_) => ClientCode::Internal,
        }
    }
}
