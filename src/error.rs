//! Error types for the dashboard.
//!
//! [`ApiError`] covers everything that can go wrong between issuing a backend
//! request and holding a typed result. The controller never surfaces these
//! directly: each operation maps any failure to its fixed banner message and
//! logs the detail. [`ConfigError`] is raised at startup only.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single backend operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network, DNS or socket failure.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The body was not the JSON shape we expect.
    #[error("malformed response from {path}: {message}")]
    Decode { path: String, message: String },

    /// The request body could not be encoded.
    #[error("failed to encode request for {path}: {message}")]
    Encode { path: String, message: String },

    /// The backend's `success` flag was missing or falsy.
    #[error("backend rejected the request")]
    Rejected,

    /// `success: true` without the created record.
    #[error("{path} reported success without a record")]
    MissingRecord { path: String },

    /// The request task ended without producing an outcome.
    #[error("request task ended before settling")]
    Interrupted,
}

impl ApiError {
    /// Whether the backend was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Startup configuration problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}
