/**
 * Backend Error Types
 *
 * This module defines the error types used across the backend. Errors can be
 * converted to HTTP responses via the `IntoResponse` implementation in the
 * `conversion` module.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur while processing an HTTP request and carry the status
 * code the handler wants to answer with (validation failures, duplicate
 * registrations, rejected credentials).
 *
 * ## Configuration Errors
 *
 * Configuration errors occur at startup when required settings are missing
 * or malformed. A missing signing secret is fatal; the server refuses to
 * start rather than issue unverifiable tokens.
 *
 * ## State Errors
 *
 * State errors indicate internal wiring problems, such as a request routed
 * through an authentication strategy that was never registered.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error type
///
/// Each variant carries enough context to produce both a log line and an
/// HTTP response.
#[derive(Debug, Error)]
pub enum AppError {
    /// Handler error (e.g., invalid request body, rejected credentials)
    #[error("Handler error: {message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Startup configuration error (e.g., missing JWT secret)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable error message
        message: String,
    },

    /// Internal state error (e.g., unregistered authentication strategy)
    #[error("State error: {message}")]
    State {
        /// Human-readable error message
        message: String,
    },

    /// Token signing or validation error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing error (malformed stored hash, cost out of range)
    #[error("Hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Filesystem error (upload storage)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Handler` - the status code carried by the error
    /// - everything else - 500 Internal Server Error (infrastructure faults
    ///   are never surfaced as client errors)
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Handler { status, .. } => *status,
            Self::Config { .. }
            | Self::State { .. }
            | Self::Token(_)
            | Self::Hash(_)
            | Self::Io(_)
            | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message
    ///
    /// Infrastructure variants answer with a generic message so internal
    /// details (key material, file paths) never reach the client.
    pub fn message(&self) -> String {
        match self {
            Self::Handler { message, .. } => message.clone(),
            Self::Config { .. }
            | Self::State { .. }
            | Self::Token(_)
            | Self::Hash(_)
            | Self::Io(_)
            | Self::Serialization(_) => "Internal server error".to_string(),
        }
    }
}
