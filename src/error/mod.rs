//! Error Module
//!
//! This module defines the crate-wide error type used by handlers and
//! services, plus its conversion into HTTP responses.
//!
//! # Organization
//!
//! - **`types`** - The `AppError` enum and status-code mapping
//! - **`conversion`** - `IntoResponse` implementation (JSON error body)

/// Error type definitions
pub mod types;

/// Conversion of errors into HTTP responses
pub mod conversion;

pub use types::AppError;
