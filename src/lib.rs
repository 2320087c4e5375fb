//! Comercio - E-commerce Backend
//!
//! Backend server for an e-commerce store: session authentication with
//! bearer tokens, image uploads, transactional email, and mock-data
//! generation for seeding.
//!
//! # Overview
//!
//! The crate provides:
//! - bcrypt password hashing and JWT session tokens (30-minute expiry)
//! - A pluggable authentication gate: named strategies resolve each
//!   request to an error, a translated 401 rejection, or an accepted
//!   identity attached to the request
//! - Disk-backed image uploads with timestamped filenames
//! - A purchase-summary email over SMTP
//! - Synthetic product generation
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, and assembly
//! - **`auth`** - Credentials, tokens, strategies, session handlers
//! - **`middleware`** - The authentication gate
//! - **`routes`** - Router wiring
//! - **`email`** - SMTP mailer
//! - **`uploads`** - Upload storage and handler
//! - **`mocking`** - Mock product generation
//! - **`error`** - Crate error type and HTTP conversion

/// Authentication: credentials, tokens, strategies, handlers
pub mod auth;

/// SMTP mailer
pub mod email;

/// Crate error type
pub mod error;

/// HTTP middleware
pub mod middleware;

/// Mock product generation
pub mod mocking;

/// Router wiring
pub mod routes;

/// Server configuration, state, and assembly
pub mod server;

/// Upload storage
pub mod uploads;
