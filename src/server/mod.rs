//! Server Module
//!
//! This module contains server setup: configuration loading, application
//! state, and router construction.
//!
//! - **`config`** - Environment-sourced configuration struct
//! - **`state`** - `AppState` and Axum `FromRef` implementations
//! - **`init`** - Application assembly (store, strategies, mailer, router)

/// Environment-sourced configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;
