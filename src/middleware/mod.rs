//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`gate`** - The authentication gate: runs a named strategy against
//!   the incoming request and either forwards it with the resolved identity
//!   attached or answers 401 with a translated message.

pub mod gate;

pub use gate::{authentication_gate, jwt_gate, translate_reason, AuthUser};
