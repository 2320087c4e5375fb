//! Authentication Module
//!
//! This module handles user credentials, token issuance, and the pluggable
//! authentication strategies consumed by the gate middleware.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - bcrypt password hashing and verification
//! - **`tokens`** - JWT issuance and decoding (30-minute expiry)
//! - **`users`** - User record and the in-memory credential store
//! - **`strategy`** - Tri-state authentication outcome, strategy trait,
//!   registry, and the JWT bearer strategy
//! - **`handlers`** - HTTP handlers for the session endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → hash stored → JWT returned
//! 2. **Login**: credentials verified against the stored hash → JWT returned
//! 3. **Protected requests**: the gate middleware runs a named strategy,
//!    which validates the bearer token and resolves the identity embedded
//!    in its claims
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage; the plaintext is
//!   never persisted
//! - Tokens are signed with a process-wide secret loaded once at startup
//! - Tokens expire 30 minutes after issuance
//! - Rejected credentials answer 401 without distinguishing unknown email
//!   from wrong password

/// bcrypt password hashing and verification
pub mod password;

/// JWT token issuance and decoding
pub mod tokens;

/// User record and in-memory store
pub mod users;

/// Authentication strategies and outcome type
pub mod strategy;

/// HTTP handlers for session endpoints
pub mod handlers;

pub use strategy::{AuthOutcome, AuthStrategy, JwtStrategy, StrategyRegistry};
pub use users::{PublicUser, User, UserStore};
