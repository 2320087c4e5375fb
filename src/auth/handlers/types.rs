/**
 * Session Handler Types
 *
 * Request and response bodies for the session endpoints. Responses carry
 * the sanitized user record only; the password hash never leaves the
 * store.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::PublicUser;

/// Registration request
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Plaintext password; hashed before storage
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password; verified against the stored hash
    pub password: String,
}

/// Response for register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Always "success"
    pub status: String,
    /// Bearer token (30-minute expiry)
    pub token: String,
    /// Sanitized user record
    pub user: PublicUser,
}

impl AuthResponse {
    /// Build a success response
    pub fn new(token: String, user: PublicUser) -> Self {
        Self {
            status: "success".to_string(),
            token,
            user,
        }
    }
}

/// Response for the current-session endpoint
#[derive(Debug, Serialize)]
pub struct CurrentResponse {
    /// Always "success"
    pub status: String,
    /// The identity the gate resolved for this request
    pub user: PublicUser,
}
