/**
 * Token Issuance and Decoding
 *
 * This module handles JWT bearer tokens. Tokens embed the sanitized user
 * record under a `user` claim and expire 30 minutes after issuance.
 *
 * # Claim Shape
 *
 * ```json
 * {
 *   "user": { "id": "...", "name": "...", "email": "...", "role": "..." },
 *   "iat": 1700000000,
 *   "exp": 1700001800
 * }
 * ```
 *
 * The signing secret is process-wide configuration, loaded once at startup
 * and passed in explicitly; this module never reads the environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::users::PublicUser;

/// Token lifetime: 30 minutes
pub const TOKEN_TTL_SECS: u64 = 30 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user record
    pub user: PublicUser,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Issue a signed token for a user
///
/// # Arguments
///
/// * `user` - Sanitized user record to embed in the claim
/// * `secret` - Process-wide signing secret
///
/// # Errors
///
/// Fails only if the signing key is unusable, which is a startup-time
/// misconfiguration.
pub fn issue_token(
    user: &PublicUser,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = unix_now();
    let claims = Claims {
        user: user.clone(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// Uses the default validation, which checks the signature and the `exp`
/// claim. Callers inspect the error kind to distinguish an expired token
/// from a malformed one.
pub fn decode_token(
    token: &str,
    secret: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
