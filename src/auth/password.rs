/**
 * Password Hashing
 *
 * This module wraps bcrypt for password storage and verification. The hash
 * embeds a random salt, so hashing the same password twice yields different
 * strings while both verify successfully.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a password for storage
///
/// # Arguments
///
/// * `password` - Plaintext password
///
/// # Returns
///
/// A bcrypt hash string containing the cost factor and salt
///
/// # Errors
///
/// Hashing only fails inside the library (e.g., an out-of-range cost);
/// for well-formed input it always succeeds.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a candidate password against a stored hash
///
/// Returns `Ok(false)` on a mismatch. `Err` is reserved for malformed
/// stored hashes, which indicate corrupted data rather than a failed
/// login attempt.
pub fn verify_password(candidate: &str, stored_hash: &str) -> Result<bool, BcryptError> {
    verify(candidate, stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hashed = hash_password("contrasena123").unwrap();
        assert!(verify_password("contrasena123", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hashed = hash_password("contrasena123").unwrap();
        assert!(!verify_password("otra-clave", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Each hash embeds a fresh random salt
        let first = hash_password("contrasena123").unwrap();
        let second = hash_password("contrasena123").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("contrasena123", &first).unwrap());
        assert!(verify_password("contrasena123", &second).unwrap());
    }

    #[test]
    fn test_hash_never_stores_plaintext() {
        let hashed = hash_password("contrasena123").unwrap();
        assert!(!hashed.contains("contrasena123"));
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        let result = verify_password("contrasena123", "not-a-bcrypt-hash");
        assert!(result.is_err());
    }
}
