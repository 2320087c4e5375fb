/**
 * Authentication Strategies
 *
 * This module provides the pluggable authentication framework consumed by
 * the gate middleware. Strategies are registered by name at startup and
 * looked up per request.
 *
 * # Outcome
 *
 * Every authentication attempt resolves to exactly one of three outcomes:
 *
 * - `Error` - infrastructure failure; propagated to the error channel,
 *   never answered as a 401
 * - `Rejected` - credentials refused; carries the internal reason string
 *   that the gate translates into a user-facing message
 * - `Accepted` - success; carries the resolved identity
 *
 * # Extensibility
 *
 * To add a new authentication method:
 *
 * 1. Implement the `AuthStrategy` trait
 * 2. Register it under a name in `StrategyRegistry` during startup
 * 3. Protect routes with the gate using that name
 */

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::errors::ErrorKind;

use crate::auth::tokens::decode_token;
use crate::auth::users::PublicUser;
use crate::error::AppError;

/// Rejection reason for a missing bearer token
pub const REASON_NO_TOKEN: &str = "No auth token";
/// Rejection reason for an expired token
pub const REASON_EXPIRED: &str = "jwt expired";
/// Rejection reason for a malformed or tampered token
pub const REASON_INVALID: &str = "invalid token";

/// Tri-state result of an authentication attempt
#[derive(Debug)]
pub enum AuthOutcome {
    /// Infrastructure failure; the gate propagates it unchanged
    Error(AppError),
    /// Credentials refused, with the internal reason string
    Rejected {
        /// Internal reason, translated by the gate before it reaches the client
        reason: String,
    },
    /// Authentication succeeded
    Accepted(PublicUser),
}

impl AuthOutcome {
    /// Build a rejection with the given reason
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Trait for implementing authentication strategies
///
/// Strategies are stateless with respect to the request: each call to
/// `authenticate` inspects the headers it is given and returns an outcome.
/// Validation here has no await point, so the trait is synchronous; the
/// gate that invokes it is async.
pub trait AuthStrategy: Send + Sync {
    /// Name this strategy is registered under
    fn name(&self) -> &'static str;

    /// Authenticate a request from its headers
    fn authenticate(&self, headers: &HeaderMap) -> AuthOutcome;
}

/// Registry of named authentication strategies
///
/// Built once at startup and shared immutably; lookups clone the inner
/// `Arc`, never the strategy.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: HashMap<&'static str, Arc<dyn AuthStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under its own name
    ///
    /// Registering a second strategy with the same name replaces the first.
    pub fn register(&mut self, strategy: Arc<dyn AuthStrategy>) {
        tracing::info!("Registered authentication strategy '{}'", strategy.name());
        self.strategies.insert(strategy.name(), strategy);
    }

    /// Look up a strategy by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn AuthStrategy>> {
        self.strategies.get(name).cloned()
    }
}

/// JWT bearer token strategy
///
/// Reads `Authorization: Bearer <token>`, validates the signature and
/// expiry, and resolves the identity embedded in the token's `user` claim.
/// The store is not consulted: the signed claim is the source of truth for
/// the token's lifetime.
pub struct JwtStrategy {
    secret: String,
}

impl JwtStrategy {
    /// Registered name of this strategy
    pub const NAME: &'static str = "jwt";

    /// Create the strategy with the process-wide signing secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Extract the bearer token from the Authorization header, if any
    fn bearer_token<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?.trim();
        if token.is_empty() {
            return None;
        }
        Some(token)
    }
}

impl AuthStrategy for JwtStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn authenticate(&self, headers: &HeaderMap) -> AuthOutcome {
        let Some(token) = self.bearer_token(headers) else {
            tracing::debug!("Bearer auth: no token in Authorization header");
            return AuthOutcome::rejected(REASON_NO_TOKEN);
        };

        match decode_token(token, &self.secret) {
            Ok(claims) => {
                tracing::debug!("Bearer auth: accepted user {}", claims.user.id);
                AuthOutcome::Accepted(claims.user)
            }
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                tracing::debug!("Bearer auth: token expired");
                AuthOutcome::rejected(REASON_EXPIRED)
            }
            Err(e) => {
                tracing::debug!("Bearer auth: invalid token: {:?}", e);
                AuthOutcome::rejected(REASON_INVALID)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::tokens::{issue_token, Claims};
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    const SECRET: &str = "strategy-test-secret";

    fn sample_user() -> PublicUser {
        PublicUser {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: "user".to_string(),
        }
    }

    fn headers_with_bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_missing_header_is_no_token() {
        let strategy = JwtStrategy::new(SECRET);
        let outcome = strategy.authenticate(&HeaderMap::new());
        assert!(matches!(
            outcome,
            AuthOutcome::Rejected { reason } if reason == REASON_NO_TOKEN
        ));
    }

    #[test]
    fn test_non_bearer_header_is_no_token() {
        let strategy = JwtStrategy::new(SECRET);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        let outcome = strategy.authenticate(&headers);
        assert!(matches!(
            outcome,
            AuthOutcome::Rejected { reason } if reason == REASON_NO_TOKEN
        ));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let strategy = JwtStrategy::new(SECRET);
        let outcome = strategy.authenticate(&headers_with_bearer("garbage.token.here"));
        assert!(matches!(
            outcome,
            AuthOutcome::Rejected { reason } if reason == REASON_INVALID
        ));
    }

    #[test]
    fn test_expired_token_is_expired() {
        let iat = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            - 7200;
        let claims = Claims {
            user: sample_user(),
            iat,
            exp: iat + 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let strategy = JwtStrategy::new(SECRET);
        let outcome = strategy.authenticate(&headers_with_bearer(&token));
        assert!(matches!(
            outcome,
            AuthOutcome::Rejected { reason } if reason == REASON_EXPIRED
        ));
    }

    #[test]
    fn test_valid_token_is_accepted() {
        let user = sample_user();
        let token = issue_token(&user, SECRET).unwrap();

        let strategy = JwtStrategy::new(SECRET);
        let outcome = strategy.authenticate(&headers_with_bearer(&token));
        match outcome {
            AuthOutcome::Accepted(resolved) => assert_eq!(resolved, user),
            other => panic!("Expected Accepted, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = StrategyRegistry::new();
        registry.register(Arc::new(JwtStrategy::new(SECRET)));

        assert!(registry.get(JwtStrategy::NAME).is_some());
        assert!(registry.get("github").is_none());
    }
}
