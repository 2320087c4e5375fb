/**
 * Authentication Gate
 *
 * This middleware protects routes by running a named, pre-registered
 * authentication strategy against the incoming request. It is a three-way
 * dispatch over the strategy outcome, executed once per request:
 *
 * - **Error**: an infrastructure failure; converted through the crate's
 *   error channel (500), never answered as a 401
 * - **Rejected**: credentials refused; the internal reason is translated
 *   through a fixed table and answered as
 *   `401 {"status":"error","message":[text]}`
 * - **Accepted**: the resolved identity is attached to the request
 *   extensions and the request continues; the gate writes no response
 *
 * # Reason Translation
 *
 * Known internal reasons map to fixed user-facing messages; anything else
 * passes through verbatim. The table is data, so new mappings are added
 * without touching the dispatch.
 */

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::auth::strategy::{AuthOutcome, JwtStrategy};
use crate::auth::users::PublicUser;
use crate::error::conversion::error_body;
use crate::error::AppError;
use crate::server::state::AppState;

/// Fixed mapping from internal rejection reasons to user-facing messages
const REASON_TRANSLATIONS: &[(&str, &str)] = &[
    ("jwt expired", "El token ha expirado"),
    ("No auth token", "No se ha enviado el token"),
    ("invalid token", "El token es inválido"),
];

/// Translate an internal rejection reason into its user-facing message
///
/// Unrecognized reasons pass through verbatim.
pub fn translate_reason(reason: &str) -> &str {
    REASON_TRANSLATIONS
        .iter()
        .find(|(internal, _)| *internal == reason)
        .map_or(reason, |(_, message)| *message)
}

/// Run the named strategy and dispatch on its outcome
///
/// # Arguments
///
/// * `state` - Application state holding the strategy registry
/// * `strategy_name` - Name the strategy was registered under
/// * `request` - Incoming request
/// * `next` - Remainder of the middleware chain
///
/// A strategy name with no registered strategy is a wiring bug and surfaces
/// through the error channel, not as a 401.
pub async fn authentication_gate(
    state: AppState,
    strategy_name: &str,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(strategy) = state.strategies.get(strategy_name) else {
        return AppError::state(format!(
            "Authentication strategy '{strategy_name}' is not registered"
        ))
        .into_response();
    };

    match strategy.authenticate(request.headers()) {
        AuthOutcome::Error(e) => e.into_response(),
        AuthOutcome::Rejected { reason } => {
            let message = translate_reason(&reason);
            tracing::warn!(
                "Authentication rejected by strategy '{}': {}",
                strategy_name,
                reason
            );
            (StatusCode::UNAUTHORIZED, Json(error_body(&[message]))).into_response()
        }
        AuthOutcome::Accepted(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
    }
}

/// Gate wired to the JWT bearer strategy
///
/// Suitable for `axum::middleware::from_fn_with_state`.
pub async fn jwt_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    authentication_gate(state, JwtStrategy::NAME, request, next).await
}

/// Axum extractor for the identity attached by the gate
///
/// Handlers behind the gate take `AuthUser(user)` as a parameter. A missing
/// extension means the route was not wired through the gate.
#[derive(Clone, Debug)]
pub struct AuthUser(pub PublicUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<PublicUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Authenticated user not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::strategy::{AuthStrategy, StrategyRegistry};
    use crate::server::config::Config;
    use crate::server::state::AppState;
    use axum::body::Body;
    use axum::http::HeaderMap;
    use axum::routing::get;
    use axum::Router;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    #[test]
    fn test_known_reasons_are_translated() {
        assert_eq!(translate_reason("jwt expired"), "El token ha expirado");
        assert_eq!(translate_reason("No auth token"), "No se ha enviado el token");
        assert_eq!(translate_reason("invalid token"), "El token es inválido");
    }

    #[test]
    fn test_unknown_reason_passes_through() {
        assert_eq!(translate_reason("foo"), "foo");
    }

    /// Strategy stub returning a fixed outcome, for exercising the dispatch
    struct FixedOutcome {
        name: &'static str,
        build: fn() -> AuthOutcome,
    }

    impl AuthStrategy for FixedOutcome {
        fn name(&self) -> &'static str {
            self.name
        }

        fn authenticate(&self, _headers: &HeaderMap) -> AuthOutcome {
            (self.build)()
        }
    }

    fn test_state(strategy: FixedOutcome) -> AppState {
        let mut registry = StrategyRegistry::new();
        let name = strategy.name;
        registry.register(Arc::new(strategy));
        let mut state = AppState::for_tests(Config::for_tests());
        state.strategies = Arc::new(registry);
        // sanity: the stub is reachable under its name
        assert!(state.strategies.get(name).is_some());
        state
    }

    fn gated_router(state: AppState, strategy_name: &'static str) -> Router {
        Router::new()
            .route(
                "/protected",
                get(|AuthUser(user): AuthUser| async move { Json(user) }),
            )
            .layer(axum::middleware::from_fn_with_state(
                state,
                move |State(s): State<AppState>, request: Request, next: Next| async move {
                    authentication_gate(s, strategy_name, request, next).await
                },
            ))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_rejected_outcome_answers_translated_401() {
        let state = test_state(FixedOutcome {
            name: "always-expired",
            build: || AuthOutcome::rejected("jwt expired"),
        });
        let app = gated_router(state, "always-expired");

        let response = app
            .oneshot(Request::builder().uri("/protected").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"][0], "El token ha expirado");
    }

    #[tokio::test]
    async fn test_unrecognized_reason_answers_verbatim_401() {
        let state = test_state(FixedOutcome {
            name: "always-foo",
            build: || AuthOutcome::rejected("foo"),
        });
        let app = gated_router(state, "always-foo");

        let response = app
            .oneshot(Request::builder().uri("/protected").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"][0], "foo");
    }

    #[tokio::test]
    async fn test_error_outcome_propagates_as_500() {
        let state = test_state(FixedOutcome {
            name: "always-broken",
            build: || AuthOutcome::Error(AppError::state("backing store unreachable")),
        });
        let app = gated_router(state, "always-broken");

        let response = app
            .oneshot(Request::builder().uri("/protected").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"][0], "Internal server error");
    }

    #[tokio::test]
    async fn test_accepted_outcome_attaches_user_and_continues() {
        let state = test_state(FixedOutcome {
            name: "always-ana",
            build: || {
                AuthOutcome::Accepted(PublicUser {
                    id: uuid::Uuid::nil(),
                    name: "Ana".to_string(),
                    email: "ana@example.com".to_string(),
                    role: "user".to_string(),
                })
            },
        });
        let app = gated_router(state, "always-ana");

        let response = app
            .oneshot(Request::builder().uri("/protected").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["email"], "ana@example.com");
    }

    #[tokio::test]
    async fn test_unregistered_strategy_is_a_wiring_error() {
        let state = test_state(FixedOutcome {
            name: "registered",
            build: || AuthOutcome::rejected("unused"),
        });
        let app = gated_router(state, "never-registered");

        let response = app
            .oneshot(Request::builder().uri("/protected").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
