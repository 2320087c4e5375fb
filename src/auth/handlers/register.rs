/**
 * Registration Handler
 *
 * Implements `POST /api/sessions/register`.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Hash the password with bcrypt
 * 3. Insert the user (duplicate email answers 409)
 * 4. Issue a token and return it with the sanitized user
 *
 * # Validation
 *
 * - Email must contain '@' (basic check)
 * - Password must be at least 8 characters
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::auth::password::hash_password;
use crate::auth::tokens::issue_token;
use crate::auth::users::User;
use crate::error::AppError;
use crate::server::state::AppState;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid email or short password
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or token issuance failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    tracing::info!("Register request for: {}", request.email);

    if !request.email.contains('@') {
        return Err(AppError::handler(
            StatusCode::BAD_REQUEST,
            "Invalid email format",
        ));
    }

    if request.password.len() < 8 {
        return Err(AppError::handler(
            StatusCode::BAD_REQUEST,
            "Password must be at least 8 characters",
        ));
    }

    let password_hash = hash_password(&request.password)?;

    let user = User::new(request.name, request.email, password_hash);
    let user = state.users.insert(user).await.map_err(|e| {
        tracing::warn!("Registration rejected: {}", e);
        AppError::handler(StatusCode::CONFLICT, "Email already registered")
    })?;

    let public = user.public();
    let token = issue_token(&public, &state.config.jwt_secret)?;

    tracing::info!("User registered: {} ({})", public.name, public.email);

    Ok(Json(AuthResponse::new(token, public)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::Config;

    fn request(email: &str, password: &str) -> Json<RegisterRequest> {
        Json(RegisterRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn test_register_success() {
        let state = AppState::for_tests(Config::for_tests());

        let Json(response) = register(State(state.clone()), request("ana@example.com", "contrasena123"))
            .await
            .unwrap();

        assert_eq!(response.status, "success");
        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "ana@example.com");
        assert_eq!(state.users.len().await, 1);
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let state = AppState::for_tests(Config::for_tests());

        let error = register(State(state), request("not-an-email", "contrasena123"))
            .await
            .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let state = AppState::for_tests(Config::for_tests());

        let error = register(State(state), request("ana@example.com", "corta"))
            .await
            .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = AppState::for_tests(Config::for_tests());

        register(State(state.clone()), request("ana@example.com", "contrasena123"))
            .await
            .unwrap();
        let error = register(State(state), request("ana@example.com", "otraclave123"))
            .await
            .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }
}
