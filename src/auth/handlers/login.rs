/**
 * Login Handler
 *
 * Implements `POST /api/sessions/login`.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a token and return it with the sanitized user
 *
 * # Security
 *
 * Unknown email and wrong password answer the same 401, so the endpoint
 * cannot be used to enumerate accounts. Passwords are never logged.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::password::verify_password;
use crate::auth::tokens::issue_token;
use crate::error::AppError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - malformed stored hash or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    tracing::info!("Login request for: {}", request.email);

    let user = state
        .users
        .find_by_email(&request.email)
        .await
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            AppError::handler(StatusCode::UNAUTHORIZED, "Invalid credentials")
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(AppError::handler(
            StatusCode::UNAUTHORIZED,
            "Invalid credentials",
        ));
    }

    let public = user.public();
    let token = issue_token(&public, &state.config.jwt_secret)?;

    tracing::info!("User logged in: {} ({})", public.name, public.email);

    Ok(Json(AuthResponse::new(token, public)))
}
