/**
 * Current Session Handler
 *
 * Implements `GET /api/sessions/current`. The route sits behind the
 * authentication gate, so by the time this handler runs the resolved
 * identity is already in the request extensions; the handler only echoes
 * it back.
 */

use axum::response::Json;

use crate::auth::handlers::types::CurrentResponse;
use crate::middleware::gate::AuthUser;

/// Current-session handler
///
/// Returns the identity the gate attached for this request. Without the
/// gate in front, the `AuthUser` extractor rejects with 401.
pub async fn current(AuthUser(user): AuthUser) -> Json<CurrentResponse> {
    Json(CurrentResponse {
        status: "success".to_string(),
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::PublicUser;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_current_echoes_gate_identity() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: "user".to_string(),
        };

        let Json(response) = current(AuthUser(user.clone())).await;
        assert_eq!(response.status, "success");
        assert_eq!(response.user, user);
    }
}
