/**
 * API Route Configuration
 *
 * This module wires the API endpoints:
 *
 * ## Sessions
 * - `POST /api/sessions/register` - user registration
 * - `POST /api/sessions/login` - user login
 * - `GET /api/sessions/current` - current identity (behind the gate)
 *
 * ## Products
 * - `GET /api/mockingproducts` - 100 generated products
 *
 * ## Uploads
 * - `POST /api/uploads` - multipart image upload
 *
 * Only the `current` route is protected; the gate runs the JWT bearer
 * strategy in front of it.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::auth::handlers::{current, login, register};
use crate::middleware::gate::jwt_gate;
use crate::mocking::mocking_products;
use crate::server::state::AppState;
use crate::uploads::upload_images;

/// Add the API routes to the router
pub fn configure_api_routes(
    router: Router<AppState>,
    app_state: &AppState,
) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/sessions/current", get(current))
        .route_layer(from_fn_with_state(app_state.clone(), jwt_gate));

    router
        .route("/api/sessions/register", post(register))
        .route("/api/sessions/login", post(login))
        .route("/api/mockingproducts", get(mocking_products))
        .route("/api/uploads", post(upload_images))
        .merge(protected)
}
