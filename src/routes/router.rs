/**
 * Router Configuration
 *
 * Combines the API routes, the static file service for stored uploads,
 * and the 404 fallback into the final application router.
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - API endpoints (sessions, mock products, uploads)
/// - `GET /static/*` - uploaded images, served from the storage directory
/// - anything else - 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_api_routes(router, &app_state);

    let router = router.nest_service(
        "/static",
        ServeDir::new(app_state.storage.root().to_path_buf()),
    );

    let router = router.fallback(|| async {
        (axum::http::StatusCode::NOT_FOUND, "404 Not Found")
    });

    router.with_state(app_state)
}
