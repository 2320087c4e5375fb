/**
 * Server Initialization
 *
 * This module assembles the application: credential store, authentication
 * strategies, mailer, upload storage, and finally the router.
 *
 * # Initialization Steps
 *
 * 1. Create the user store
 * 2. Register authentication strategies (currently the JWT bearer strategy)
 * 3. Build the mailer if email credentials are configured
 * 4. Create the upload storage
 * 5. Assemble the router with the shared state
 *
 * # Error Handling
 *
 * A mailer that fails to build is logged and disabled; the server starts
 * without email. Configuration errors (missing signing secret) abort
 * before this module runs.
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::strategy::{JwtStrategy, StrategyRegistry};
use crate::auth::users::UserStore;
use crate::email::Mailer;
use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;
use crate::uploads::DiskStorage;

/// Assemble the application from an explicit configuration
///
/// The binary loads the configuration from the environment first; tests
/// supply their own.
pub fn build_app(config: Config) -> Router {
    tracing::info!("Initializing comercio backend server");

    // Step 1: credential store
    let users = UserStore::new();

    // Step 2: authentication strategies
    let mut strategies = StrategyRegistry::new();
    strategies.register(Arc::new(JwtStrategy::new(config.jwt_secret.clone())));

    // Step 3: mailer, if configured
    let mailer = config.email.as_ref().and_then(|email_config| {
        match Mailer::from_config(email_config) {
            Ok(mailer) => {
                tracing::info!("Mailer configured for {}", email_config.from_address);
                Some(mailer)
            }
            Err(e) => {
                tracing::error!("Failed to build mailer: {}", e);
                tracing::warn!("Email features will be disabled.");
                None
            }
        }
    });

    // Step 4: upload storage
    let storage = DiskStorage::new(config.upload_dir.clone());

    let app_state = AppState {
        users,
        strategies: Arc::new(strategies),
        mailer,
        storage,
        config: Arc::new(config),
    };

    // Step 5: router
    create_router(app_state)
}
