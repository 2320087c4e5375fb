/**
 * Application State
 *
 * This module defines the central state container shared by all handlers
 * and its `FromRef` implementations, so handlers can extract exactly the
 * piece they need.
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share: the user store holds
 * its map behind `Arc<RwLock<_>>`, the strategy registry and configuration
 * are immutable behind `Arc`, and the mailer's transport is internally
 * shared.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::strategy::StrategyRegistry;
use crate::auth::users::UserStore;
use crate::email::Mailer;
use crate::server::config::Config;
use crate::uploads::DiskStorage;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    /// User credential store
    pub users: UserStore,
    /// Named authentication strategies, registered at startup
    pub strategies: Arc<StrategyRegistry>,
    /// SMTP mailer; `None` when email credentials are not configured
    pub mailer: Option<Mailer>,
    /// Disk storage for uploaded images
    pub storage: DiskStorage,
    /// Process-wide configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// State with an empty store and registry, for unit tests that wire
    /// their own strategies
    pub fn for_tests(config: Config) -> Self {
        Self {
            users: UserStore::new(),
            strategies: Arc::new(StrategyRegistry::new()),
            mailer: None,
            storage: DiskStorage::new(config.upload_dir.clone()),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for UserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<StrategyRegistry> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.strategies.clone()
    }
}

impl FromRef<AppState> for Option<Mailer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}

impl FromRef<AppState> for DiskStorage {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.storage.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
