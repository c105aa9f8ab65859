//! Navigation seam and the forced-logout policy.

use std::sync::{Arc, Mutex, PoisonError};

use beepy_auth::TokenStore;

pub const LOGIN_ROUTE: &str = "/login";

/// How a route change is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Full reload: all in-memory screen state is discarded.
    Full,
    /// Replace the current history entry.
    Replace,
}

/// Whatever hosts the screens (window, terminal, test harness).
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str, mode: NavigationMode);
}

/// Records every navigation instead of performing it.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<(String, NavigationMode)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, NavigationMode)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<(String, NavigationMode)> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str, mode: NavigationMode) {
        tracing::debug!(route, ?mode, "navigate");
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((route.to_string(), mode));
    }
}

/// What the gateway does when the backend answers 401.
pub trait AuthFailurePolicy: Send + Sync {
    fn on_unauthorized(&self);
}

/// Clears the session and sends the user to the login screen with a full
/// reload. Idempotent: concurrent 401s end in the same state.
pub struct ForcedLogout {
    store: TokenStore,
    navigator: Arc<dyn Navigator>,
}

impl ForcedLogout {
    pub fn new(store: TokenStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }
}

impl AuthFailurePolicy for ForcedLogout {
    fn on_unauthorized(&self) {
        tracing::warn!("backend rejected credentials, signing out");
        if let Err(err) = self.store.clear_session() {
            tracing::warn!("failed to remove stored session: {err}");
        }
        self.navigator.navigate(LOGIN_ROUTE, NavigationMode::Full);
    }
}
