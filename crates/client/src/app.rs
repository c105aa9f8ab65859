//! Wiring of the client services around one shared session.

use std::sync::Arc;

use beepy_auth::{Capability, NavEntry, SessionStorage, TokenStore, allowed_capabilities, visible_menu};

use crate::auth_service::AuthService;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::gateway::ApiClient;
use crate::guard::RouteGuard;
use crate::redirect::Navigator;
use crate::verifier::ApiSessionVerifier;

/// Application state shared by every screen.
///
/// All services hold clones of the same [`TokenStore`], so a login through
/// `auth` is visible to the gateway and the guard at once.
#[derive(Clone)]
pub struct AppState {
    pub store: TokenStore,
    pub api: ApiClient,
    pub auth: AuthService,
    pub navigator: Arc<dyn Navigator>,
}

impl AppState {
    /// Restore any persisted session from `storage` and build the services
    /// on top of it. 401s force a logout through `navigator`.
    pub fn new(
        config: ClientConfig,
        storage: impl SessionStorage + 'static,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let store = TokenStore::open(storage);
        let api = ApiClient::with_forced_logout(config, store.clone(), navigator.clone())?;
        let auth = AuthService::new(api.clone());

        Ok(Self {
            store,
            api,
            auth,
            navigator,
        })
    }

    /// Guard for protected screens, verifying through `GET /auth/verify`.
    pub fn route_guard(&self) -> RouteGuard {
        let verifier = Arc::new(ApiSessionVerifier::new(self.api.clone()));
        RouteGuard::new(self.store.clone(), verifier, self.navigator.clone())
    }

    /// Sidebar entries for the signed-in user.
    pub fn menu(&self) -> Vec<&'static NavEntry> {
        visible_menu(&self.store)
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        allowed_capabilities(self.store.role())
    }
}
