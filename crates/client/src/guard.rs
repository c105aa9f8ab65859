//! Route guard: decides whether a protected screen may render.

use std::sync::Arc;

use beepy_auth::TokenStore;
use tokio::sync::watch;

use crate::redirect::{LOGIN_ROUTE, NavigationMode, Navigator};
use crate::verifier::SessionVerifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// What a protected screen shows for a given [`GuardState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<T> {
    Loading,
    Content(T),
    Redirect(&'static str),
}

impl GuardState {
    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Checking)
    }

    /// Build the protected content only once the session is confirmed.
    pub fn view<T>(self, content: impl FnOnce() -> T) -> GuardView<T> {
        match self {
            Self::Checking => GuardView::Loading,
            Self::Authenticated => GuardView::Content(content()),
            Self::Unauthenticated => GuardView::Redirect(LOGIN_ROUTE),
        }
    }
}

#[derive(Clone)]
pub struct RouteGuard {
    store: TokenStore,
    verifier: Arc<dyn SessionVerifier>,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(
        store: TokenStore,
        verifier: Arc<dyn SessionVerifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            verifier,
            navigator,
        }
    }

    /// Run one verification and report the outcome. Does not navigate.
    ///
    /// Without a token the verifier is never called. A failed verification
    /// of any kind clears the session.
    pub async fn check(&self) -> GuardState {
        if self.store.token().is_none() {
            tracing::info!("route guard: no session");
            return GuardState::Unauthenticated;
        }

        match self.verifier.verify().await {
            Ok(()) => {
                tracing::info!("route guard: session verified");
                GuardState::Authenticated
            }
            Err(err) => {
                tracing::info!("route guard: verification failed: {err}");
                if let Err(err) = self.store.clear_session() {
                    tracing::warn!("failed to remove stored session: {err}");
                }
                GuardState::Unauthenticated
            }
        }
    }

    /// Start a check for a screen being mounted. Must be called from within
    /// a tokio runtime.
    ///
    /// The handle reads `Checking` until the check settles. A rejected
    /// session replaces the current location with the login route. Dropping
    /// the handle before then discards the result, navigation included.
    pub fn mount(&self) -> GuardHandle {
        let (tx, rx) = watch::channel(GuardState::Checking);
        let guard = self.clone();

        tokio::spawn(async move {
            let state = guard.check().await;
            if tx.is_closed() {
                tracing::debug!(?state, "route guard: screen unmounted, result dropped");
                return;
            }
            if state == GuardState::Unauthenticated {
                guard.navigator.navigate(LOGIN_ROUTE, NavigationMode::Replace);
            }
            tx.send_replace(state);
        });

        GuardHandle { rx }
    }
}

/// Live view of one mounted guard. Dropping it unmounts the guard.
#[derive(Debug)]
pub struct GuardHandle {
    rx: watch::Receiver<GuardState>,
}

impl GuardHandle {
    pub fn state(&self) -> GuardState {
        *self.rx.borrow()
    }

    /// Wait for the check to finish.
    pub async fn settled(&self) -> GuardState {
        let mut rx = self.rx.clone();
        match rx.wait_for(|state| state.is_settled()).await {
            Ok(state) => *state,
            // The check task is gone without settling.
            Err(_) => GuardState::Unauthenticated,
        }
    }

    pub fn view<T>(&self, content: impl FnOnce() -> T) -> GuardView<T> {
        self.state().view(content)
    }
}
