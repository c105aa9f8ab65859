//! Process-wide holder of the current session.

use std::sync::{Arc, PoisonError, RwLock};

use crate::storage::{MemoryStorage, SessionStorage, StorageError, TOKEN_KEY, USER_KEY};
use crate::{Role, Session, UserProfile};

/// The current session token and cached user profile.
///
/// Cheap to clone; every clone shares the same state. All readers go through
/// the accessors, and every mutation is a full replace (`set_session`) or a
/// full clear (`clear_session`) performed under the write lock, so no reader
/// can observe a token without its user.
#[derive(Clone)]
pub struct TokenStore {
    inner: Arc<Inner>,
}

struct Inner {
    session: RwLock<Option<Session>>,
    storage: Box<dyn SessionStorage>,
}

impl TokenStore {
    /// Open the store, restoring any session left in durable storage.
    ///
    /// A stored session is restored only when both entries are present and
    /// the profile parses. One entry missing or a corrupt profile or file is
    /// wiped so storage is back to "both or neither". Storage that cannot be
    /// read at all is left alone and the store starts empty.
    pub fn open(storage: impl SessionStorage + 'static) -> Self {
        let session = restore(&storage);
        Self {
            inner: Arc::new(Inner {
                session: RwLock::new(session),
                storage: Box::new(storage),
            }),
        }
    }

    /// A store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::open(MemoryStorage::new())
    }

    /// Replace the current session.
    ///
    /// Storage is written first, both entries in one write; memory is swapped
    /// only once that write is durable. On a storage failure storage and
    /// memory both keep the previous session and the error is returned.
    pub fn set_session(
        &self,
        token: impl Into<String>,
        user: UserProfile,
    ) -> Result<(), StorageError> {
        let session = Session::new(token, user);
        let user_json = serde_json::to_string(&session.user)?;

        let mut current = self
            .inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let persisted = self.inner.storage.apply(&[
            (TOKEN_KEY, Some(session.token.as_str())),
            (USER_KEY, Some(user_json.as_str())),
        ]);

        if let Err(err) = persisted {
            tracing::error!("failed to persist session: {err}");
            return Err(err);
        }

        tracing::info!(user_id = %session.user.id, role = %session.user.role, "session established");
        *current = Some(session);
        Ok(())
    }

    /// Drop the current session. Safe to call when already signed out.
    ///
    /// Memory is cleared before storage is touched, so the process is signed
    /// out even when the durable removal fails.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        let mut current = self
            .inner
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if current.take().is_some() {
            tracing::info!("session cleared");
        }

        self.inner.storage.apply(&CLEAR)
    }

    pub fn session(&self) -> Option<Session> {
        self.read(|s| s.cloned())
    }

    pub fn token(&self) -> Option<String> {
        self.read(|s| s.map(|s| s.token.clone()))
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.read(|s| s.map(|s| s.user.clone()))
    }

    pub fn role(&self) -> Option<Role> {
        self.read(|s| s.map(|s| s.user.role))
    }

    pub fn is_authenticated(&self) -> bool {
        self.read(|s| s.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.read(|s| s.is_some_and(|s| s.user.is_admin()))
    }

    fn read<T>(&self, f: impl FnOnce(Option<&Session>) -> T) -> T {
        let guard = self
            .inner
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(guard.as_ref())
    }
}

impl core::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenStore")
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}

const CLEAR: [(&str, Option<&str>); 2] = [(TOKEN_KEY, None), (USER_KEY, None)];

fn restore(storage: &dyn SessionStorage) -> Option<Session> {
    let entries = storage
        .get(TOKEN_KEY)
        .and_then(|token| Ok((token, storage.get(USER_KEY)?)));

    let (token, user) = match entries {
        Ok((None, None)) => return None,
        Ok((Some(token), Some(user))) if !token.is_empty() => (token, user),
        Ok(_) => {
            tracing::warn!("stored session is incomplete; clearing it");
            wipe(storage);
            return None;
        }
        Err(err @ StorageError::Corrupt { .. }) => {
            tracing::warn!("stored session is unreadable; clearing it: {err}");
            wipe(storage);
            return None;
        }
        Err(err) => {
            tracing::warn!("failed to read stored session; starting signed out: {err}");
            return None;
        }
    };

    match serde_json::from_str::<UserProfile>(&user) {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "restored stored session");
            Some(Session { token, user })
        }
        Err(err) => {
            tracing::warn!("stored user profile is corrupt; clearing session: {err}");
            wipe(storage);
            None
        }
    }
}

fn wipe(storage: &dyn SessionStorage) {
    if let Err(err) = storage.apply(&CLEAR) {
        tracing::warn!("failed to remove stored session: {err}");
    }
}
