//! `beepy-auth`: client-side session state and role gating.
//!
//! This crate is intentionally decoupled from HTTP: it owns the session
//! token, the cached user profile, and the role-based visibility rules. It
//! is not a security boundary; the backend enforces authorization on its own.

pub mod capabilities;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod token_store;
pub mod user;

pub use capabilities::{Capability, allowed_capabilities, can};
pub use navigation::{MENU, NavEntry, RoleGated, visible_entries, visible_menu};
pub use beepy_core::{Role, UnknownRole};
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError, TOKEN_KEY, USER_KEY};
pub use token_store::TokenStore;
pub use user::UserProfile;
