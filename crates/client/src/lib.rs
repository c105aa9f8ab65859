//! `beepy-client`
//!
//! **Responsibility:** everything between a console screen and the Beepy API.
//!
//! This crate provides:
//! - the API gateway that every backend call goes through (bearer token in,
//!   forced logout on 401 out)
//! - session verification and the route guard built on it
//! - login, registration and logout
//!
//! The backend stays the authority: nothing here is a security boundary.

pub mod app;
pub mod auth_service;
pub mod config;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod redirect;
pub mod types;
pub mod verifier;

pub use app::AppState;
pub use auth_service::AuthService;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, AuthError};
pub use gateway::ApiClient;
pub use guard::{GuardHandle, GuardState, GuardView, RouteGuard};
pub use redirect::{
    AuthFailurePolicy, ForcedLogout, LOGIN_ROUTE, NavigationMode, Navigator, RecordingNavigator,
};
pub use verifier::{ApiSessionVerifier, SessionVerifier};
