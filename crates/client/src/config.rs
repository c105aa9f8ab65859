//! Client configuration (endpoint root, timeout, session file).

use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

use beepy_auth::{FileStorage, StorageError};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:10000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

pub const ENV_BASE_URL: &str = "BEEPY_API_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "BEEPY_API_TIMEOUT_MS";
pub const ENV_SESSION_FILE: &str = "BEEPY_SESSION_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BEEPY_API_TIMEOUT_MS must be a whole number of milliseconds, got '{value}': {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("API base URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint root, without a trailing `/`.
    pub base_url: String,
    /// Ceiling for a whole request, connect through body.
    pub timeout: Duration,
    /// Where the session is persisted; `None` means the OS data directory.
    pub session_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            session_file: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `BEEPY_API_BASE_URL`, `BEEPY_API_TIMEOUT_MS`
    /// and `BEEPY_SESSION_FILE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(url)?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidTimeout {
                    value: raw.clone(),
                    source,
                })?;
            config = config.with_timeout(Duration::from_millis(ms))?;
        }

        if let Some(path) = lookup(ENV_SESSION_FILE).filter(|p| !p.trim().is_empty()) {
            config = config.with_session_file(path);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Durable storage for the session, at the configured or default path.
    pub fn session_storage(&self) -> Result<FileStorage, StorageError> {
        match &self.session_file {
            Some(path) => Ok(FileStorage::at(path)),
            None => FileStorage::open_default(),
        }
    }
}
