//! The single HTTP channel to the Beepy API.
//!
//! Every backend call goes through [`ApiClient`]. It attaches the current
//! token as a bearer credential, applies the configured timeout, and hands
//! any 401 to the [`AuthFailurePolicy`] before the caller sees the error.

use std::sync::Arc;

use beepy_auth::TokenStore;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::redirect::{AuthFailurePolicy, ForcedLogout, Navigator};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: TokenStore,
    policy: Arc<dyn AuthFailurePolicy>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        store: TokenStore,
        policy: Arc<dyn AuthFailurePolicy>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            config,
            store,
            policy,
        })
    }

    /// Gateway whose 401 handling is [`ForcedLogout`] through `navigator`.
    pub fn with_forced_logout(
        config: ClientConfig,
        store: TokenStore,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let policy = Arc::new(ForcedLogout::new(store.clone(), navigator));
        Self::new(config, store, policy)
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send(Method::POST, path, Some(&body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send(Method::PUT, path, Some(&body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::DELETE, path, None).await
    }

    /// Issue one request and decode a 2xx body as `T`. An empty body decodes
    /// as JSON `null`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let url = self.config.url(path);
        let mut req = self.http.request(method.clone(), &url);

        // Read at send time so a concurrent login or logout is picked up.
        if let Some(token) = self.store.token() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        tracing::debug!(%method, path, "api request");
        let resp = req.send().await.map_err(|e| {
            tracing::warn!(%method, path, "api request failed: {e}");
            ApiError::from_reqwest(e)
        })?;

        let status = resp.status();
        tracing::debug!(%method, path, status = status.as_u16(), "api response");

        if status == StatusCode::UNAUTHORIZED {
            self.policy.on_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        let bytes = resp.bytes().await.map_err(ApiError::from_reqwest)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: server_message(&bytes),
            });
        }

        let bytes: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl core::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Client(e.to_string()))
}

/// Human-readable reason from an error body such as `{"error": "..."}`.
fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "error", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}
