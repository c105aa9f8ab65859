use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::gateway::ApiClient;

pub const VERIFY_PATH: &str = "/auth/verify";

/// Asks the backend whether the current token is still accepted.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self) -> Result<(), ApiError>;
}

/// Verifies through `GET /auth/verify`. A 401 there goes through the
/// gateway's forced-logout path like any other call.
#[derive(Debug, Clone)]
pub struct ApiSessionVerifier {
    api: ApiClient,
}

impl ApiSessionVerifier {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SessionVerifier for ApiSessionVerifier {
    async fn verify(&self) -> Result<(), ApiError> {
        self.api.get::<Value>(VERIFY_PATH).await.map(|_| ())
    }
}
