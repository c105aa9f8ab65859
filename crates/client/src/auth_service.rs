//! Sign-in, registration and sign-out.

use beepy_auth::{Role, TokenStore, UserProfile};
use beepy_validation::{FormData, ValidationResult, validate_login_form, validate_registration_form};
use serde_json::Value;

use crate::error::AuthError;
use crate::gateway::ApiClient;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn store(&self) -> &TokenStore {
        self.api.store()
    }

    /// Validate the form, then exchange the credentials for a session.
    pub async fn login(&self, form: &FormData) -> Result<UserProfile, AuthError> {
        accept(validate_login_form(form))?;

        let request = LoginRequest {
            email: text(form, "email"),
            password: text(form, "password"),
        };
        let response: AuthResponse = self.api.post(LOGIN_PATH, &request).await?;
        self.establish(response)
    }

    /// Validate the form, create the account and sign in as it.
    pub async fn register(&self, form: &FormData) -> Result<UserProfile, AuthError> {
        let result = validate_registration_form(form);
        let user_type = match text(form, "role").parse::<Role>() {
            Ok(role) if result.is_valid() => role,
            _ => return Err(AuthError::Invalid(result)),
        };

        let request = RegisterRequest {
            email: text(form, "email"),
            name: text(form, "name").trim().to_string(),
            user_type,
            password: text(form, "password"),
        };
        let response: AuthResponse = self.api.post(REGISTER_PATH, &request).await?;
        self.establish(response)
    }

    /// Drop the session. Signing out twice is not an error.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store().clear_session()?;
        Ok(())
    }

    fn establish(&self, response: AuthResponse) -> Result<UserProfile, AuthError> {
        let token = response
            .access_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(AuthError::MalformedResponse("missing access token"))?;
        let user = response
            .user
            .ok_or(AuthError::MalformedResponse("missing user"))?;

        self.store().set_session(token, user.clone())?;
        Ok(user)
    }
}

fn accept(result: ValidationResult) -> Result<(), AuthError> {
    if result.is_valid() {
        Ok(())
    } else {
        tracing::debug!(fields = ?result.errors().fields().collect::<Vec<_>>(), "form rejected");
        Err(AuthError::Invalid(result))
    }
}

fn text(form: &FormData, field: &str) -> String {
    form.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
