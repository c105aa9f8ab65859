use beepy_auth::{Role, UserProfile};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`. The backend calls the role `user_type`.
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    #[serde(serialize_with = "backend_user_type")]
    pub user_type: Role,
    pub password: String,
}

/// Body returned by login and registration. Both parts are optional here so
/// that an incomplete answer can be reported instead of failing to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default, alias = "token")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// The backend only accepts its own spelling of the roles.
fn backend_user_type<S: Serializer>(role: &Role, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(match role {
        Role::Admin => "admin",
        Role::Ambassador => "embaixadora",
    })
}
