use serde::{Deserialize, Serialize};

use beepy_core::UserId;

use crate::Role;

/// Profile of the signed-in user, as returned by login/registration.
///
/// Cached next to the token and replaced wholesale on every login; nothing in
/// the client edits a profile in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// The backend reports this as `user_type`.
    #[serde(alias = "user_type")]
    pub role: Role,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
