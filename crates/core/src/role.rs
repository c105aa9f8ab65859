use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a console user.
///
/// The set is closed: the backend only issues these two. Older backend
/// builds spell the ambassador role in Portuguese (`embaixadora`), which is
/// accepted on input and normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(alias = "embaixadora")]
    Ambassador,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Ambassador];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Ambassador => "ambassador",
        }
    }

    /// Human-readable name shown next to the user in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Ambassador => "Ambassador",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "ambassador" | "embaixadora" => Ok(Role::Ambassador),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Ambassador).unwrap(),
            "\"ambassador\""
        );
    }

    #[test]
    fn accepts_legacy_ambassador_spelling() {
        let role: Role = serde_json::from_str("\"embaixadora\"").unwrap();
        assert_eq!(role, Role::Ambassador);
        assert_eq!("Embaixadora".parse::<Role>(), Ok(Role::Ambassador));
    }

    #[test]
    fn rejects_roles_outside_the_set() {
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
        assert_eq!(
            "manager".parse::<Role>(),
            Err(UnknownRole("manager".to_string()))
        );
    }
}
