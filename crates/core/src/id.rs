//! Strongly-typed identifiers used across the console.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{DomainError, DomainResult};

/// Identifier of a user as issued by the backend.
///
/// The backend is not consistent about the wire type: the SQL deployment
/// returns integers, the document-store deployment returns strings. Both are
/// accepted on input and normalized to their decimal/text form; the id always
/// serializes as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("UserId: empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self::new(s).map_err(de::Error::custom),
            Raw::Unsigned(n) => Ok(Self::from(n)),
            Raw::Signed(n) => Ok(Self(n.to_string())),
        }
    }
}
