use beepy_core::{DomainError, DomainResult, ValueObject};

use crate::fields::{digits, validate_phone};

/// A Brazilian phone number: area code plus an 8-digit fixed line or a
/// 9-digit mobile line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl ValueObject for Phone {}

impl Phone {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if !validate_phone(raw) {
            return Err(DomainError::validation("invalid phone"));
        }
        let d: String = digits(raw).iter().map(|d| char::from(b'0' + d)).collect();
        Ok(Self(d))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn is_mobile(&self) -> bool {
        self.0.len() == 11
    }
}

impl core::fmt::Display for Phone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let d = &self.0;
        // (AA) NNNNN-NNNN or (AA) NNNN-NNNN
        let split = d.len() - 4;
        write!(f, "({}) {}-{}", &d[..2], &d[2..split], &d[split..])
    }
}
