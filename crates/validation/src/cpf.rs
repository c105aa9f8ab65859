use beepy_core::{DomainError, DomainResult, ValueObject};

use crate::fields::{digits, validate_cpf};

/// A CPF whose check digits are known to be correct.
///
/// Stored as its 11 digits; `Display` renders the usual `XXX.XXX.XXX-XX` mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf([u8; 11]);

impl ValueObject for Cpf {}

impl Cpf {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if !validate_cpf(raw) {
            return Err(DomainError::validation("invalid CPF"));
        }
        let mut out = [0u8; 11];
        for (slot, d) in out.iter_mut().zip(digits(raw)) {
            *slot = d;
        }
        Ok(Self(out))
    }

    /// The bare 11 digits, as the backend stores them.
    pub fn digits(&self) -> String {
        self.0.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let d = self.digits();
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl core::str::FromStr for Cpf {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
