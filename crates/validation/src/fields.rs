//! Single-field validators.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::result::{FieldErrors, ValidationResult};

pub(crate) const INVALID_EMAIL: &str = "Invalid email";
pub(crate) const INVALID_PHONE: &str = "Invalid phone";
pub(crate) const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

pub(crate) const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// `local@domain.tld`: one `@`, at least one `.` after it, no whitespace.
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Brazilian fixed (10 digits) or mobile (11 digits) number, any punctuation.
pub fn validate_phone(phone: &str) -> bool {
    matches!(digits(phone).len(), 10 | 11)
}

/// CPF with both modulo-11 check digits correct. Punctuation is ignored.
pub fn validate_cpf(cpf: &str) -> bool {
    let d = digits(cpf);
    if d.len() != 11 || d.iter().all(|&x| x == d[0]) {
        return false;
    }
    check_digit(&d[..9]) == d[9] && check_digit(&d[..10]) == d[10]
}

/// Modulo-11 check digit over `body`, weights descending to 2.
pub(crate) fn check_digit(body: &[u8]) -> u8 {
    let top = body.len() as u32 + 1;
    let sum: u32 = body
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    match 11 - (sum % 11) {
        10 | 11 => 0,
        r => r as u8,
    }
}

/// Decimal digits of `s`, in order; everything else is dropped.
pub(crate) fn digits(s: &str) -> Vec<u8> {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

pub(crate) fn password_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}

/// Minimum password policy: at least six characters, nothing else.
pub fn validate_password(password: &str) -> ValidationResult {
    let mut errors = FieldErrors::default();
    if !password_long_enough(password) {
        errors.insert("password", PASSWORD_TOO_SHORT);
    }
    ValidationResult::from_errors(errors)
}

/// `Some("<label> is required")` when the value is absent, `null`, or a
/// blank string; `None` otherwise.
pub fn validate_required(value: Option<&Value>, field_label: &str) -> Option<String> {
    match value {
        None | Some(Value::Null) => Some(required_message(field_label)),
        Some(Value::String(s)) if s.trim().is_empty() => Some(required_message(field_label)),
        Some(_) => None,
    }
}

pub(crate) fn required_message(field_label: &str) -> String {
    format!("{field_label} is required")
}
