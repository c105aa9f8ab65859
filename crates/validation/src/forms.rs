//! Form-level validation.
//!
//! Each form checks its fields independently: a failure on one field never
//! suppresses the checks on another. Within a field, the format rule only
//! runs once the required check has passed, so a field reports at most one
//! message.

use beepy_core::Role;
use serde_json::{Map, Value};

use crate::fields::{
    INVALID_EMAIL, INVALID_PHONE, PASSWORD_TOO_SHORT, password_long_enough, required_message,
    validate_email, validate_phone, validate_required,
};
use crate::result::{FieldErrors, ValidationResult};

/// Raw values as submitted by the user. Any field may be absent or of the
/// wrong JSON type.
pub type FormData = Map<String, Value>;

const INVALID_ROLE: &str = "Invalid user type";

/// A format rule applied to a field once it is known to be present.
struct Format {
    check: fn(&str) -> bool,
    message: &'static str,
}

const EMAIL: Format = Format {
    check: validate_email,
    message: INVALID_EMAIL,
};

const PHONE: Format = Format {
    check: validate_phone,
    message: INVALID_PHONE,
};

const PASSWORD: Format = Format {
    check: password_long_enough,
    message: PASSWORD_TOO_SHORT,
};

const KNOWN_ROLE: Format = Format {
    check: is_known_role,
    message: INVALID_ROLE,
};

fn is_known_role(raw: &str) -> bool {
    raw.parse::<Role>().is_ok()
}

fn check(
    errors: &mut FieldErrors,
    data: &FormData,
    field: &'static str,
    label: &str,
    format: Option<&Format>,
) {
    let value = data.get(field);
    if let Some(message) = validate_required(value, label) {
        errors.insert(field, message);
        return;
    }

    // Every form field is text: a number, list or object never counts as
    // filled in, and cannot satisfy a format either.
    let text = value.and_then(Value::as_str);
    match (format, text) {
        (None, None) => errors.insert(field, required_message(label)),
        (Some(format), text) if !text.is_some_and(format.check) => {
            errors.insert(field, format.message)
        }
        _ => {}
    }
}

/// New indication: client name, email and phone.
pub fn validate_indication_form(data: &FormData) -> ValidationResult {
    let mut errors = FieldErrors::default();
    check(&mut errors, data, "client_name", "Client name", None);
    check(&mut errors, data, "email", "Email", Some(&EMAIL));
    check(&mut errors, data, "phone", "Phone", Some(&PHONE));
    ValidationResult::from_errors(errors)
}

/// Create (`is_edit == false`) or edit a user.
///
/// Edits may leave the password out; the server keeps the current one.
pub fn validate_user_form(data: &FormData, is_edit: bool) -> ValidationResult {
    let mut errors = FieldErrors::default();
    check(&mut errors, data, "name", "Name", None);
    check(&mut errors, data, "email", "Email", Some(&EMAIL));
    check(&mut errors, data, "role", "User type", None);
    if !is_edit {
        check(&mut errors, data, "password", "Password", Some(&PASSWORD));
    }
    ValidationResult::from_errors(errors)
}

/// Sign-in: email and password must be present. No length rule, so
/// accounts created before the policy can still sign in.
pub fn validate_login_form(data: &FormData) -> ValidationResult {
    let mut errors = FieldErrors::default();
    check(&mut errors, data, "email", "Email", Some(&EMAIL));
    check(&mut errors, data, "password", "Password", None);
    ValidationResult::from_errors(errors)
}

/// Self-registration: every field is required and the role must be one the
/// console knows.
pub fn validate_registration_form(data: &FormData) -> ValidationResult {
    let mut errors = FieldErrors::default();
    check(&mut errors, data, "name", "Name", None);
    check(&mut errors, data, "email", "Email", Some(&EMAIL));
    check(&mut errors, data, "role", "User type", Some(&KNOWN_ROLE));
    check(&mut errors, data, "password", "Password", Some(&PASSWORD));
    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: Value) -> FormData {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn valid_indication_passes() {
        let result = validate_indication_form(&form(json!({
            "client_name": "Padaria Central",
            "email": "contato@padaria.com",
            "phone": "(11) 98888-7777"
        })));
        assert!(result.is_valid());
    }

    #[test]
    fn indication_fields_are_checked_independently() {
        let result = validate_indication_form(&form(json!({
            "client_name": "  ",
            "email": "not-an-email",
            "phone": "123"
        })));

        assert!(!result.is_valid());
        assert_eq!(
            result.errors().fields().collect::<Vec<_>>(),
            vec!["client_name", "email", "phone"]
        );
        assert_eq!(result.error("client_name"), Some("Client name is required"));
        assert_eq!(result.error("email"), Some("Invalid email"));
        assert_eq!(result.error("phone"), Some("Invalid phone"));
    }

    #[test]
    fn missing_field_reports_required_not_format() {
        let result = validate_indication_form(&form(json!({
            "client_name": "Padaria Central",
            "phone": "(11) 98888-7777"
        })));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.error("email"), Some("Email is required"));
    }

    #[test]
    fn wrong_type_degrades_to_invalid() {
        let result = validate_indication_form(&form(json!({
            "client_name": "Padaria Central",
            "email": 42,
            "phone": ["11", "98888-7777"]
        })));
        assert_eq!(result.error("email"), Some("Invalid email"));
        assert_eq!(result.error("phone"), Some("Invalid phone"));
    }

    #[test]
    fn non_text_values_do_not_fill_plain_fields() {
        let indication = validate_indication_form(&form(json!({
            "client_name": 42,
            "email": "contato@padaria.com",
            "phone": "(11) 98888-7777"
        })));
        assert_eq!(
            indication.errors().fields().collect::<Vec<_>>(),
            vec!["client_name"]
        );
        assert_eq!(indication.error("client_name"), Some("Client name is required"));

        let user = validate_user_form(
            &form(json!({"name": "Ana", "email": "ana@beepy.com", "role": 7})),
            true,
        );
        assert_eq!(user.error("role"), Some("User type is required"));

        let login = validate_login_form(&form(json!({"email": "a@b.co", "password": true})));
        assert_eq!(login.error("password"), Some("Password is required"));
    }

    #[test]
    fn registration_role_must_be_text() {
        let result = validate_registration_form(&form(json!({
            "name": "Ana",
            "email": "ana@beepy.com",
            "role": {"name": "admin"},
            "password": "abcdef"
        })));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.error("role"), Some("Invalid user type"));
    }

    #[test]
    fn edit_without_password_only_flags_name() {
        let data = form(json!({"name": "", "email": "x@x.com", "role": "admin"}));

        let edit = validate_user_form(&data, true);
        assert!(!edit.is_valid());
        assert_eq!(edit.errors().fields().collect::<Vec<_>>(), vec!["name"]);

        let create = validate_user_form(&data, false);
        assert_eq!(
            create.errors().fields().collect::<Vec<_>>(),
            vec!["name", "password"]
        );
        assert_eq!(create.error("password"), Some("Password is required"));
    }

    #[test]
    fn create_user_checks_password_length() {
        let result = validate_user_form(
            &form(json!({
                "name": "Ana",
                "email": "ana@beepy.com",
                "role": "ambassador",
                "password": "abc"
            })),
            false,
        );
        assert_eq!(
            result.error("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn edit_ignores_a_short_password() {
        let result = validate_user_form(
            &form(json!({
                "name": "Ana",
                "email": "ana@beepy.com",
                "role": "ambassador",
                "password": "abc"
            })),
            true,
        );
        assert!(result.is_valid());
    }

    #[test]
    fn login_requires_both_fields_without_length_rule() {
        assert!(validate_login_form(&form(json!({"email": "a@b.co", "password": "x"}))).is_valid());

        let empty = validate_login_form(&FormData::new());
        assert_eq!(
            empty.errors().fields().collect::<Vec<_>>(),
            vec!["email", "password"]
        );
    }

    #[test]
    fn registration_rejects_unknown_roles() {
        let result = validate_registration_form(&form(json!({
            "name": "Ana",
            "email": "ana@beepy.com",
            "role": "superuser",
            "password": "abcdef"
        })));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.error("role"), Some("Invalid user type"));

        let legacy = validate_registration_form(&form(json!({
            "name": "Ana",
            "email": "ana@beepy.com",
            "role": "embaixadora",
            "password": "abcdef"
        })));
        assert!(legacy.is_valid());
    }
}
