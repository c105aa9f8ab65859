//! `beepy-validation`: field and form validation for console submissions.
//!
//! Every validator here is pure: no I/O, no panics, and malformed input
//! (absent values, wrong JSON types) is reported as invalid instead of
//! raised. Nothing that fails validation is sent to the backend.

pub mod cpf;
pub mod fields;
pub mod forms;
pub mod phone;
pub mod result;

pub use cpf::Cpf;
pub use fields::{
    validate_cpf, validate_email, validate_password, validate_phone, validate_required,
};
pub use forms::{
    FormData, validate_indication_form, validate_login_form, validate_registration_form,
    validate_user_form,
};
pub use phone::Phone;
pub use result::{FieldErrors, ValidationResult};
