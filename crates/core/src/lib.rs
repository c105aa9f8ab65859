//! `beepy-core`: shared primitives for the Beepy console crates.
//!
//! This crate contains **pure** building blocks (no I/O, no HTTP).

pub mod error;
pub mod id;
pub mod role;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use role::{Role, UnknownRole};
pub use value_object::ValueObject;
