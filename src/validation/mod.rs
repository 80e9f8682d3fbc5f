//! Error-accumulating validation
//!
//! This module provides:
//! - The `Validation` type, whose `Invalid` side collects every error found
//! - `ValidationError`, a priority-ordered error record for use as the error element
//! - `validate` / `validate_with`, which lift a predicate check into a `Validation`

pub mod core;
pub mod error;

pub use self::core::{validate, validate_with, Validation};
pub use self::error::ValidationError;
