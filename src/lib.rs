//! # Railyard
//!
//! Functional building blocks for railway-style Rust: values travel on a success
//! track or a failure track, and combinators decide when the tracks merge.
//!
//! - [`Either`]: right-biased disjoint union. Combining stops at the first `Left`.
//! - [`Validation`]: success or a list of errors. Combining collects every error.
//! - [`PartialFunction`]: a function paired with the domain it is defined on.
//! - [`function`] and [`predicate`]: traits for functions and predicates of three
//!   to eight arguments, with composition.
//! - [`ValidationError`]: an error message with a priority.
//!
//! ## Quick Example
//!
//! ```rust
//! use railyard::{Validation, ValidationError};
//!
//! fn check_name(name: &str) -> Validation<ValidationError, ()> {
//!     if name.is_empty() {
//!         Validation::invalid(vec![ValidationError::of(1, "name is empty")])
//!     } else {
//!         Validation::valid(())
//!     }
//! }
//!
//! fn check_age(age: u8) -> Validation<ValidationError, ()> {
//!     if age >= 18 {
//!         Validation::valid(())
//!     } else {
//!         Validation::invalid(vec![ValidationError::of(2, "must be an adult")])
//!     }
//! }
//!
//! let result = Validation::combine([check_name(""), check_age(12)]);
//! let messages: Vec<String> = result
//!     .unwrap_errors()
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! assert_eq!(messages, ["[1] name is empty", "[2] must be an adult"]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace` events from the combining operations.
//! - `serde`: `Serialize`/`Deserialize` for [`Either`], [`Validation`] and
//!   [`ValidationError`].
//! - `proptest`: `Arbitrary` implementations for the same types.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod error;
pub mod function;
pub mod partial_function;
pub mod predicate;
pub mod testing;
pub mod validation;

// Re-exports
pub use either::Either;
pub use error::Error;
pub use partial_function::PartialFunction;
pub use validation::{Validation, ValidationError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::Error;
    pub use crate::function::{
        HeptaFunction, HexaFunction, OctaFunction, PentaFunction, QuadFunction, TriFunction,
    };
    pub use crate::partial_function::PartialFunction;
    pub use crate::predicate::{
        HeptaPredicate, HexaPredicate, PentaPredicate, QuadPredicate, TriPredicate,
    };
    pub use crate::validation::{Validation, ValidationError};
}
