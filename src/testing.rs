//! Testing helpers for code built on railyard types
//!
//! Assertion macros unwrap the expected variant and evaluate to its payload, so a
//! test can keep going with the value:
//!
//! ```rust
//! use railyard::{assert_invalid_errors, assert_right, assert_valid, Either, Validation};
//!
//! let port = assert_right!(Either::<String, u16>::right(8080));
//! assert_eq!(port, 8080);
//!
//! let name = assert_valid!(Validation::<&str, _>::valid("ada"));
//! assert_eq!(name, "ada");
//!
//! assert_invalid_errors!(Validation::<_, i32>::invalid(vec!["empty"]), vec!["empty"]);
//! ```
//!
//! With the `proptest` feature enabled, [`Either`](crate::Either),
//! [`Validation`](crate::Validation) and [`ValidationError`](crate::ValidationError)
//! implement `proptest::arbitrary::Arbitrary`.

/// Assert that a validation is `Valid`, evaluating to the value.
///
/// # Example
///
/// ```rust
/// use railyard::{assert_valid, Validation};
///
/// let val = Validation::<String, _>::valid(42);
/// assert_eq!(assert_valid!(val), 42);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Valid(value) => value,
            $crate::Validation::Invalid(errors) => {
                panic!("Expected Valid, got Invalid: {:?}", errors);
            }
        }
    };
}

/// Assert that a validation is `Invalid`, evaluating to the errors.
///
/// # Example
///
/// ```rust
/// use railyard::{assert_invalid, Validation};
///
/// let val = Validation::<_, i32>::invalid(vec!["too small"]);
/// assert_eq!(assert_invalid!(val).len(), 1);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Invalid(errors) => errors,
            $crate::Validation::Valid(value) => {
                panic!("Expected Invalid, got Valid: {:?}", value);
            }
        }
    };
}

/// Assert that a validation is `Invalid` with exactly the given errors, in order.
#[macro_export]
macro_rules! assert_invalid_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Invalid(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Valid(value) => {
                panic!(
                    "Expected Invalid with errors {:?}, got Valid: {:?}",
                    $expected, value
                );
            }
        }
    };
}

/// Assert that an either is `Right`, evaluating to the value.
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(value) => value,
            $crate::Either::Left(left) => {
                panic!("Expected Right, got Left: {:?}", left);
            }
        }
    };
}

/// Assert that an either is `Left`, evaluating to the value.
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(value) => value,
            $crate::Either::Right(right) => {
                panic!("Expected Left, got Right: {:?}", right);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use crate::{Either, Validation, ValidationError};
    use proptest::prelude::*;

    impl<L, R> Arbitrary for Either<L, R>
    where
        L: Arbitrary + 'static,
        R: Arbitrary + 'static,
    {
        type Parameters = (L::Parameters, R::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (left_params, right_params) = args;
            prop_oneof![
                any_with::<L>(left_params).prop_map(Either::Left),
                any_with::<R>(right_params).prop_map(Either::Right),
            ]
            .boxed()
        }
    }

    /// Invalid values always carry between one and four errors.
    impl<E, T> Arbitrary for Validation<E, T>
    where
        E: Arbitrary + 'static,
        T: Arbitrary + 'static,
    {
        type Parameters = (E::Parameters, T::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (error_params, value_params) = args;
            prop_oneof![
                any_with::<T>(value_params).prop_map(Validation::Valid),
                proptest::collection::vec(any_with::<E>(error_params), 1..5)
                    .prop_map(Validation::Invalid),
            ]
            .boxed()
        }
    }

    impl Arbitrary for ValidationError {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (-100i32..=100, "[a-z ]{0,16}")
                .prop_map(|(priority, message)| ValidationError::of(priority, message))
                .boxed()
        }
    }
}
