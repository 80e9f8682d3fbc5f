//! The accumulating `Validation` type.
//!
//! `Validation<E, T>` is the counterpart of [`Either`] for checks that should all
//! run: an `Invalid` carries an ordered list of errors, and merging two `Invalid`
//! values concatenates their lists instead of keeping only one of them.
//!
//! # Examples
//!
//! ```
//! use railyard::Validation;
//!
//! let name = Validation::<&str, &str>::invalid(vec!["name is blank"]);
//! let age = Validation::<&str, &str>::invalid(vec!["age is negative"]);
//!
//! assert_eq!(
//!     Validation::combine([name, age]),
//!     Validation::invalid(vec!["name is blank", "age is negative"])
//! );
//! ```

use crate::{Either, Error};

/// A validation that either holds a value or the errors collected so far.
///
/// An `Invalid` with an empty list is still invalid; it is not the same state as
/// a `Valid` holding an empty value.
///
/// # Examples
///
/// ```
/// use railyard::Validation;
///
/// let v = Validation::<String, u8>::valid(30);
/// assert_eq!(v.map(|age| age + 1).get(), Ok(31));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, T> {
    /// Successful validation with a value
    Valid(T),
    /// Failed validation with the accumulated errors, in the order they were found
    Invalid(Vec<E>),
}

impl<E, T> Validation<E, T> {
    /// Create a valid validation
    #[inline]
    pub fn valid(value: T) -> Self {
        Validation::Valid(value)
    }

    /// Create an invalid validation from a list of errors
    ///
    /// # Examples
    ///
    /// ```
    /// use railyard::Validation;
    ///
    /// let v = Validation::<_, i32>::invalid(vec!["too small", "odd"]);
    /// assert!(v.is_invalid());
    /// assert_eq!(v.errors(), &["too small", "odd"]);
    /// ```
    #[inline]
    pub fn invalid(errors: Vec<E>) -> Self {
        Validation::Invalid(errors)
    }

    /// Check if this validation is valid
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// Check if this validation is invalid
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validation::Invalid(_))
    }

    /// Return the valid value, or [`Error::NoSuchElement`] for an `Invalid`
    #[inline]
    pub fn get(self) -> Result<T, Error> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(_) => Err(Error::no_such_element("get", "Invalid")),
        }
    }

    /// Return the errors, or [`Error::NoSuchElement`] for a `Valid`
    #[inline]
    pub fn get_errors(self) -> Result<Vec<E>, Error> {
        match self {
            Validation::Valid(_) => Err(Error::no_such_element("get_errors", "Valid")),
            Validation::Invalid(errors) => Ok(errors),
        }
    }

    /// Borrow the errors; a `Valid` has none
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Validation::Valid(_) => &[],
            Validation::Invalid(errors) => errors,
        }
    }

    /// Extract the valid value.
    ///
    /// # Panics
    ///
    /// Panics if the validation is `Invalid`.
    #[inline]
    pub fn unwrap_valid(self) -> T {
        match self {
            Validation::Valid(value) => value,
            Validation::Invalid(_) => {
                panic!("called `Validation::unwrap_valid()` on an `Invalid` value")
            }
        }
    }

    /// Extract the errors.
    ///
    /// # Panics
    ///
    /// Panics if the validation is `Valid`.
    #[inline]
    pub fn unwrap_errors(self) -> Vec<E> {
        match self {
            Validation::Valid(_) => {
                panic!("called `Validation::unwrap_errors()` on a `Valid` value")
            }
            Validation::Invalid(errors) => errors,
        }
    }

    /// Transform the valid value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(f(value)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transform the whole error list if present
    ///
    /// # Examples
    ///
    /// ```
    /// use railyard::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid(vec!["a", "bb"]);
    /// let lengths = v.map_error(|errors| errors.into_iter().map(str::len).collect());
    /// assert_eq!(lengths, Validation::invalid(vec![1, 2]));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Validation<E2, T>
    where
        F: FnOnce(Vec<E>) -> Vec<E2>,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(value),
            Validation::Invalid(errors) => Validation::Invalid(f(errors)),
        }
    }

    /// Transform whichever side is present; only the matching mapper is called
    #[inline]
    pub fn bimap<E2, U, F, G>(self, mapper_invalid: F, mapper_valid: G) -> Validation<E2, U>
    where
        F: FnOnce(Vec<E>) -> Vec<E2>,
        G: FnOnce(T) -> U,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(mapper_valid(value)),
            Validation::Invalid(errors) => Validation::Invalid(mapper_invalid(errors)),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function is only called if the current validation is valid.
    #[doc(alias = "flat_map")]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        match self {
            Validation::Valid(value) => f(value),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Recover from an `Invalid` by producing a new validation from its errors
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Validation<E2, T>
    where
        F: FnOnce(Vec<E>) -> Validation<E2, T>,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(value),
            Validation::Invalid(errors) => f(errors),
        }
    }

    /// Fold both variants into a single value
    #[inline]
    pub fn fold<R, F, G>(self, mapper_invalid: F, mapper_valid: G) -> R
    where
        F: FnOnce(Vec<E>) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Validation::Valid(value) => mapper_valid(value),
            Validation::Invalid(errors) => mapper_invalid(errors),
        }
    }

    /// Keep a `Valid` only if it satisfies `predicate`
    ///
    /// An `Invalid` is always kept; a `Valid` that fails the predicate becomes `None`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Validation::Valid(value) => predicate(&value).then_some(Validation::Valid(value)),
            invalid => Some(invalid),
        }
    }

    /// Run `action` on the valid value, if any
    #[inline]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Validation::Valid(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` on the errors, if any
    #[inline]
    pub fn peek_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&[E]),
    {
        if let Validation::Invalid(errors) = &self {
            action(errors);
        }
        self
    }

    /// Run `action_invalid` or `action_valid` depending on the variant
    #[inline]
    pub fn peek_both<F, G>(self, action_invalid: F, action_valid: G) -> Self
    where
        F: FnOnce(&[E]),
        G: FnOnce(&T),
    {
        match &self {
            Validation::Valid(value) => action_valid(value),
            Validation::Invalid(errors) => action_invalid(errors),
        }
        self
    }

    /// Merge this validation with `other`, accumulating errors.
    ///
    /// | self        | other       | result                       |
    /// |-------------|-------------|------------------------------|
    /// | `Valid _`   | `Valid b`   | `Valid(b)`                   |
    /// | `Valid _`   | `Invalid e` | `Invalid(e)`                 |
    /// | `Invalid e` | `Valid _`   | `Invalid(e)`                 |
    /// | `Invalid a` | `Invalid b` | `Invalid(a ++ b)`            |
    ///
    /// When both are valid the value of `other` wins. Errors keep their order,
    /// those of `self` first, duplicates included.
    ///
    /// # Examples
    ///
    /// ```
    /// use railyard::Validation;
    ///
    /// let v1 = Validation::<&str, i32>::valid(1);
    /// let v2 = Validation::<&str, i32>::valid(2);
    /// assert_eq!(v1.ap(v2), Validation::valid(2));
    ///
    /// let e1 = Validation::<&str, i32>::invalid(vec!["e1"]);
    /// let e2 = Validation::<&str, i32>::invalid(vec!["e2", "e1"]);
    /// assert_eq!(e1.ap(e2), Validation::invalid(vec!["e1", "e2", "e1"]));
    /// ```
    pub fn ap(self, other: Self) -> Self {
        match (self, other) {
            (Validation::Valid(_), Validation::Valid(value)) => Validation::Valid(value),
            (Validation::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
            (Validation::Invalid(errors), Validation::Valid(_)) => Validation::Invalid(errors),
            (Validation::Invalid(mut errors), Validation::Invalid(more)) => {
                errors.extend(more);
                Validation::Invalid(errors)
            }
        }
    }

    /// Fold every validation with [`ap`](Validation::ap), starting from the empty `Valid`.
    ///
    /// Every element is inspected, so the result carries the errors of *all*
    /// `Invalid` arguments in order. If all are valid the last value wins; an
    /// empty sequence yields `Valid(T::default())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railyard::Validation;
    ///
    /// let result = Validation::combine([
    ///     Validation::<&str, i32>::invalid(vec!["problem1"]),
    ///     Validation::valid(5),
    ///     Validation::invalid(vec!["problem2"]),
    /// ]);
    /// assert_eq!(result, Validation::invalid(vec!["problem1", "problem2"]));
    /// ```
    pub fn combine<I>(validations: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        T: Default,
    {
        let result = validations.into_iter().fold(Self::default(), Self::ap);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            errors = result.errors().len(),
            "folded validations with `combine`"
        );

        result
    }

    /// Like [`combine`](Validation::combine), but evaluates `suppliers` lazily and
    /// returns as soon as one of them yields an `Invalid`.
    ///
    /// Suppliers after the first `Invalid` are never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use railyard::Validation;
    ///
    /// let suppliers: Vec<Box<dyn FnOnce() -> Validation<&'static str, i32>>> = vec![
    ///     Box::new(|| Validation::valid(1)),
    ///     Box::new(|| Validation::invalid(vec!["bad"])),
    ///     Box::new(|| -> Validation<&'static str, i32> { unreachable!("skipped") }),
    /// ];
    /// assert_eq!(Validation::get_first_invalid(suppliers), Validation::invalid(vec!["bad"]));
    /// ```
    pub fn get_first_invalid<F, I>(suppliers: I) -> Self
    where
        F: FnOnce() -> Self,
        I: IntoIterator<Item = F>,
        T: Default,
    {
        let mut result = Self::default();
        for (_index, supplier) in suppliers.into_iter().enumerate() {
            result = result.ap(supplier());
            if result.is_invalid() {
                #[cfg(feature = "tracing")]
                tracing::trace!(index = _index, "stopped at first Invalid");
                break;
            }
        }
        result
    }

    /// Convert to [`Either`]; the whole error list becomes the left value.
    #[doc(alias = "to_either")]
    #[inline]
    pub fn into_either(self) -> Either<Vec<E>, T> {
        match self {
            Validation::Valid(value) => Either::Right(value),
            Validation::Invalid(errors) => Either::Left(errors),
        }
    }

    /// Build from an [`Either`] with a single left value, the inverse of
    /// [`Either::into_validation`].
    #[inline]
    pub fn from_either(either: Either<E, T>) -> Self {
        either.into_validation()
    }

    /// Convert to `Result`
    #[inline]
    pub fn into_result(self) -> Result<T, Vec<E>> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(errors) => Err(errors),
        }
    }

    /// Create from `Result`
    #[inline]
    pub fn from_result(result: Result<T, Vec<E>>) -> Self {
        match result {
            Ok(value) => Validation::Valid(value),
            Err(errors) => Validation::Invalid(errors),
        }
    }
}

impl<E, T: Default> Default for Validation<E, T> {
    /// The empty `Valid`: `Validation::Valid(T::default())`.
    fn default() -> Self {
        Validation::Valid(T::default())
    }
}

impl<E, T> From<Either<Vec<E>, T>> for Validation<E, T> {
    fn from(either: Either<Vec<E>, T>) -> Self {
        match either {
            Either::Left(errors) => Validation::Invalid(errors),
            Either::Right(value) => Validation::Valid(value),
        }
    }
}

impl<E, T> From<Validation<E, T>> for Either<Vec<E>, T> {
    fn from(validation: Validation<E, T>) -> Self {
        validation.into_either()
    }
}

/// Collect every valid value, or every error if any element is invalid.
///
/// # Examples
///
/// ```
/// use railyard::Validation;
///
/// let all: Validation<&str, Vec<i32>> =
///     vec![Validation::valid(1), Validation::valid(2)].into_iter().collect();
/// assert_eq!(all, Validation::valid(vec![1, 2]));
///
/// let some: Validation<&str, Vec<i32>> = vec![
///     Validation::invalid(vec!["a"]),
///     Validation::valid(2),
///     Validation::invalid(vec!["b"]),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(some, Validation::invalid(vec!["a", "b"]));
/// ```
impl<E, T> FromIterator<Validation<E, T>> for Validation<E, Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Validation<E, T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        let mut failed = false;

        for validation in iter {
            match validation {
                Validation::Valid(value) => values.push(value),
                Validation::Invalid(more) => {
                    failed = true;
                    errors.extend(more);
                }
            }
        }

        if failed {
            Validation::Invalid(errors)
        } else {
            Validation::Valid(values)
        }
    }
}

/// Validate a value using a predicate.
///
/// Returns `Valid(value)` if the predicate holds, otherwise an `Invalid` holding `error`.
///
/// # Examples
///
/// ```
/// use railyard::validation::validate;
/// use railyard::Validation;
///
/// assert_eq!(validate(7, |n: &i32| *n > 0, "not positive"), Validation::valid(7));
/// assert_eq!(validate(-1, |n: &i32| *n > 0, "not positive"), Validation::invalid(vec!["not positive"]));
/// ```
pub fn validate<E, T, P>(value: T, predicate: P, error: E) -> Validation<E, T>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&value) {
        Validation::Valid(value)
    } else {
        Validation::Invalid(vec![error])
    }
}

/// Validate a value with an error factory that can look at the rejected value.
pub fn validate_with<E, T, P, F>(value: T, predicate: P, error_fn: F) -> Validation<E, T>
where
    P: FnOnce(&T) -> bool,
    F: FnOnce(&T) -> E,
{
    if predicate(&value) {
        Validation::Valid(value)
    } else {
        Validation::Invalid(vec![error_fn(&value)])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn validation() -> impl Strategy<Value = Validation<u8, i32>> {
        prop_oneof![
            any::<i32>().prop_map(Validation::valid),
            prop::collection::vec(any::<u8>(), 0..4).prop_map(Validation::invalid),
        ]
    }

    proptest! {
        #[test]
        fn prop_ap_is_associative(a in validation(), b in validation(), c in validation()) {
            let left = a.clone().ap(b.clone()).ap(c.clone());
            let right = a.ap(b.ap(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_combine_collects_errors_in_order(vs in prop::collection::vec(validation(), 0..8)) {
            let expected: Vec<u8> = vs.iter().flat_map(|v| v.errors().to_vec()).collect();
            let any_invalid = vs.iter().any(Validation::is_invalid);
            let result = Validation::combine(vs);
            prop_assert_eq!(result.is_invalid(), any_invalid);
            prop_assert_eq!(result.errors(), expected.as_slice());
        }

        #[test]
        fn prop_either_roundtrip(v in validation()) {
            prop_assert_eq!(Validation::from(v.clone().into_either()), v);
        }
    }
}
