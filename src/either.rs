//! A right-biased disjoint union of a failure branch and a success branch.
//!
//! `Either<L, R>` holds exactly one value: a `Left(L)` (the alternate or failure
//! branch) or a `Right(R)` (the success branch). Every transformation consumes the
//! value and returns a new one; there are no in-place transitions between variants.
//!
//! # Right-Biased Convention
//!
//! `map`, `and_then`, `filter` and friends act on `Right` and pass `Left` through
//! untouched. Closures that only matter for the other branch are never called, so
//! a mapper for `Left` costs nothing when the value is a `Right`.
//!
//! # Merging
//!
//! Two eithers are merged with [`Either::ap`]; whole sequences are folded with
//! [`Either::combine`], or lazily with [`Either::combine_get_first_left`], which
//! stops evaluating suppliers once a `Left` shows up.
//!
//! ```rust
//! use railyard::Either;
//!
//! let merged = Either::combine(
//!     |_, l2| l2,
//!     |r1: i32, r2: i32| r1 + r2,
//!     [Either::<String, i32>::right(11), Either::right(7)],
//! );
//! assert_eq!(merged, Either::right(18));
//! ```

use crate::{Error, Validation};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// `Right` is the success branch. Accessing the wrong branch through
/// [`get`](Either::get) or [`get_left`](Either::get_left) yields
/// [`Error::NoSuchElement`] instead of a value.
///
/// # Example
///
/// ```rust
/// use railyard::Either;
///
/// let parsed: Either<String, u16> = "8080"
///     .parse::<u16>()
///     .map_err(|e| e.to_string())
///     .into();
///
/// let port = parsed
///     .filter_or_else(|p| *p >= 1024, |p| format!("port {p} is privileged"))
///     .fold(|err| err, |p| format!("listening on {p}"));
/// assert_eq!(port, "listening on 8080");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The alternate (failure) branch
    Left(L),
    /// The success branch
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a `Left` value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a `Right` value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Accessors ==========

    /// Returns the right value, or [`Error::NoSuchElement`] if this is a `Left`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::{Either, Error};
    ///
    /// assert_eq!(Either::<&str, i32>::right(3).get(), Ok(3));
    /// assert!(matches!(
    ///     Either::<&str, i32>::left("nope").get(),
    ///     Err(Error::NoSuchElement { .. })
    /// ));
    /// ```
    #[inline]
    pub fn get(self) -> Result<R, Error> {
        match self {
            Either::Left(_) => Err(Error::no_such_element("get", "Left")),
            Either::Right(r) => Ok(r),
        }
    }

    /// Returns the left value, or [`Error::NoSuchElement`] if this is a `Right`.
    #[inline]
    pub fn get_left(self) -> Result<L, Error> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(Error::no_such_element("get_left", "Right")),
        }
    }

    /// Returns the left value if present, consuming self.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    ///
    /// `Left` maps to `None`.
    #[doc(alias = "to_optional")]
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Extract the right value, panicking if this is a `Left`.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Either::Right(r) => r,
        }
    }

    /// Extract the left value, panicking if this is a `Right`.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Return the right value, or `other` if this is a `Left`.
    #[inline]
    pub fn get_or_else(self, other: R) -> R {
        match self {
            Either::Left(_) => other,
            Either::Right(r) => r,
        }
    }

    /// Return the right value, or the error produced by `supplier` if this is a `Left`.
    ///
    /// The supplier is only called for a `Left`, and its value is handed back verbatim.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Either;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Missing;
    ///
    /// let left: Either<&str, i32> = Either::left("gone");
    /// assert_eq!(left.get_or_else_throw(|| Missing), Err(Missing));
    /// ```
    #[inline]
    pub fn get_or_else_throw<X, F>(self, supplier: F) -> Result<R, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Either::Left(_) => Err(supplier()),
            Either::Right(r) => Ok(r),
        }
    }

    // ========== Transformations ==========

    /// Transform the right value; a `Left` passes through without calling `f`.
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform the left value; a `Right` passes through without calling `f`.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform whichever side is present. Only the matching mapper is called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// assert_eq!(left.bimap(|x| x + 1, |s| s.len()), Either::left(2));
    /// ```
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, mapper_left: F, mapper_right: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(mapper_left(l)),
            Either::Right(r) => Either::Right(mapper_right(r)),
        }
    }

    /// Chain a computation on the right value.
    ///
    /// The returned `Either` is used as-is; a `Left` propagates unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Either;
    ///
    /// let half = |x: i32| {
    ///     if x % 2 == 0 { Either::right(x / 2) } else { Either::left(format!("{x} is odd")) }
    /// };
    /// assert_eq!(Either::right(8).and_then(half), Either::right(4));
    /// assert_eq!(Either::right(3).and_then(half), Either::left("3 is odd".to_string()));
    /// ```
    #[doc(alias = "flat_map")]
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Recover from a `Left` by producing a new `Either`; a `Right` passes through.
    #[inline]
    pub fn or_else<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Swap `Left` and `Right`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Fold both variants into a single value.
    #[inline]
    pub fn fold<T, F, G>(self, mapper_left: F, mapper_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => mapper_left(l),
            Either::Right(r) => mapper_right(r),
        }
    }

    /// Run `action` on the right value, if any, and return self.
    #[inline]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self {
            action(r);
        }
        self
    }

    /// Run `action` on the left value, if any, and return self.
    #[inline]
    pub fn peek_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self {
            action(l);
        }
        self
    }

    // ========== Filtering ==========

    /// Keep a `Right` only if it satisfies `predicate`.
    ///
    /// A `Left` is always kept (`Some(self)`); a `Right` that fails the predicate
    /// becomes `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Either;
    ///
    /// let even = |x: &i32| x % 2 == 0;
    /// assert_eq!(Either::<&str, i32>::right(4).filter(even), Some(Either::right(4)));
    /// assert_eq!(Either::<&str, i32>::right(5).filter(even), None);
    /// assert_eq!(Either::<&str, i32>::left("e").filter(even), Some(Either::left("e")));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<Self>
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Either::Right(r) => predicate(&r).then_some(Either::Right(r)),
            left => Some(left),
        }
    }

    /// Turn a `Right` that fails `predicate` into a `Left` built by `zero`.
    ///
    /// `zero` is only called when a `Right` is present and rejected.
    #[inline]
    pub fn filter_or_else<P, Z>(self, predicate: P, zero: Z) -> Self
    where
        P: FnOnce(&R) -> bool,
        Z: FnOnce(R) -> L,
    {
        match self {
            Either::Right(r) => {
                if predicate(&r) {
                    Either::Right(r)
                } else {
                    Either::Left(zero(r))
                }
            }
            left => left,
        }
    }

    // ========== Merging ==========

    /// Merge this value with `other`.
    ///
    /// | self      | other     | result                            |
    /// |-----------|-----------|-----------------------------------|
    /// | `Right a` | `Right b` | `Right(mapper_right(a, b))`       |
    /// | `Right _` | `Left b`  | `Left(b)`                         |
    /// | `Left a`  | `Right _` | `Left(a)`                         |
    /// | `Left a`  | `Left b`  | `Left(mapper_left(a, b))`         |
    ///
    /// A mapper is only called when both sides hold the matching variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Either;
    ///
    /// let a: Either<String, i32> = Either::left("a".into());
    /// let b: Either<String, i32> = Either::left("b".into());
    /// assert_eq!(
    ///     a.ap(b, |x, y| format!("{x}{y}"), |x, y| x + y),
    ///     Either::left("ab".to_string())
    /// );
    /// ```
    pub fn ap<FL, FR>(self, other: Self, mapper_left: FL, mapper_right: FR) -> Self
    where
        FL: FnOnce(L, L) -> L,
        FR: FnOnce(R, R) -> R,
    {
        match (self, other) {
            (Either::Right(a), Either::Right(b)) => Either::Right(mapper_right(a, b)),
            (Either::Right(_), Either::Left(b)) => Either::Left(b),
            (Either::Left(a), Either::Right(_)) => Either::Left(a),
            (Either::Left(a), Either::Left(b)) => Either::Left(mapper_left(a, b)),
        }
    }

    /// Fold every element of `eithers` with [`ap`](Either::ap), left to right.
    ///
    /// Fewer than two elements yield the empty `Right` (`Right(R::default())`)
    /// without calling a mapper, even when the only element is a `Left`. All
    /// elements are evaluated, so every `Left` contributes to `mapper_left`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Either;
    ///
    /// let result = Either::combine(
    ///     |_, l2| l2,
    ///     |_, r2: i32| r2,
    ///     [Either::right(10), Either::left("A"), Either::left("B")],
    /// );
    /// assert_eq!(result, Either::left("B"));
    /// ```
    pub fn combine<FL, FR, I>(mapper_left: FL, mapper_right: FR, eithers: I) -> Self
    where
        FL: Fn(L, L) -> L,
        FR: Fn(R, R) -> R,
        I: IntoIterator<Item = Self>,
        R: Default,
    {
        let mut eithers = eithers.into_iter();
        let (Some(first), Some(second)) = (eithers.next(), eithers.next()) else {
            return Either::default();
        };
        let result = eithers.fold(
            first.ap(second, &mapper_left, &mapper_right),
            |acc, next| acc.ap(next, &mapper_left, &mapper_right),
        );

        #[cfg(feature = "tracing")]
        tracing::trace!(is_right = result.is_right(), "folded eithers with `combine`");

        result
    }

    /// Evaluate `suppliers` left to right, merging `Right` values with `mapper_right`
    /// and stopping at the first `Left`.
    ///
    /// Suppliers after the first `Left` are never invoked. An empty sequence
    /// yields the empty `Right` (`Right(R::default())`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Either;
    ///
    /// let suppliers: Vec<Box<dyn FnOnce() -> Either<&'static str, i32>>> = vec![
    ///     Box::new(|| Either::right(1)),
    ///     Box::new(|| Either::left("stop")),
    ///     Box::new(|| -> Either<&'static str, i32> { unreachable!("never evaluated") }),
    /// ];
    /// assert_eq!(
    ///     Either::combine_get_first_left(|a, b| a + b, suppliers),
    ///     Either::left("stop")
    /// );
    /// ```
    pub fn combine_get_first_left<FR, F, I>(mapper_right: FR, suppliers: I) -> Self
    where
        FR: Fn(R, R) -> R,
        F: FnOnce() -> Self,
        I: IntoIterator<Item = F>,
        R: Default,
    {
        let mut suppliers = suppliers.into_iter();
        let mut result = match suppliers.next() {
            Some(supplier) => supplier(),
            None => return Either::default(),
        };

        for (_index, supplier) in suppliers.enumerate() {
            result = match result {
                Either::Left(l) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(index = _index, "stopped at first Left");
                    return Either::Left(l);
                }
                Either::Right(acc) => match supplier() {
                    Either::Right(next) => Either::Right(mapper_right(acc, next)),
                    Either::Left(l) => Either::Left(l),
                },
            };
        }
        result
    }

    // ========== Conversions ==========

    /// Convert to `Result` (`Right` becomes `Ok`, `Left` becomes `Err`).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from `Result` (`Ok` becomes `Right`, `Err` becomes `Left`).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Convert to [`Validation`]: `Right` becomes `Valid`, and the single left value
    /// becomes a one-element error list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::{Either, Validation};
    ///
    /// let left: Either<&str, i32> = Either::left("bad");
    /// assert_eq!(left.into_validation(), Validation::invalid(vec!["bad"]));
    /// ```
    #[doc(alias = "to_validation")]
    #[inline]
    pub fn into_validation(self) -> Validation<L, R> {
        match self {
            Either::Left(l) => Validation::Invalid(vec![l]),
            Either::Right(r) => Validation::Valid(r),
        }
    }

    /// Iterate over the right value, if present.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.as_ref().into_right().into_iter()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested `Either`.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.and_then(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> Default for Either<L, R>
where
    R: Default,
{
    /// The empty `Right`: `Either::Right(R::default())`.
    fn default() -> Self {
        Either::Right(R::default())
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_right().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn last<T>(_: T, b: T) -> T {
        b
    }

    #[test]
    fn test_accessors_on_matching_variant() {
        assert_eq!(Either::<&str, i32>::right(1).get(), Ok(1));
        assert_eq!(Either::<&str, i32>::left("l").get_left(), Ok("l"));
    }

    #[test]
    fn test_accessors_on_wrong_variant() {
        assert_eq!(
            Either::<&str, i32>::left("l").get(),
            Err(Error::no_such_element("get", "Left"))
        );
        assert_eq!(
            Either::<&str, i32>::right(1).get_left(),
            Err(Error::no_such_element("get_left", "Right"))
        );
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
    fn test_unwrap_right_panics() {
        Either::<i32, &str>::left(42).unwrap_right();
    }

    #[test]
    fn test_map_skips_left() {
        let called = Cell::new(false);
        let left: Either<Option<i32>, i32> = Either::left(None);
        let mapped = left.map(|x| {
            called.set(true);
            x + 1
        });
        assert_eq!(mapped, Either::left(None));
        assert!(!called.get());
    }

    #[test]
    fn test_map_left_skips_right() {
        let e: Either<i32, &str> = Either::right("hello");
        assert_eq!(e.map_left(|x| x * 2), Either::right("hello"));
    }

    #[test]
    fn test_bimap_only_calls_matching_mapper() {
        let e: Either<i32, &str> = Either::right("hello");
        let result = e.bimap(|_| -> i32 { unreachable!("left mapper on a Right") }, |s| s.len());
        assert_eq!(result, Either::right(5));
    }

    #[test]
    fn test_and_then_returns_inner_either() {
        let e: Either<&str, i32> = Either::right(1);
        assert_eq!(e.and_then(|_| Either::<&str, i32>::left("inner")), Either::left("inner"));

        let e: Either<&str, i32> = Either::left("outer");
        assert_eq!(e.and_then(|x| Either::right(x + 1)), Either::left("outer"));
    }

    #[test]
    fn test_ap_truth_table() {
        type E = Either<&'static str, i32>;
        let concat = |_: &'static str, b: &'static str| b;
        let sum = |a: i32, b: i32| a + b;

        assert_eq!(E::right(2).ap(E::right(3), concat, sum), E::right(5));
        assert_eq!(E::right(2).ap(E::left("o"), concat, sum), E::left("o"));
        assert_eq!(E::left("t").ap(E::right(3), concat, sum), E::left("t"));
        assert_eq!(E::left("t").ap(E::left("o"), concat, sum), E::left("o"));
    }

    #[test]
    fn test_ap_does_not_call_unused_mapper() {
        type E = Either<&'static str, i32>;
        let result = E::right(1).ap(
            E::right(2),
            |_, _| unreachable!("left mapper between two Rights"),
            |a, b| a * b,
        );
        assert_eq!(result, E::right(2));
    }

    #[test]
    fn test_combine_scenarios() {
        assert_eq!(
            Either::combine(last, last, [Either::<&str, i32>::right(11), Either::right(7)]),
            Either::right(7)
        );
        assert_eq!(
            Either::combine(last, last, [Either::right(13), Either::left("A")]),
            Either::left("A")
        );
        assert_eq!(
            Either::combine(
                last,
                last,
                [Either::right(10), Either::left("A"), Either::left("B")]
            ),
            Either::left("B")
        );
    }

    #[test]
    fn test_combine_empty_and_single() {
        let empty: Vec<Either<&'static str, i32>> = vec![];
        let never = |_: i32, _: i32| -> i32 { unreachable!("no merge for < 2 elements") };
        let never_left = |_: &'static str, _: &'static str| -> &'static str { unreachable!() };

        assert_eq!(Either::combine(never_left, never, empty), Either::right(0));
        assert_eq!(
            Either::combine(never_left, never, [Either::left("only")]),
            Either::right(0)
        );
        assert_eq!(
            Either::combine(never_left, never, [Either::right(9)]),
            Either::right(0)
        );
    }

    #[test]
    fn test_combine_get_first_left_stops_early() {
        let invoked = Cell::new(0);
        let supplier = |e: Either<&'static str, i32>| {
            let invoked = &invoked;
            move || {
                invoked.set(invoked.get() + 1);
                e
            }
        };

        let result = Either::combine_get_first_left(
            |a, b| a + b,
            [
                supplier(Either::right(1)),
                supplier(Either::left("B")),
                supplier(Either::left("C")),
            ],
        );

        assert_eq!(result, Either::left("B"));
        assert_eq!(invoked.get(), 2);
    }

    #[test]
    fn test_combine_get_first_left_merges_rights() {
        let suppliers: [fn() -> Either<&'static str, i32>; 2] =
            [|| Either::right(1), || Either::right(2)];
        assert_eq!(
            Either::combine_get_first_left(|a, b| a + b, suppliers),
            Either::right(3)
        );

        let none: Vec<fn() -> Either<&'static str, i32>> = vec![];
        assert_eq!(Either::combine_get_first_left(|a, b| a + b, none), Either::right(0));
    }

    #[test]
    fn test_filter_or_else_only_builds_zero_when_rejected() {
        let e: Either<String, i32> = Either::right(3);
        assert_eq!(
            e.filter_or_else(|x| *x > 5, |x| format!("{x} too small")),
            Either::left("3 too small".to_string())
        );

        let e: Either<String, i32> = Either::right(9);
        assert_eq!(
            e.filter_or_else(|x| *x > 5, |_| unreachable!("accepted value")),
            Either::right(9)
        );

        let e: Either<String, i32> = Either::left("already".into());
        assert_eq!(
            e.filter_or_else(|_| unreachable!(), |_| unreachable!()),
            Either::left("already".to_string())
        );
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(Either::<&str, i32>::left("x").get_or_else(7), 7);
        assert_eq!(Either::<&str, i32>::right(1).get_or_else(7), 1);
        assert_eq!(
            Either::<&str, i32>::right(1).get_or_else_throw(|| "unused"),
            Ok(1)
        );
    }

    #[test]
    fn test_peek() {
        let seen = Cell::new(0);
        let e: Either<&str, i32> = Either::right(4)
            .peek(|r| seen.set(*r))
            .peek_left(|_| unreachable!());
        assert_eq!(e, Either::right(4));
        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn test_into_validation() {
        let right: Either<&str, i32> = Either::right(42);
        assert_eq!(right.into_validation(), Validation::Valid(42));

        let left: Either<&str, i32> = Either::left("error");
        assert_eq!(left.into_validation(), Validation::Invalid(vec!["error"]));
    }

    #[test]
    fn test_flatten() {
        let nested: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
        assert_eq!(nested.flatten(), Either::left("inner"));
    }

    #[test]
    fn test_default_is_empty_right() {
        assert_eq!(Either::<&str, Vec<i32>>::default(), Either::right(vec![]));
    }

    #[test]
    fn test_result_roundtrip() {
        let original: Either<&str, i32> = Either::right(42);
        let result: Result<i32, &str> = original.into();
        assert_eq!(Either::from(result), original);
    }

    #[test]
    fn test_iter() {
        let right: Either<&str, i32> = Either::right(42);
        assert_eq!(right.iter().collect::<Vec<_>>(), vec![&42]);
        assert_eq!((&right).into_iter().count(), 1);
        assert_eq!(Either::<&str, i32>::left("e").into_iter().count(), 0);
    }
}
