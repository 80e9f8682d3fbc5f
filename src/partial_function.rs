//! Functions defined over only part of their input type
//!
//! A [`PartialFunction`] pairs an [`apply`](PartialFunction::apply) with a domain
//! test, [`is_defined_at`](PartialFunction::is_defined_at). The two are not tied
//! together at runtime: `apply` assumes the caller already checked the domain,
//! and what it does outside the domain is up to the implementation (it may
//! panic or return a meaningless value). Use
//! [`apply_or_else`](PartialFunction::apply_or_else),
//! [`lift`](PartialFunction::lift) or
//! [`apply_either`](PartialFunction::apply_either) for single-call safe access.
//!
//! # Example
//!
//! ```rust
//! use railyard::partial_function::{self, PartialFunction};
//!
//! let even_label = partial_function::of(|i: &i32| i % 2 == 0, |i: i32| format!("even {i}"));
//! let odd_label = partial_function::of(|i: &i32| i % 2 != 0, |i: i32| format!("odd {i}"));
//!
//! assert!(!even_label.is_defined_at(&3));
//! assert_eq!(even_label.apply_or_else(3, |i| format!("? {i}")), "? 3");
//!
//! let label = even_label.or_else(odd_label);
//! assert_eq!(label.apply(3), "odd 3");
//! assert_eq!(label.apply(4), "even 4");
//! ```

use crate::Either;

/// A unary function with an explicit domain.
///
/// Implementors must keep `is_defined_at` free of side effects and safe to call on
/// any input, including those that `apply` would reject.
pub trait PartialFunction<T> {
    /// The result type.
    type Output;

    /// Apply the function.
    ///
    /// The caller is responsible for checking
    /// [`is_defined_at`](PartialFunction::is_defined_at) first; the result for an
    /// input outside the domain is unspecified.
    fn apply(&self, value: T) -> Self::Output;

    /// Whether `value` belongs to the domain.
    fn is_defined_at(&self, value: &T) -> bool;

    /// Apply the function inside its domain, or `default` outside of it.
    ///
    /// `default` is only called for inputs outside the domain.
    fn apply_or_else<D>(&self, value: T, default: D) -> Self::Output
    where
        D: FnOnce(T) -> Self::Output,
    {
        if self.is_defined_at(&value) {
            self.apply(value)
        } else {
            default(value)
        }
    }

    /// Apply the function inside its domain; hand the input back as `Left` outside of it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::Either;
    /// use railyard::partial_function::{self, PartialFunction};
    ///
    /// let sqrt = partial_function::of(|x: &f64| *x >= 0.0, |x: f64| x.sqrt());
    /// assert_eq!(sqrt.apply_either(9.0), Either::right(3.0));
    /// assert_eq!(sqrt.apply_either(-1.0), Either::left(-1.0));
    /// ```
    fn apply_either(&self, value: T) -> Either<T, Self::Output> {
        if self.is_defined_at(&value) {
            Either::Right(self.apply(value))
        } else {
            Either::Left(value)
        }
    }

    /// Apply the function to every input inside the domain, skipping the rest.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railyard::partial_function::{self, PartialFunction};
    ///
    /// let halve = partial_function::of(|x: &u32| x % 2 == 0, |x: u32| x / 2);
    /// assert_eq!(halve.collect_defined(1..=6), vec![1, 2, 3]);
    /// ```
    fn collect_defined<I>(&self, values: I) -> Vec<Self::Output>
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .filter(|value| self.is_defined_at(value))
            .map(|value| self.apply(value))
            .collect()
    }

    /// Turn this partial function into a total one returning `None` outside the domain.
    fn lift(self) -> impl Fn(T) -> Option<Self::Output>
    where
        Self: Sized,
    {
        move |value| {
            if self.is_defined_at(&value) {
                Some(self.apply(value))
            } else {
                None
            }
        }
    }

    /// Fall back to `other` outside this function's domain.
    ///
    /// The combined domain is the union of both. Passing `None::<P>` leaves the
    /// domain unchanged.
    fn or_else<P>(self, other: P) -> OrElse<Self, P>
    where
        Self: Sized,
        P: PartialFunction<T, Output = Self::Output>,
    {
        OrElse {
            first: self,
            second: other,
        }
    }

    /// Post-process results with a total function; the domain is unchanged.
    fn and_then<G, Z>(self, after: G) -> AndThen<Self, G>
    where
        Self: Sized,
        G: Fn(Self::Output) -> Z,
    {
        AndThen { inner: self, after }
    }

    /// Post-process results with another partial function.
    ///
    /// An input is in the combined domain when it is in this domain and the
    /// intermediate result is in the domain of `after`. Testing the domain
    /// therefore applies this function, which requires `T: Clone`.
    fn and_then_partial<P>(self, after: P) -> AndThenPartial<Self, P>
    where
        Self: Sized,
        P: PartialFunction<Self::Output>,
    {
        AndThenPartial { inner: self, after }
    }

    /// Pre-process inputs with a total function `before`.
    ///
    /// `v` is in the combined domain when `before(v)` is in this domain.
    fn compose<V, B>(self, before: B) -> Compose<Self, B>
    where
        Self: Sized,
        B: Fn(V) -> T,
    {
        Compose { outer: self, before }
    }

    /// Pre-process inputs with another partial function `before`.
    ///
    /// The domain of `before` is tested first, so `before.apply` is never called
    /// on an input outside its own domain.
    fn compose_partial<V, B>(self, before: B) -> ComposePartial<Self, B>
    where
        Self: Sized,
        B: PartialFunction<V, Output = T>,
    {
        ComposePartial { outer: self, before }
    }
}

// ========== Constructors ==========

/// A partial function built from a domain predicate and a mapper.
///
/// Created by [`of`].
#[derive(Clone, Copy, Debug)]
pub struct Partial<P, M> {
    predicate: P,
    mapper: M,
}

/// A partial function defined everywhere.
///
/// Created by [`total`].
#[derive(Clone, Copy, Debug)]
pub struct Total<M>(M);

/// The identity partial function, defined everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

/// Build a partial function whose domain is `predicate` and whose body is `mapper`.
///
/// # Example
///
/// ```rust
/// use railyard::partial_function::{self, PartialFunction};
///
/// let pf = partial_function::of(
///     |i: &Option<i32>| matches!(i, Some(v) if v % 2 == 0),
///     |i: Option<i32>| i.map_or_else(String::new, |v| v.to_string()),
/// );
/// assert_eq!(pf.apply_or_else(Some(10), |_| "X".to_string()), "10");
/// assert_eq!(pf.apply_or_else(None, |_| String::new()), "");
/// ```
pub fn of<T, R, P, M>(predicate: P, mapper: M) -> Partial<P, M>
where
    P: Fn(&T) -> bool,
    M: Fn(T) -> R,
{
    Partial { predicate, mapper }
}

/// Build a partial function that is defined for every input.
pub fn total<T, R, M>(mapper: M) -> Total<M>
where
    M: Fn(T) -> R,
{
    Total(mapper)
}

/// The identity function as a partial function.
pub fn identity() -> Identity {
    Identity
}

impl<T, R, P, M> PartialFunction<T> for Partial<P, M>
where
    P: Fn(&T) -> bool,
    M: Fn(T) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, value: T) -> R {
        (self.mapper)(value)
    }

    #[inline]
    fn is_defined_at(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T, R, M> PartialFunction<T> for Total<M>
where
    M: Fn(T) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, value: T) -> R {
        (self.0)(value)
    }

    #[inline]
    fn is_defined_at(&self, _: &T) -> bool {
        true
    }
}

impl<T> PartialFunction<T> for Identity {
    type Output = T;

    #[inline]
    fn apply(&self, value: T) -> T {
        value
    }

    #[inline]
    fn is_defined_at(&self, _: &T) -> bool {
        true
    }
}

/// `None` is the partial function with an empty domain.
///
/// # Panics
///
/// `apply` on `None` panics; no input is in its domain.
impl<T, P> PartialFunction<T> for Option<P>
where
    P: PartialFunction<T>,
{
    type Output = P::Output;

    fn apply(&self, value: T) -> P::Output {
        match self {
            Some(pf) => pf.apply(value),
            None => panic!("applied an absent partial function"),
        }
    }

    fn is_defined_at(&self, value: &T) -> bool {
        self.as_ref().is_some_and(|pf| pf.is_defined_at(value))
    }
}

impl<T, P> PartialFunction<T> for &P
where
    P: PartialFunction<T> + ?Sized,
{
    type Output = P::Output;

    #[inline]
    fn apply(&self, value: T) -> P::Output {
        (**self).apply(value)
    }

    #[inline]
    fn is_defined_at(&self, value: &T) -> bool {
        (**self).is_defined_at(value)
    }
}

// ========== Combinators ==========

/// Union of two partial functions. Created by [`PartialFunction::or_else`].
#[derive(Clone, Copy, Debug)]
pub struct OrElse<P, Q> {
    first: P,
    second: Q,
}

impl<T, P, Q> PartialFunction<T> for OrElse<P, Q>
where
    P: PartialFunction<T>,
    Q: PartialFunction<T, Output = P::Output>,
{
    type Output = P::Output;

    fn apply(&self, value: T) -> P::Output {
        if self.first.is_defined_at(&value) {
            self.first.apply(value)
        } else {
            self.second.apply(value)
        }
    }

    fn is_defined_at(&self, value: &T) -> bool {
        self.first.is_defined_at(value) || self.second.is_defined_at(value)
    }
}

/// A partial function followed by a total one. Created by [`PartialFunction::and_then`].
#[derive(Clone, Copy, Debug)]
pub struct AndThen<P, G> {
    inner: P,
    after: G,
}

impl<T, P, G, Z> PartialFunction<T> for AndThen<P, G>
where
    P: PartialFunction<T>,
    G: Fn(P::Output) -> Z,
{
    type Output = Z;

    fn apply(&self, value: T) -> Z {
        (self.after)(self.inner.apply(value))
    }

    fn is_defined_at(&self, value: &T) -> bool {
        self.inner.is_defined_at(value)
    }
}

/// A partial function followed by another one.
/// Created by [`PartialFunction::and_then_partial`].
#[derive(Clone, Copy, Debug)]
pub struct AndThenPartial<P, Q> {
    inner: P,
    after: Q,
}

impl<T, P, Q> PartialFunction<T> for AndThenPartial<P, Q>
where
    T: Clone,
    P: PartialFunction<T>,
    Q: PartialFunction<P::Output>,
{
    type Output = Q::Output;

    fn apply(&self, value: T) -> Q::Output {
        self.after.apply(self.inner.apply(value))
    }

    fn is_defined_at(&self, value: &T) -> bool {
        self.inner.is_defined_at(value)
            && self.after.is_defined_at(&self.inner.apply(value.clone()))
    }
}

/// A total function followed by a partial one. Created by [`PartialFunction::compose`].
#[derive(Clone, Copy, Debug)]
pub struct Compose<P, B> {
    outer: P,
    before: B,
}

impl<V, T, P, B> PartialFunction<V> for Compose<P, B>
where
    V: Clone,
    B: Fn(V) -> T,
    P: PartialFunction<T>,
{
    type Output = P::Output;

    fn apply(&self, value: V) -> P::Output {
        self.outer.apply((self.before)(value))
    }

    fn is_defined_at(&self, value: &V) -> bool {
        self.outer.is_defined_at(&(self.before)(value.clone()))
    }
}

/// A partial function followed by another one, built from the outer side.
/// Created by [`PartialFunction::compose_partial`].
#[derive(Clone, Copy, Debug)]
pub struct ComposePartial<P, B> {
    outer: P,
    before: B,
}

impl<V, P, B> PartialFunction<V> for ComposePartial<P, B>
where
    V: Clone,
    B: PartialFunction<V>,
    P: PartialFunction<B::Output>,
{
    type Output = P::Output;

    fn apply(&self, value: V) -> P::Output {
        self.outer.apply(self.before.apply(value))
    }

    fn is_defined_at(&self, value: &V) -> bool {
        self.before.is_defined_at(value)
            && self.outer.is_defined_at(&self.before.apply(value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn even_to_string() -> impl PartialFunction<i32, Output = String> + Copy {
        of(|i: &i32| i % 2 == 0, |i: i32| i.to_string())
    }

    #[test]
    fn test_of_domain_and_apply() {
        let pf = even_to_string();
        assert!(pf.is_defined_at(&10));
        assert!(!pf.is_defined_at(&11));
        assert_eq!(pf.apply(10), "10");
    }

    #[test]
    fn test_apply_or_else_skips_default_in_domain() {
        let pf = even_to_string();
        assert_eq!(pf.apply_or_else(10, |_| unreachable!("in domain")), "10");
        assert_eq!(pf.apply_or_else(11, |i| format!("odd {i}")), "odd 11");
    }

    #[test]
    fn test_lift() {
        let lifted = even_to_string().lift();
        assert_eq!(lifted(4), Some("4".to_string()));
        assert_eq!(lifted(5), None);
    }

    #[test]
    fn test_total_and_identity() {
        let double = total(|x: i32| x * 2);
        assert!(double.is_defined_at(&i32::MIN));
        assert_eq!(double.apply(21), 42);

        let id = identity();
        assert!(PartialFunction::<&str>::is_defined_at(&id, &"anything"));
        assert_eq!(id.apply("same"), "same");
    }

    #[test]
    fn test_or_else_union() {
        let negative = of(|i: &i32| *i < 0, |_: i32| "negative".to_string());
        let pf = even_to_string().or_else(negative);

        assert!(pf.is_defined_at(&2));
        assert!(pf.is_defined_at(&-3));
        assert!(!pf.is_defined_at(&3));
        assert_eq!(pf.apply(-4), "-4");
        assert_eq!(pf.apply(-3), "negative");
    }

    #[test]
    fn test_or_else_with_none_keeps_domain() {
        let pf = even_to_string().or_else(None::<Partial<fn(&i32) -> bool, fn(i32) -> String>>);
        assert!(pf.is_defined_at(&2));
        assert!(!pf.is_defined_at(&3));
        assert_eq!(pf.apply_or_else(3, |_| "none".to_string()), "none");
    }

    #[test]
    #[should_panic(expected = "applied an absent partial function")]
    fn test_none_apply_panics() {
        None::<Identity>.apply(1);
    }

    #[test]
    fn test_and_then_keeps_domain() {
        let pf = even_to_string().and_then(|s: String| s.len());
        assert!(!pf.is_defined_at(&1));
        assert_eq!(pf.apply(1000), 4);
    }

    #[test]
    fn test_and_then_partial_restricts_domain() {
        let short = of(|s: &String| s.len() < 3, |s: String| format!("<{s}>"));
        let pf = even_to_string().and_then_partial(short);

        assert!(pf.is_defined_at(&42));
        assert!(!pf.is_defined_at(&1000));
        assert!(!pf.is_defined_at(&43));
        assert_eq!(pf.apply(42), "<42>");
    }

    #[test]
    fn test_compose_with_total_function() {
        let pf = even_to_string().compose(|s: &str| s.len() as i32);
        assert!(pf.is_defined_at(&"ab"));
        assert!(!pf.is_defined_at(&"abc"));
        assert_eq!(pf.apply("abcd"), "4");
    }

    #[test]
    fn test_compose_partial_checks_before_domain_first() {
        let applied = Cell::new(0);
        let parse = of(
            |s: &&str| s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty(),
            |s: &str| {
                applied.set(applied.get() + 1);
                s.parse::<i32>().unwrap_or_default()
            },
        );
        let pf = even_to_string().compose_partial(&parse);

        assert!(!pf.is_defined_at(&"x1"));
        assert_eq!(applied.get(), 0);

        assert!(pf.is_defined_at(&"12"));
        assert!(!pf.is_defined_at(&"13"));
        assert_eq!(pf.apply("12"), "12");
    }

    #[test]
    fn test_compose_identity_is_neutral() {
        let pf = even_to_string().compose_partial(identity());
        for i in -10..10 {
            assert_eq!(pf.is_defined_at(&i), even_to_string().is_defined_at(&i));
            if pf.is_defined_at(&i) {
                assert_eq!(pf.apply(i), even_to_string().apply(i));
            }
        }
    }

    #[test]
    fn test_apply_either_and_collect() {
        let pf = even_to_string();
        assert_eq!(pf.apply_either(2), Either::right("2".to_string()));
        assert_eq!(pf.apply_either(3), Either::left(3));
        assert_eq!(pf.collect_defined([1, 2, 3, 4]), vec!["2", "4"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_of_matches_predicate_and_mapper(x in any::<i64>(), modulus in 1i64..10) {
            let predicate = |v: &i64| v.rem_euclid(modulus) == 0;
            let mapper = |v: i64| v.wrapping_mul(3);
            let pf = of(predicate, mapper);

            prop_assert_eq!(pf.is_defined_at(&x), predicate(&x));
            if pf.is_defined_at(&x) {
                prop_assert_eq!(pf.apply(x), mapper(x));
            }
        }

        #[test]
        fn prop_lift_agrees_with_apply_or_else(x: i32) {
            let pf = of(|v: &i32| *v > 0, |v: i32| v / 2);
            let lifted = pf.lift();
            prop_assert_eq!(lifted(x), if x > 0 { Some(x / 2) } else { None });
        }
    }
}
