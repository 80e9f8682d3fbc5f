//! N-ary predicate traits and their logical combinators

/// AND combinator - both predicates must hold.
///
/// The second predicate is not evaluated when the first one fails.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

/// OR combinator - either predicate must hold.
///
/// The second predicate is not evaluated when the first one holds.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

macro_rules! nary_predicate {
    ($(#[$meta:meta])* $name:ident: $($arg:ident $T:ident),+) => {
        $(#[$meta])*
        pub trait $name<$($T: ?Sized),+> {
            /// Evaluate the predicate.
            fn test(&self, $($arg: &$T),+) -> bool;

            /// Combine with AND logic (short-circuiting).
            fn and<P>(self, other: P) -> And<Self, P>
            where
                Self: Sized,
                P: $name<$($T),+>,
            {
                And(self, other)
            }

            /// Combine with OR logic (short-circuiting).
            fn or<P>(self, other: P) -> Or<Self, P>
            where
                Self: Sized,
                P: $name<$($T),+>,
            {
                Or(self, other)
            }

            /// Invert the predicate.
            fn negate(self) -> Not<Self>
            where
                Self: Sized,
            {
                Not(self)
            }
        }

        impl<F, $($T: ?Sized),+> $name<$($T),+> for F
        where
            F: Fn($(&$T),+) -> bool,
        {
            #[inline]
            fn test(&self, $($arg: &$T),+) -> bool {
                self($($arg),+)
            }
        }

        impl<P1, P2, $($T: ?Sized),+> $name<$($T),+> for And<P1, P2>
        where
            P1: $name<$($T),+>,
            P2: $name<$($T),+>,
        {
            #[inline]
            fn test(&self, $($arg: &$T),+) -> bool {
                self.0.test($($arg),+) && self.1.test($($arg),+)
            }
        }

        impl<P1, P2, $($T: ?Sized),+> $name<$($T),+> for Or<P1, P2>
        where
            P1: $name<$($T),+>,
            P2: $name<$($T),+>,
        {
            #[inline]
            fn test(&self, $($arg: &$T),+) -> bool {
                self.0.test($($arg),+) || self.1.test($($arg),+)
            }
        }

        impl<P, $($T: ?Sized),+> $name<$($T),+> for Not<P>
        where
            P: $name<$($T),+>,
        {
            #[inline]
            fn test(&self, $($arg: &$T),+) -> bool {
                !self.0.test($($arg),+)
            }
        }
    };
}

nary_predicate!(
    /// A predicate over three arguments.
    TriPredicate: t1 T1, t2 T2, t3 T3
);
nary_predicate!(
    /// A predicate over four arguments.
    QuadPredicate: t1 T1, t2 T2, t3 T3, t4 T4
);
nary_predicate!(
    /// A predicate over five arguments.
    PentaPredicate: t1 T1, t2 T2, t3 T3, t4 T4, t5 T5
);
nary_predicate!(
    /// A predicate over six arguments.
    HexaPredicate: t1 T1, t2 T2, t3 T3, t4 T4, t5 T5, t6 T6
);
nary_predicate!(
    /// A predicate over seven arguments.
    HeptaPredicate: t1 T1, t2 T2, t3 T3, t4 T4, t5 T5, t6 T6, t7 T7
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn all_positive(a: &i32, b: &i32, c: &i32) -> bool {
        *a > 0 && *b > 0 && *c > 0
    }

    #[test]
    fn test_and() {
        let sum_small = |a: &i32, b: &i32, c: &i32| a + b + c < 10;
        let p = all_positive.and(sum_small);
        assert!(p.test(&1, &2, &3));
        assert!(!p.test(&1, &2, &30));
        assert!(!p.test(&-1, &2, &3));
    }

    #[test]
    fn test_or_and_negate() {
        let p = all_positive.negate().or(|a: &i32, _: &i32, _: &i32| *a == 100);
        assert!(p.test(&-1, &1, &1));
        assert!(p.test(&100, &1, &1));
        assert!(!p.test(&1, &1, &1));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Cell::new(0);
        let counted = |_: &i32, _: &i32, _: &i32| {
            calls.set(calls.get() + 1);
            true
        };
        let p = (|_: &i32, _: &i32, _: &i32| false).and(&counted);
        assert!(!p.test(&0, &0, &0));
        assert_eq!(calls.get(), 0);

        let p = (|_: &i32, _: &i32, _: &i32| true).or(&counted);
        assert!(p.test(&0, &0, &0));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unsized_arguments() {
        let p = |name: &str, tag: &str, bytes: &[u8], suffix: &str| {
            name.starts_with(tag) && name.ends_with(suffix) && bytes.is_empty()
        };
        assert!(p.test("rail-yard", "rail", "".as_bytes(), "yard"));
        assert!(!p.negate().test("rail-yard", "rail", "".as_bytes(), "yard"));
    }

    #[test]
    fn test_higher_arities() {
        let penta = |a: &u8, b: &u8, c: &u8, d: &u8, e: &u8| a < b && b < c && c < d && d < e;
        assert!(penta.test(&1, &2, &3, &4, &5));
        assert!(penta.negate().test(&5, &4, &3, &2, &1));

        let hexa = |a: &bool, b: &bool, c: &bool, d: &bool, e: &bool, f: &bool| {
            *a && *b && *c && *d && *e && *f
        };
        let some = |a: &bool, b: &bool, c: &bool, d: &bool, e: &bool, f: &bool| {
            *a || *b || *c || *d || *e || *f
        };
        let some_but_not_all = some.and(hexa.negate());
        assert!(some_but_not_all.test(&true, &false, &false, &false, &false, &false));
        assert!(!some_but_not_all.test(&true, &true, &true, &true, &true, &true));

        let hepta = |a: &i32, b: &i32, c: &i32, d: &i32, e: &i32, f: &i32, g: &i32| {
            a + b + c + d + e + f + g == 7
        };
        assert!(hepta.or(hepta.negate()).test(&0, &0, &0, &0, &0, &0, &0));
    }
}
