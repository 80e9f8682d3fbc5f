//! Functions of three to eight arguments with `and_then` composition
//!
//! Each arity gets its own trait (`TriFunction` … `OctaFunction`). Any closure or
//! `fn` item of the matching arity implements it, and
//! [`and_then`](TriFunction::and_then) post-processes the result with a unary
//! function, producing an [`AndThen`] of the same arity.
//!
//! # Example
//!
//! ```rust
//! use railyard::function::TriFunction;
//!
//! let volume = |w: u32, h: u32, d: u32| w * h * d;
//! let label = volume.and_then(|v: u32| format!("{v} cm3"));
//!
//! assert_eq!(label.apply(2, 3, 4), "24 cm3");
//! ```

/// A function followed by a unary post-processing step.
///
/// Created by the `and_then` method of every n-ary function trait.
#[derive(Clone, Copy, Debug)]
pub struct AndThen<F, G> {
    first: F,
    after: G,
}

macro_rules! nary_function {
    ($(#[$meta:meta])* $name:ident: $($arg:ident $T:ident),+) => {
        $(#[$meta])*
        pub trait $name<$($T),+> {
            /// The type returned by [`apply`](Self::apply).
            type Output;

            /// Invoke the function.
            fn apply(&self, $($arg: $T),+) -> Self::Output;

            /// Feed the result of this function into `after`.
            fn and_then<G, Z>(self, after: G) -> AndThen<Self, G>
            where
                Self: Sized,
                G: Fn(Self::Output) -> Z,
            {
                AndThen { first: self, after }
            }
        }

        impl<F, R, $($T),+> $name<$($T),+> for F
        where
            F: Fn($($T),+) -> R,
        {
            type Output = R;

            #[inline]
            fn apply(&self, $($arg: $T),+) -> R {
                self($($arg),+)
            }
        }

        impl<F, G, Z, $($T),+> $name<$($T),+> for AndThen<F, G>
        where
            F: $name<$($T),+>,
            G: Fn(F::Output) -> Z,
        {
            type Output = Z;

            #[inline]
            fn apply(&self, $($arg: $T),+) -> Z {
                (self.after)(self.first.apply($($arg),+))
            }
        }
    };
}

nary_function!(
    /// A function of three arguments.
    TriFunction: t1 T1, t2 T2, t3 T3
);
nary_function!(
    /// A function of four arguments.
    QuadFunction: t1 T1, t2 T2, t3 T3, t4 T4
);
nary_function!(
    /// A function of five arguments.
    PentaFunction: t1 T1, t2 T2, t3 T3, t4 T4, t5 T5
);
nary_function!(
    /// A function of six arguments.
    HexaFunction: t1 T1, t2 T2, t3 T3, t4 T4, t5 T5, t6 T6
);
nary_function!(
    /// A function of seven arguments.
    HeptaFunction: t1 T1, t2 T2, t3 T3, t4 T4, t5 T5, t6 T6, t7 T7
);
nary_function!(
    /// A function of eight arguments.
    OctaFunction: t1 T1, t2 T2, t3 T3, t4 T4, t5 T5, t6 T6, t7 T7, t8 T8
);
