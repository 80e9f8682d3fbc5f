//! Predicates of three to seven arguments
//!
//! This module generalizes single-argument predicate composition to several
//! arguments. Each arity has its own trait (`TriPredicate` … `HeptaPredicate`),
//! implemented by every closure of the matching shape (`Fn(&T1, .., &Tn) -> bool`).
//! Predicates combine with `and`, `or` and `negate`, which return the concrete
//! combinator types [`And`], [`Or`] and [`Not`].
//!
//! # Example
//!
//! ```rust
//! use railyard::predicate::TriPredicate;
//!
//! let in_box = |x: &i32, y: &i32, z: &i32| *x >= 0 && *y >= 0 && *z >= 0;
//! let on_floor = |_: &i32, _: &i32, z: &i32| *z == 0;
//!
//! let hovering = in_box.and(on_floor.negate());
//! assert!(hovering.test(&1, &2, &3));
//! assert!(!hovering.test(&1, &2, &0));
//! ```

mod combinators;

pub use combinators::{
    And, HeptaPredicate, HexaPredicate, Not, Or, PentaPredicate, QuadPredicate, TriPredicate,
};
