//! Error type for wrong-variant access.
//!
//! Every fallible accessor in this crate (`Either::get`, `Either::get_left`,
//! `Validation::get`, `Validation::get_errors`) reports a mismatch between the
//! variant it was asked for and the variant actually held. The failure is
//! immediate and synchronous; nothing is deferred or swallowed.
//!
//! ```
//! use railyard::{Either, Error};
//!
//! let left: Either<&str, i32> = Either::left("boom");
//! assert_eq!(
//!     left.get(),
//!     Err(Error::NoSuchElement { accessor: "get", variant: "Left" })
//! );
//! ```

/// Errors raised by the accessors of [`Either`](crate::Either) and
/// [`Validation`](crate::Validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// An accessor was called on the variant that does not carry the requested value.
    #[error("no such element: called `{accessor}` on a `{variant}` value")]
    NoSuchElement {
        /// Name of the accessor that was called.
        accessor: &'static str,
        /// Name of the variant that was actually present.
        variant: &'static str,
    },
}

impl Error {
    pub(crate) fn no_such_element(accessor: &'static str, variant: &'static str) -> Self {
        Error::NoSuchElement { accessor, variant }
    }
}
