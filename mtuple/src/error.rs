use std::convert::Infallible;
use thiserror::Error;

/// The ways a structural query or a tuple construction can fail.
///
/// Equality never fails: comparing against a value of another shape is simply unequal. Ordering
/// is strict about shape, and constructing an [`ExtendedTuple`](crate::ExtendedTuple) from an
/// untyped rest value checks that value up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum Error {
    /// An ordering query was given a comparand that is not a tuple of the same concrete type.
    #[error("cannot order tuple against a value that is not of type `{expected}`")]
    IncorrectType {
        /// The type the comparand was required to have.
        expected: &'static str,
    },
    /// The last argument to an extended tuple constructor was not the declared rest tuple.
    #[error("last argument of an extended tuple must be a tuple of type `{expected}`")]
    RestNotTuple {
        /// The rest type declared by the extended tuple.
        expected: &'static str,
    },
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
