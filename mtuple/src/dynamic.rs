//! Equality and ordering against values whose type is not known statically.
//!
//! Typed comparisons between tuples can only ever involve two tuples of the same type. When the
//! comparand is an arbitrary [`Any`] value, which may also be absent altogether, the structural
//! protocol spells out what happens:
//!
//! - An absent comparand is never equal to a tuple, and every tuple orders after it.
//! - A comparand of a different type is never equal to a tuple, and ordering against it is an
//!   [`Error::IncorrectType`].
//!
//! # Examples
//!
//! ```
//! use std::{any::Any, cmp::Ordering};
//! use mtuple::{AnyTuple, Error, Tuple1, Tuple2};
//!
//! let pair = Tuple2::new(1, 2);
//! let same: &dyn Any = &Tuple2::new(1, 2);
//! let other: &dyn Any = &Tuple1::new(1);
//!
//! assert!(pair.equals_any(Some(same)));
//! assert!(!pair.equals_any(Some(other)));
//! assert!(!pair.equals_any(None));
//!
//! assert_eq!(pair.compare_any(Some(same)), Ok(Ordering::Equal));
//! assert_eq!(pair.compare_any(None), Ok(Ordering::Greater));
//! assert!(matches!(pair.compare_any(Some(other)), Err(Error::IncorrectType { .. })));
//! ```

use crate::{Error, Natural, Strategy, StructuralEq, StructuralOrd, TupleShape};
use std::{
    any::{type_name, Any},
    cmp::Ordering,
};

/// Natural equality and ordering of a tuple against an untyped, possibly absent, comparand.
///
/// This is implemented for every tuple whose slots have a natural equality and ordering.
pub trait AnyTuple: Any {
    /// Whether `other` is present, is a tuple of the same type as `self`, and is equal to it.
    fn equals_any(&self, other: Option<&dyn Any>) -> bool;

    /// Order `self` relative to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncorrectType`] if `other` is present but not of the same type as `self`.
    fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering, Error>;
}

impl<T> AnyTuple for T
where
    T: TupleShape + StructuralEq<Natural> + StructuralOrd<Natural> + Any,
{
    fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        equals_any_with(self, other, &Natural)
    }

    fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering, Error> {
        compare_any_with(self, other, &Natural)
    }
}

/// Whether `other` is present, is of the same type as `tuple`, and is equal to it under
/// `comparer`.
pub fn equals_any_with<T, C>(tuple: &T, other: Option<&dyn Any>, comparer: &C) -> bool
where
    T: TupleShape + StructuralEq<C> + Any,
    C: ?Sized,
{
    match other.and_then(|other| other.downcast_ref::<T>()) {
        Some(other) => tuple.equals_with(other, comparer),
        None => false,
    }
}

/// Order `tuple` relative to `other` under `comparer`.
///
/// # Errors
///
/// Returns [`Error::IncorrectType`] if `other` is present but not of the same type as `tuple`,
/// and passes along any error of the comparer itself.
pub fn compare_any_with<T, C>(
    tuple: &T,
    other: Option<&dyn Any>,
    comparer: &C,
) -> Result<Ordering, Error>
where
    T: TupleShape + StructuralOrd<C> + Any,
    C: Strategy + ?Sized,
    C::Error: Into<Error>,
{
    let other = match other {
        Some(other) => other,
        None => return Ok(Ordering::Greater),
    };
    match other.downcast_ref::<T>() {
        Some(other) => tuple.compare_with(other, comparer).map_err(Into::into),
        None => {
            let expected = type_name::<T>();
            tracing::debug!(expected, "refused to order tuple against a value of another type");
            Err(Error::IncorrectType { expected })
        }
    }
}
