//! Comparison strategies: the pluggable notion of equality, ordering and hashing that every
//! structural query on a tuple is parameterized over.
//!
//! A strategy is never stored inside a tuple. It is passed to each query, so that the same tuple
//! can be compared under its slots' [natural](Natural) behavior in one place and under some other
//! notion of equality in another.
//!
//! # Examples
//!
//! A strategy that treats strings case-insensitively, while deferring to the natural behavior of
//! integers:
//!
//! ```
//! use std::{cmp::Ordering, convert::Infallible};
//! use mtuple::{Comparer, Element, Natural, Strategy, StructuralEq, StructuralHash, Tuple2};
//!
//! struct CaseInsensitive;
//!
//! impl Strategy for CaseInsensitive {
//!     type Error = Infallible;
//! }
//!
//! impl Comparer<String> for CaseInsensitive {
//!     fn equals(&self, a: &String, b: &String) -> bool {
//!         a.eq_ignore_ascii_case(b)
//!     }
//!
//!     fn compare(&self, a: &String, b: &String) -> Result<Ordering, Infallible> {
//!         Ok(a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()))
//!     }
//!
//!     fn hash(&self, value: &String) -> i32 {
//!         value.to_ascii_lowercase().element_hash()
//!     }
//! }
//!
//! impl Comparer<i32> for CaseInsensitive {
//!     fn equals(&self, a: &i32, b: &i32) -> bool {
//!         Natural.equals(a, b)
//!     }
//!
//!     fn compare(&self, a: &i32, b: &i32) -> Result<Ordering, Infallible> {
//!         Natural.compare(a, b)
//!     }
//!
//!     fn hash(&self, value: &i32) -> i32 {
//!         Natural.hash(value)
//!     }
//! }
//!
//! let a = Tuple2::new("Hello".to_string(), 1);
//! let b = Tuple2::new("hELLO".to_string(), 1);
//!
//! assert_ne!(a, b);
//! assert!(a.equals_with(&b, &CaseInsensitive));
//! assert_eq!(a.hash_with(&CaseInsensitive), b.hash_with(&CaseInsensitive));
//! ```

use crate::Element;
use std::{cmp::Ordering, convert::Infallible};

/// The part of a comparison strategy shared by all the element types it can handle.
pub trait Strategy {
    /// The error signalled when this strategy is asked to order two values it cannot order.
    ///
    /// Strategies which can always order their values should use [`Infallible`].
    type Error;
}

/// A comparison strategy for values of type `T`.
///
/// Implementations must keep the three operations consistent with each other: `equals(a, b)`
/// should hold exactly when `compare(a, b)` is `Ok(Ordering::Equal)`, and equal values must hash
/// equally.
pub trait Comparer<T: ?Sized>: Strategy {
    /// Whether `a` and `b` are equal under this strategy.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Order `a` relative to `b` under this strategy, or fail if they cannot be ordered.
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, Self::Error>;

    /// The hash code of `value` under this strategy.
    fn hash(&self, value: &T) -> i32;
}

impl<S: Strategy + ?Sized> Strategy for &'_ S {
    type Error = S::Error;
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &'_ C {
    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }

    fn compare(&self, a: &T, b: &T) -> Result<Ordering, Self::Error> {
        (**self).compare(a, b)
    }

    fn hash(&self, value: &T) -> i32 {
        (**self).hash(value)
    }
}

/// The default strategy: every value is compared by its own [`Element`] implementation.
///
/// This is the strategy used by the [`PartialEq`], [`Ord`] and [`Hash`](std::hash::Hash)
/// implementations of all tuples.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use mtuple::{Comparer, Natural};
///
/// assert!(Natural.equals(&3, &3));
/// assert_eq!(Natural.compare(&"a", &"b"), Ok(Ordering::Less));
/// assert_eq!(Natural.hash(&7_i32), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Natural;

impl Strategy for Natural {
    type Error = Infallible;
}

impl<T: Element + ?Sized> Comparer<T> for Natural {
    fn equals(&self, a: &T, b: &T) -> bool {
        a.element_eq(b)
    }

    fn compare(&self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok(a.element_cmp(b))
    }

    fn hash(&self, value: &T) -> i32 {
        value.element_hash()
    }
}
