//! The natural equality, ordering and hash code of a slot value.
//!
//! [`Natural`](crate::Natural) compares tuple slots through this trait. All primitive types,
//! strings, smart pointers, [`Option`], slices, vectors, arrays and every tuple type in this
//! crate implement it, so tuples nest inside each other's slots without any further work.
//! Built-in Rust tuples do not; convert them with [`From`] into the tuple of the same arity.

use crate::hash;
use std::{cmp::Ordering, rc::Rc};

/// A value with a natural equality, total ordering and 32-bit hash code.
///
/// The three operations must agree: `element_eq` holds exactly when `element_cmp` returns
/// [`Ordering::Equal`], and equal values have equal hash codes. In particular, floating point
/// values are ordered totally, with `NaN` equal to itself and below every number.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use mtuple::Element;
///
/// assert!(f64::NAN.element_eq(&f64::NAN));
/// assert_eq!(f64::NAN.element_cmp(&f64::NEG_INFINITY), Ordering::Less);
/// assert_eq!(None.element_cmp(&Some(0)), Ordering::Less);
/// assert_eq!(0.0_f64.element_hash(), (-0.0_f64).element_hash());
/// ```
pub trait Element {
    /// Whether `self` and `other` are equal.
    fn element_eq(&self, other: &Self) -> bool;

    /// The total order of `self` relative to `other`.
    fn element_cmp(&self, other: &Self) -> Ordering;

    /// A 32-bit hash code for `self`.
    fn element_hash(&self) -> i32;
}

// Integers which fit in 32 bits are their own hash code.
macro_rules! narrow_elements {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn element_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn element_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn element_hash(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

// Wider integers fold their high half into their low half.
macro_rules! wide_elements {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn element_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn element_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn element_hash(&self) -> i32 {
                    fold_bits(*self as u128)
                }
            }
        )*
    };
}

narrow_elements!(i8, i16, i32, u8, u16, u32, bool, char);
wide_elements!(i64, u64, i128, u128, isize, usize);

fn fold_bits(bits: u128) -> i32 {
    (bits as i32) ^ ((bits >> 32) as i32) ^ ((bits >> 64) as i32) ^ ((bits >> 96) as i32)
}

macro_rules! float_elements {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn element_eq(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }

                fn element_cmp(&self, other: &Self) -> Ordering {
                    match self.partial_cmp(other) {
                        Some(ordering) => ordering,
                        None => other.is_nan().cmp(&self.is_nan()),
                    }
                }

                fn element_hash(&self) -> i32 {
                    // Both zeroes and all NaNs must share a hash code, since they are equal
                    let canonical = if *self == 0.0 {
                        0.0
                    } else if self.is_nan() {
                        <$ty>::NAN
                    } else {
                        *self
                    };
                    fold_bits(canonical.to_bits() as u128)
                }
            }
        )*
    };
}

float_elements!(f32, f64);

impl Element for () {
    fn element_eq(&self, _: &Self) -> bool {
        true
    }

    fn element_cmp(&self, _: &Self) -> Ordering {
        Ordering::Equal
    }

    fn element_hash(&self) -> i32 {
        0
    }
}

impl Element for str {
    fn element_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn element_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn element_hash(&self) -> i32 {
        self.bytes()
            .fold(5381, |code, byte| hash::combine(code, i32::from(byte)))
    }
}

impl Element for String {
    fn element_eq(&self, other: &Self) -> bool {
        self.as_str().element_eq(other)
    }

    fn element_cmp(&self, other: &Self) -> Ordering {
        self.as_str().element_cmp(other)
    }

    fn element_hash(&self) -> i32 {
        self.as_str().element_hash()
    }
}

/// An absent value is equal only to another absent value, sorts before every present value, and
/// hashes to `0`.
impl<T: Element> Element for Option<T> {
    fn element_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.element_eq(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn element_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.element_cmp(b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }

    fn element_hash(&self) -> i32 {
        self.as_ref().map_or(0, Element::element_hash)
    }
}

/// Sequences compare slot-wise like tuples do: element by element, with a shorter sequence
/// ordering before any longer one it is a prefix of.
impl<T: Element> Element for [T] {
    fn element_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.element_eq(b))
    }

    fn element_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other) {
            match a.element_cmp(b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        self.len().cmp(&other.len())
    }

    fn element_hash(&self) -> i32 {
        self.iter()
            .fold(5381, |code, item| hash::combine(code, item.element_hash()))
    }
}

impl<T: Element> Element for Vec<T> {
    fn element_eq(&self, other: &Self) -> bool {
        self.as_slice().element_eq(other)
    }

    fn element_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().element_cmp(other)
    }

    fn element_hash(&self) -> i32 {
        self.as_slice().element_hash()
    }
}

impl<T: Element, const N: usize> Element for [T; N] {
    fn element_eq(&self, other: &Self) -> bool {
        self[..].element_eq(&other[..])
    }

    fn element_cmp(&self, other: &Self) -> Ordering {
        self[..].element_cmp(&other[..])
    }

    fn element_hash(&self) -> i32 {
        self[..].element_hash()
    }
}

macro_rules! pointer_elements {
    ($($ptr:ident),*) => {
        $(
            impl<T: Element + ?Sized> Element for $ptr<T> {
                fn element_eq(&self, other: &Self) -> bool {
                    (**self).element_eq(other)
                }

                fn element_cmp(&self, other: &Self) -> Ordering {
                    (**self).element_cmp(other)
                }

                fn element_hash(&self) -> i32 {
                    (**self).element_hash()
                }
            }
        )*
    };
}

pointer_elements!(Box, Rc);

impl<T: Element + ?Sized> Element for &'_ T {
    fn element_eq(&self, other: &Self) -> bool {
        (**self).element_eq(other)
    }

    fn element_cmp(&self, other: &Self) -> Ordering {
        (**self).element_cmp(other)
    }

    fn element_hash(&self) -> i32 {
        (**self).element_hash()
    }
}
