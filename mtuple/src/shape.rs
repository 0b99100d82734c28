//! The capabilities shared by every tuple, whatever its arity.
//!
//! An [`ExtendedTuple`](crate::ExtendedTuple) knows nothing about the concrete type of its `rest`
//! slot beyond these traits, which is what lets one recursive implementation cover every arity
//! from 8 upwards.

use crate::Strategy;
use std::{cmp::Ordering, fmt};

/// A tuple of any arity.
///
/// This is the bound an [`ExtendedTuple`](crate::ExtendedTuple) places on its `rest` slot: only
/// tuples can be used to extend a tuple.
pub trait TupleShape {
    /// The number of slots in this tuple, counting every slot of any nested `rest`.
    fn size(&self) -> usize;
}

/// Render the slots of a tuple, without its opening parenthesis.
///
/// Rendering is split this way so that a tuple can hand over the remainder of its rendering to
/// the tuple nested in its `rest` slot. The [`Display`](fmt::Display) implementation of every
/// tuple writes `(` and then calls [`render_into`](Render::render_into).
pub trait Render {
    /// Write each slot separated by `", "`, followed by the closing `)`.
    fn render_into(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Equality of two tuples of the same type, slot by slot, under the comparer `C`.
pub trait StructuralEq<C: ?Sized> {
    /// Whether every slot of `self` equals the corresponding slot of `other` under `comparer`.
    fn equals_with(&self, other: &Self, comparer: &C) -> bool;
}

/// Lexicographic ordering of two tuples of the same type under the comparer `C`.
pub trait StructuralOrd<C: Strategy + ?Sized> {
    /// Order `self` relative to `other`, comparing slots from first to last and stopping at the
    /// first slot which is not equal.
    fn compare_with(&self, other: &Self, comparer: &C) -> Result<Ordering, C::Error>;
}

/// The hash code of a tuple, combining the hash codes of its slots under the comparer `C`.
pub trait StructuralHash<C: ?Sized> {
    /// The hash code of `self` under `comparer`.
    fn hash_with(&self, comparer: &C) -> i32;
}
