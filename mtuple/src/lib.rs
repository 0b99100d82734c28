/*!
Mutable tuples with structural equality, ordering and hashing, parameterized over a pluggable
comparison strategy.

The built-in tuple types of Rust are immutable in shape and fix a single notion of equality on
their elements. This crate provides a family of tuple types, [`Tuple1`] through [`Tuple7`] and
the unboundedly large [`ExtendedTuple`], whose slots can be freely read and reassigned, and whose
equality, ordering and hash codes are defined *structurally*, slot by slot, by whatever
[`Comparer`] the caller supplies.

- **Structural equality**: two tuples are equal when they have the same shape and each pair of
  corresponding slots is equal under the comparer ([`StructuralEq`]).
- **Structural ordering**: tuples are ordered lexicographically, from the first slot to the last,
  stopping at the first slot which is not equal ([`StructuralOrd`]).
- **Structural hashing**: the hash codes of the slots are combined with a fixed mixing tree into
  one 32-bit hash code ([`StructuralHash`], [`hash`]). Extended tuples fold at most eight slot
  hash codes, however many slots they have.
- **Rendering**: every tuple displays as `(s1, s2, ..., sn)` ([`Render`]).

When no particular comparer is needed, the [`Natural`] strategy compares slots by their own
[`Element`] implementations. It backs the [`PartialEq`], [`Eq`], [`PartialOrd`], [`Ord`] and
[`Hash`](std::hash::Hash) implementations of every tuple.

## Arities beyond seven

An [`ExtendedTuple`] stores seven slots followed by a `rest` slot holding any other tuple, so a
tuple of any size is built by nesting to the right. The [`mtuple!`] macro does this nesting for
you:

```
use mtuple::{mtuple, TupleShape};

let t = mtuple![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
assert_eq!(t.size(), 12);
assert_eq!(t.to_string(), "(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)");
```

The `rest` of an extended tuple is shared by reference, and may be shared between several
extended tuples at once; see the [`extended`] module.

## Quick reference

The **[`prelude`]** module exports everything needed to build and compare tuples. Most programs
should `use mtuple::prelude::*;`.

| Operation | Trait or function |
| :-------- | :---------------- |
| Number of slots | [`TupleShape::size`] |
| Render into a buffer | [`Render::render_into`], or [`ToString`] |
| Equality under a comparer | [`StructuralEq::equals_with`] |
| Ordering under a comparer | [`StructuralOrd::compare_with`] |
| Hash code under a comparer | [`StructuralHash::hash_with`] |
| Comparison against an untyped value | [`AnyTuple`], [`dynamic::compare_any_with`] |
| Build a tuple from its slots | [`mtuple!`], [`tuple1`] .. [`tuple8`] |

## Features

- `serde`: implement `Serialize` and `Deserialize` for every tuple type.
*/

#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod builder;
pub mod dynamic;
pub mod extended;
pub mod hash;

mod element;
mod error;
mod shape;
mod strategy;
mod tuple;

pub use builder::{tuple1, tuple2, tuple3, tuple4, tuple5, tuple6, tuple7, tuple8};
pub use dynamic::AnyTuple;
pub use element::Element;
pub use error::Error;
pub use extended::{ExtendedTuple, HASH_WINDOW, INLINE_SLOTS};
pub use shape::{Render, StructuralEq, StructuralHash, StructuralOrd, TupleShape};
pub use strategy::{Comparer, Natural, Strategy};
pub use tuple::{Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7};

/// The prelude module for quickly getting started with mtuple.
///
/// This module is designed to be imported as `use mtuple::prelude::*;`, which brings into scope
/// the tuple types, their builders, and the traits through which they are compared.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::builder::{tuple1, tuple2, tuple3, tuple4, tuple5, tuple6, tuple7, tuple8};
    #[doc(no_inline)]
    pub use crate::mtuple;
    #[doc(no_inline)]
    pub use crate::{
        AnyTuple, Comparer, Element, Error, ExtendedTuple, Natural, Render, Strategy,
        StructuralEq, StructuralHash, StructuralOrd, TupleShape,
    };
    #[doc(no_inline)]
    pub use crate::{Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7};
}
