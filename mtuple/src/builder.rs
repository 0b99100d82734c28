//! Free functions building a tuple from its slots, one per arity.
//!
//! These are shorthand for the `new` constructors of the tuple types, mostly useful where type
//! inference makes naming the tuple type tedious. The [`mtuple!`](crate::mtuple) macro picks the
//! right one for any number of slots.

use crate::{ExtendedTuple, Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7};

/// Create a new 1-tuple, or singleton.
pub fn tuple1<T1>(item1: T1) -> Tuple1<T1> {
    Tuple1::new(item1)
}

/// Create a new 2-tuple, or pair.
pub fn tuple2<T1, T2>(item1: T1, item2: T2) -> Tuple2<T1, T2> {
    Tuple2::new(item1, item2)
}

/// Create a new 3-tuple, or triple.
pub fn tuple3<T1, T2, T3>(item1: T1, item2: T2, item3: T3) -> Tuple3<T1, T2, T3> {
    Tuple3::new(item1, item2, item3)
}

/// Create a new 4-tuple, or quadruple.
pub fn tuple4<T1, T2, T3, T4>(
    item1: T1,
    item2: T2,
    item3: T3,
    item4: T4,
) -> Tuple4<T1, T2, T3, T4> {
    Tuple4::new(item1, item2, item3, item4)
}

/// Create a new 5-tuple, or quintuple.
pub fn tuple5<T1, T2, T3, T4, T5>(
    item1: T1,
    item2: T2,
    item3: T3,
    item4: T4,
    item5: T5,
) -> Tuple5<T1, T2, T3, T4, T5> {
    Tuple5::new(item1, item2, item3, item4, item5)
}

/// Create a new 6-tuple, or sextuple.
pub fn tuple6<T1, T2, T3, T4, T5, T6>(
    item1: T1,
    item2: T2,
    item3: T3,
    item4: T4,
    item5: T5,
    item6: T6,
) -> Tuple6<T1, T2, T3, T4, T5, T6> {
    Tuple6::new(item1, item2, item3, item4, item5, item6)
}

/// Create a new 7-tuple, or septuple.
pub fn tuple7<T1, T2, T3, T4, T5, T6, T7>(
    item1: T1,
    item2: T2,
    item3: T3,
    item4: T4,
    item5: T5,
    item6: T6,
    item7: T7,
) -> Tuple7<T1, T2, T3, T4, T5, T6, T7> {
    Tuple7::new(item1, item2, item3, item4, item5, item6, item7)
}

/// Create a new 8-tuple, or octuple, wrapping the eighth slot in a [`Tuple1`] for its `rest`.
///
/// # Examples
///
/// ```
/// use mtuple::{tuple8, TupleShape};
///
/// let t = tuple8(1, 2, 3, 4, 5, 6, 7, "eight");
/// assert_eq!(t.size(), 8);
/// assert_eq!(t.to_string(), "(1, 2, 3, 4, 5, 6, 7, eight)");
/// ```
#[allow(clippy::too_many_arguments)]
pub fn tuple8<T1, T2, T3, T4, T5, T6, T7, T8>(
    item1: T1,
    item2: T2,
    item3: T3,
    item4: T4,
    item5: T5,
    item6: T6,
    item7: T7,
    item8: T8,
) -> ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, Tuple1<T8>> {
    ExtendedTuple::new(
        item1,
        item2,
        item3,
        item4,
        item5,
        item6,
        item7,
        Tuple1::new(item8),
    )
}

/// Build a tuple of any arity from its slots.
///
/// One to seven slots produce the corresponding `TupleN`. More than seven produce an
/// [`ExtendedTuple`](crate::ExtendedTuple) whose `rest` is built by this same macro from the
/// remaining slots, so that any number of slots nests to the right.
///
/// # Examples
///
/// ```
/// use mtuple::{mtuple, TupleShape};
///
/// let small = mtuple![1, "two", 3.0];
/// assert_eq!(small.to_string(), "(1, two, 3)");
///
/// let large = mtuple![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
/// assert_eq!(large.size(), 15);
/// assert_eq!(
///     large.to_string(),
///     "(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15)",
/// );
/// ```
#[macro_export]
macro_rules! mtuple {
    ($t1:expr $(,)?) => {
        $crate::Tuple1::new($t1)
    };
    ($t1:expr, $t2:expr $(,)?) => {
        $crate::Tuple2::new($t1, $t2)
    };
    ($t1:expr, $t2:expr, $t3:expr $(,)?) => {
        $crate::Tuple3::new($t1, $t2, $t3)
    };
    ($t1:expr, $t2:expr, $t3:expr, $t4:expr $(,)?) => {
        $crate::Tuple4::new($t1, $t2, $t3, $t4)
    };
    ($t1:expr, $t2:expr, $t3:expr, $t4:expr, $t5:expr $(,)?) => {
        $crate::Tuple5::new($t1, $t2, $t3, $t4, $t5)
    };
    ($t1:expr, $t2:expr, $t3:expr, $t4:expr, $t5:expr, $t6:expr $(,)?) => {
        $crate::Tuple6::new($t1, $t2, $t3, $t4, $t5, $t6)
    };
    ($t1:expr, $t2:expr, $t3:expr, $t4:expr, $t5:expr, $t6:expr, $t7:expr $(,)?) => {
        $crate::Tuple7::new($t1, $t2, $t3, $t4, $t5, $t6, $t7)
    };
    (
        $t1:expr, $t2:expr, $t3:expr, $t4:expr, $t5:expr, $t6:expr, $t7:expr,
        $($rest:expr),+ $(,)?
    ) => {
        $crate::ExtendedTuple::new(
            $t1, $t2, $t3, $t4, $t5, $t6, $t7,
            $crate::mtuple!($($rest),+),
        )
    };
}
