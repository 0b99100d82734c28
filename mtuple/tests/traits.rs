use {
    mtuple::prelude::*,
    static_assertions::{assert_impl_all, assert_not_impl_any},
    std::{
        cell::{Cell, RefCell},
        fmt::Display,
        hash::Hash,
        rc::Rc,
    },
};

// Only tuples can extend a tuple
assert_impl_all!(Tuple1<()>: TupleShape);
assert_impl_all!(ExtendedTuple<(), (), (), (), (), (), (), Tuple1<()>>: TupleShape);
assert_not_impl_any!(i32: TupleShape);
assert_not_impl_any!((i32, i32): TupleShape);
assert_not_impl_any!(Rc<RefCell<Tuple1<i32>>>: TupleShape);

// Natural comparison is available whenever every slot is an element
assert_impl_all!(Tuple3<i32, String, f64>: Eq, Ord, Hash, Element, AnyTuple);
assert_impl_all!(Tuple2<Option<Box<str>>, Tuple1<char>>: Eq, Ord, Hash, Element);
assert_impl_all!(
    ExtendedTuple<u8, u8, u8, u8, u8, u8, u8, Tuple2<f32, bool>>: Eq,
    Ord,
    Hash,
    Element,
    AnyTuple
);
assert_impl_all!(Tuple2<i32, Vec<String>>: Eq, Ord, Hash, Element);
assert_impl_all!(Tuple1<[f64; 3]>: Eq, Ord, Hash, Element);
assert_not_impl_any!(Tuple2<i32, Cell<i32>>: PartialEq, Element);
assert_not_impl_any!(Tuple1<(i32, i32)>: PartialEq, Element);

// Rendering needs every slot to be displayable
assert_impl_all!(Tuple2<&str, f64>: Display, Render);
assert_not_impl_any!(Tuple2<&str, Vec<u8>>: Display, Render);

// Shared rests are single-threaded
assert_impl_all!(Tuple7<i32, i32, i32, i32, i32, i32, i32>: Send, Sync);
assert_not_impl_any!(ExtendedTuple<i32, i32, i32, i32, i32, i32, i32, Tuple1<i32>>: Send, Sync);

assert_impl_all!(Natural: Comparer<i32>, Comparer<str>, Comparer<Tuple1<i32>>, Copy, Default);
assert_impl_all!(Error: std::error::Error, Send, Sync, Copy);

#[test]
fn errors_describe_the_expected_type() {
    let error = Error::IncorrectType {
        expected: "mtuple::Tuple1<i32>",
    };
    assert_eq!(
        error.to_string(),
        "cannot order tuple against a value that is not of type `mtuple::Tuple1<i32>`"
    );

    let error = Error::RestNotTuple { expected: "T" };
    assert_eq!(
        error.to_string(),
        "last argument of an extended tuple must be a tuple of type `T`"
    );
}
