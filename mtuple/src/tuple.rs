//! The fixed-arity tuples [`Tuple1`] through [`Tuple7`].
//!
//! Every one of these types is generated from the same template, so they all behave identically
//! apart from their number of slots. Each tuple:
//!
//! - can be created with all slots defaulted ([`Default`]), with every slot supplied (`new`), or
//!   from a built-in Rust tuple ([`From`]);
//! - exposes `itemK`, `itemK_mut` and `set_itemK` accessors for each slot `K`;
//! - implements [`TupleShape`](crate::TupleShape), [`Render`](crate::Render) and the structural
//!   traits [`StructuralEq`](crate::StructuralEq), [`StructuralOrd`](crate::StructuralOrd) and
//!   [`StructuralHash`](crate::StructuralHash) for any comparer which can handle its slots;
//! - implements [`PartialEq`], [`Eq`], [`PartialOrd`], [`Ord`], [`Hash`](std::hash::Hash) and
//!   [`Element`](crate::Element) through the [`Natural`](crate::Natural) strategy, when all of its
//!   slots are [`Element`](crate::Element)s.
//!
//! # Examples
//!
//! ```
//! use mtuple::{Tuple3, TupleShape};
//!
//! let mut triple = Tuple3::new(1, "two", 3.0);
//! triple.set_item2("deux");
//! *triple.item3_mut() += 0.5;
//!
//! assert_eq!(triple.size(), 3);
//! assert_eq!(triple.to_string(), "(1, deux, 3.5)");
//! assert_eq!(triple.into_inner(), (1, "deux", 3.5));
//! ```

mtuple_macro::impl_tuples!(7);

#[cfg(test)]
mod tests {
    use crate::{hash, prelude::*};
    use std::cmp::Ordering;

    #[test]
    fn default_slots_hold_zero_values() {
        let t: Tuple7<i32, f64, f32, u64, String, u8, bool> = Tuple7::default();
        assert_eq!(*t.item1(), 0);
        assert_eq!(*t.item2(), 0.0);
        assert_eq!(*t.item3(), 0.0);
        assert_eq!(*t.item4(), 0);
        assert_eq!(t.item5(), "");
        assert_eq!(*t.item6(), 0);
        assert!(!*t.item7());

        let absent: Tuple1<Option<String>> = Tuple1::default();
        assert_eq!(*absent.item1(), None);
    }

    #[test]
    fn full_constructor_and_setters() {
        let mut t = Tuple4::new(33, 5.0, 7.0_f32, "hello".to_string());
        assert_eq!((*t.item1(), *t.item2(), *t.item3()), (33, 5.0, 7.0));
        assert_eq!(t.item4(), "hello");

        t.set_item1(7);
        t.set_item2(22.5);
        t.item4_mut().push_str(", world");
        assert_eq!(*t.item1(), 7);
        assert_eq!(*t.item2(), 22.5);
        assert_eq!(t.item4(), "hello, world");
    }

    #[test]
    fn sizes_match_arity() {
        assert_eq!(Tuple1::new(()).size(), 1);
        assert_eq!(Tuple2::new((), ()).size(), 2);
        assert_eq!(Tuple3::new((), (), ()).size(), 3);
        assert_eq!(Tuple4::new((), (), (), ()).size(), 4);
        assert_eq!(Tuple5::new((), (), (), (), ()).size(), 5);
        assert_eq!(Tuple6::new((), (), (), (), (), ()).size(), 6);
        assert_eq!(Tuple7::new((), (), (), (), (), (), ()).size(), 7);
    }

    #[test]
    fn hash_uses_the_fixed_tree_for_its_arity() {
        assert_eq!(Tuple1::new(9).hash_with(&Natural), 9);
        assert_eq!(Tuple2::new(1, 2).hash_with(&Natural), hash::combine(1, 2));
        assert_eq!(
            Tuple5::new(1, 2, 3, 4, 5).hash_with(&Natural),
            hash::combine5(1, 2, 3, 4, 5)
        );
        assert_eq!(
            Tuple7::new(1, 2, 3, 4, 5, 6, 7).hash_with(&Natural),
            hash::combine7(1, 2, 3, 4, 5, 6, 7)
        );
    }

    #[test]
    fn lexicographic_tie_break() {
        let a = Tuple2::new(1, 2);
        let b = Tuple2::new(1, 3);
        assert_eq!(a.compare_with(&b, &Natural), Ok(Ordering::Less));
        assert_eq!(b.compare_with(&a, &Natural), Ok(Ordering::Greater));

        let c = Tuple3::new(1, 100, 100);
        let d = Tuple3::new(2, 0, 0);
        assert!(c < d);
    }

    #[test]
    fn nested_tuples_are_elements() {
        let a = Tuple2::new(Tuple2::new(1, "x"), 5);
        let b = Tuple2::new(Tuple2::new(1, "y"), 0);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(
            a.hash_with(&Natural),
            hash::combine(hash::combine(1, "x".element_hash()), 5)
        );
    }

    #[test]
    fn renders_with_separators() {
        assert_eq!(Tuple1::new("only").to_string(), "(only)");
        assert_eq!(Tuple3::new(1, 2, 3).to_string(), "(1, 2, 3)");
        assert_eq!(Tuple2::new("foo", 2.5).to_string(), "(foo, 2.5)");
    }

    #[test]
    fn converts_from_builtin_tuples() {
        let pair: Tuple2<u8, char> = (1, 'a').into();
        assert_eq!(pair, Tuple2::new(1, 'a'));
        let single: Tuple1<&str> = ("x",).into();
        assert_eq!(single.into_inner(), ("x",));
    }
}
