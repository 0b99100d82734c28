//! Tuples of arity 8 and above.
//!
//! An [`ExtendedTuple`] holds seven slots of its own plus a `rest` slot containing another tuple,
//! which carries every slot beyond the seventh. Arbitrarily large tuples are built by nesting to
//! the right: a tuple of 12 slots is seven slots followed by a [`Tuple5`](crate::Tuple5), and a
//! tuple of 15 slots is seven slots followed by an extended tuple of 8.
//!
//! The `rest` slot is reference counted. Several extended tuples may share one `rest`, in which
//! case mutating it through any of them is visible through all of them. Sharing only happens
//! when a shared `rest` is passed in on purpose; [`Clone`] copies the `rest` instead:
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//! use mtuple::{ExtendedTuple, Tuple1};
//!
//! let shared = Rc::new(RefCell::new(Tuple1::new(8)));
//! let a = ExtendedTuple::with_shared_rest(1, 2, 3, 4, 5, 6, 7, shared.clone());
//! let b = ExtendedTuple::with_shared_rest(1, 2, 3, 4, 5, 6, 7, shared.clone());
//!
//! shared.borrow_mut().set_item1(99);
//! assert_eq!(a.to_string(), "(1, 2, 3, 4, 5, 6, 7, 99)");
//! assert_eq!(a, b);
//!
//! let c = a.clone();
//! if let Some(rest) = c.rest() {
//!     rest.borrow_mut().set_item1(100);
//! }
//! assert_eq!(a.to_string(), "(1, 2, 3, 4, 5, 6, 7, 99)");
//! assert_eq!(c.to_string(), "(1, 2, 3, 4, 5, 6, 7, 100)");
//! ```
//!
//! Only tuples can extend a tuple, so the following does not compile:
//!
//! ```compile_fail
//! use mtuple::ExtendedTuple;
//!
//! let t = ExtendedTuple::new(1, 2, 3, 4, 5, 6, 7, 8);
//! ```

use crate::{
    hash, Comparer, Element, Error, Natural, Render, Strategy, StructuralEq, StructuralHash,
    StructuralOrd, TupleShape,
};
use std::{
    any::{type_name, Any},
    cell::RefCell,
    cmp::Ordering,
    fmt,
    rc::Rc,
};

/// The number of slots an [`ExtendedTuple`] stores itself, before its `rest`.
pub const INLINE_SLOTS: usize = 7;

/// The most slot hash codes an [`ExtendedTuple`] folds into its own hash code.
pub const HASH_WINDOW: usize = 8;

/// A mutable tuple of seven slots followed by a `rest` tuple holding the remaining slots.
///
/// A default-constructed extended tuple has no `rest` at all: its seven slots hold their default
/// values and `rest` is [`None`] until one is supplied with [`set_rest`](ExtendedTuple::set_rest)
/// or [`set_shared_rest`](ExtendedTuple::set_shared_rest). Until then, the tuple has seven slots,
/// renders and hashes as those seven slots, and orders before any otherwise-equal tuple that does
/// have a `rest`.
///
/// Cloning an extended tuple clones its `rest` too, so the clone never aliases the original.
/// A `rest` is shared only when it is handed over explicitly, with
/// [`with_shared_rest`](ExtendedTuple::with_shared_rest) or
/// [`set_shared_rest`](ExtendedTuple::set_shared_rest).
///
/// # Examples
///
/// ```
/// use mtuple::{ExtendedTuple, Tuple2, TupleShape};
///
/// let mut t = ExtendedTuple::new(1, 2, 3, 4, 5, 6, 7, Tuple2::new(8, 9));
/// assert_eq!(t.size(), 9);
/// assert_eq!(t.to_string(), "(1, 2, 3, 4, 5, 6, 7, 8, 9)");
///
/// t.set_item7(70);
/// if let Some(rest) = t.rest() {
///     rest.borrow_mut().set_item2(90);
/// }
/// assert_eq!(t.to_string(), "(1, 2, 3, 4, 5, 6, 70, 8, 90)");
/// ```
#[derive(Derivative, Debug)]
#[derivative(Default(
    bound = "T1: Default, T2: Default, T3: Default, T4: Default, T5: Default, T6: Default, \
             T7: Default"
))]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R: TupleShape> {
    item1: T1,
    item2: T2,
    item3: T3,
    item4: T4,
    item5: T5,
    item6: T6,
    item7: T7,
    rest: Option<Rc<RefCell<R>>>,
}

macro_rules! slot_accessors {
    ($($slot:literal => $field:ident, $field_mut:ident, $setter:ident: $param:ident;)*) => {
        $(
            #[doc = concat!("The value of slot ", $slot, ".")]
            pub fn $field(&self) -> &$param {
                &self.$field
            }

            #[doc = concat!("A mutable reference to slot ", $slot, ".")]
            pub fn $field_mut(&mut self) -> &mut $param {
                &mut self.$field
            }

            #[doc = concat!("Overwrite the value of slot ", $slot, ".")]
            pub fn $setter(&mut self, value: $param) {
                self.$field = value;
            }
        )*
    };
}

impl<T1, T2, T3, T4, T5, T6, T7, R: TupleShape> ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R> {
    /// Create an extended tuple with every slot supplied, giving it sole ownership of `rest`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item1: T1,
        item2: T2,
        item3: T3,
        item4: T4,
        item5: T5,
        item6: T6,
        item7: T7,
        rest: R,
    ) -> Self {
        Self::with_shared_rest(
            item1,
            item2,
            item3,
            item4,
            item5,
            item6,
            item7,
            Rc::new(RefCell::new(rest)),
        )
    }

    /// Create an extended tuple whose `rest` is shared with whoever else holds `rest`.
    #[allow(clippy::too_many_arguments)]
    pub fn with_shared_rest(
        item1: T1,
        item2: T2,
        item3: T3,
        item4: T4,
        item5: T5,
        item6: T6,
        item7: T7,
        rest: Rc<RefCell<R>>,
    ) -> Self {
        ExtendedTuple {
            item1,
            item2,
            item3,
            item4,
            item5,
            item6,
            item7,
            rest: Some(rest),
        }
    }

    /// Create an extended tuple from an untyped `rest` value, failing unless it is an `R`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RestNotTuple`] if `rest` is not of the declared rest tuple type.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    /// use mtuple::{Error, ExtendedTuple, Tuple1};
    ///
    /// let rest: Box<dyn Any> = Box::new(Tuple1::new(8));
    /// let t = ExtendedTuple::<_, _, _, _, _, _, _, Tuple1<i32>>::from_any_rest(
    ///     1, 2, 3, 4, 5, 6, 7, rest,
    /// );
    /// assert!(t.is_ok());
    ///
    /// let not_a_tuple: Box<dyn Any> = Box::new(8);
    /// let t = ExtendedTuple::<_, _, _, _, _, _, _, Tuple1<i32>>::from_any_rest(
    ///     1, 2, 3, 4, 5, 6, 7, not_a_tuple,
    /// );
    /// assert!(matches!(t, Err(Error::RestNotTuple { .. })));
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_any_rest(
        item1: T1,
        item2: T2,
        item3: T3,
        item4: T4,
        item5: T5,
        item6: T6,
        item7: T7,
        rest: Box<dyn Any>,
    ) -> Result<Self, Error>
    where
        R: Any,
    {
        match rest.downcast::<R>() {
            Ok(rest) => Ok(Self::new(
                item1, item2, item3, item4, item5, item6, item7, *rest,
            )),
            Err(_) => {
                let expected = type_name::<R>();
                tracing::debug!(expected, "rejected extended tuple rest of the wrong type");
                Err(Error::RestNotTuple { expected })
            }
        }
    }

    slot_accessors! {
        1 => item1, item1_mut, set_item1: T1;
        2 => item2, item2_mut, set_item2: T2;
        3 => item3, item3_mut, set_item3: T3;
        4 => item4, item4_mut, set_item4: T4;
        5 => item5, item5_mut, set_item5: T5;
        6 => item6, item6_mut, set_item6: T6;
        7 => item7, item7_mut, set_item7: T7;
    }

    /// The tuple holding every slot after the seventh, if one has been supplied.
    pub fn rest(&self) -> Option<&Rc<RefCell<R>>> {
        self.rest.as_ref()
    }

    /// Replace the `rest` of this tuple with a new one owned only by this tuple.
    pub fn set_rest(&mut self, rest: R) {
        self.rest = Some(Rc::new(RefCell::new(rest)));
    }

    /// Replace the `rest` of this tuple with one that may be shared with other holders.
    pub fn set_shared_rest(&mut self, rest: Rc<RefCell<R>>) {
        self.rest = Some(rest);
    }

    /// Remove and return the `rest` of this tuple, leaving it with none.
    pub fn take_rest(&mut self) -> Option<Rc<RefCell<R>>> {
        self.rest.take()
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R> Clone for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    T1: Clone,
    T2: Clone,
    T3: Clone,
    T4: Clone,
    T5: Clone,
    T6: Clone,
    T7: Clone,
    R: TupleShape + Clone,
{
    fn clone(&self) -> Self {
        ExtendedTuple {
            item1: self.item1.clone(),
            item2: self.item2.clone(),
            item3: self.item3.clone(),
            item4: self.item4.clone(),
            item5: self.item5.clone(),
            item6: self.item6.clone(),
            item7: self.item7.clone(),
            rest: self
                .rest
                .as_ref()
                .map(|rest| Rc::new(RefCell::new(rest.borrow().clone()))),
        }
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R: TupleShape> TupleShape
    for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
{
    fn size(&self) -> usize {
        INLINE_SLOTS + self.rest.as_ref().map_or(0, |rest| rest.borrow().size())
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R> Render for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    T1: fmt::Display,
    T2: fmt::Display,
    T3: fmt::Display,
    T4: fmt::Display,
    T5: fmt::Display,
    T6: fmt::Display,
    T7: fmt::Display,
    R: TupleShape + Render,
{
    fn render_into(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "{}, {}, {}, {}, {}, {}, {}",
            self.item1, self.item2, self.item3, self.item4, self.item5, self.item6, self.item7,
        )?;
        match &self.rest {
            Some(rest) => {
                out.write_str(", ")?;
                rest.borrow().render_into(out)
            }
            None => out.write_str(")"),
        }
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R> fmt::Display for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    Self: Render,
    R: TupleShape,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.render_into(f)
    }
}

impl<C, T1, T2, T3, T4, T5, T6, T7, R> StructuralEq<C>
    for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    C: ?Sized
        + Comparer<T1>
        + Comparer<T2>
        + Comparer<T3>
        + Comparer<T4>
        + Comparer<T5>
        + Comparer<T6>
        + Comparer<T7>,
    R: TupleShape + StructuralEq<C>,
{
    fn equals_with(&self, other: &Self, comparer: &C) -> bool {
        <C as Comparer<T1>>::equals(comparer, &self.item1, &other.item1)
            && <C as Comparer<T2>>::equals(comparer, &self.item2, &other.item2)
            && <C as Comparer<T3>>::equals(comparer, &self.item3, &other.item3)
            && <C as Comparer<T4>>::equals(comparer, &self.item4, &other.item4)
            && <C as Comparer<T5>>::equals(comparer, &self.item5, &other.item5)
            && <C as Comparer<T6>>::equals(comparer, &self.item6, &other.item6)
            && <C as Comparer<T7>>::equals(comparer, &self.item7, &other.item7)
            && match (&self.rest, &other.rest) {
                (Some(rest), Some(other_rest)) => {
                    rest.borrow().equals_with(&other_rest.borrow(), comparer)
                }
                (None, None) => true,
                _ => false,
            }
    }
}

impl<C, T1, T2, T3, T4, T5, T6, T7, R> StructuralOrd<C>
    for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    C: ?Sized
        + Strategy
        + Comparer<T1>
        + Comparer<T2>
        + Comparer<T3>
        + Comparer<T4>
        + Comparer<T5>
        + Comparer<T6>
        + Comparer<T7>,
    R: TupleShape + StructuralOrd<C>,
{
    fn compare_with(
        &self,
        other: &Self,
        comparer: &C,
    ) -> Result<Ordering, <C as Strategy>::Error> {
        // Later slots are not even compared once an earlier one has decided the order
        macro_rules! decide {
            ($param:ident, $field:ident) => {
                match <C as Comparer<$param>>::compare(comparer, &self.$field, &other.$field)? {
                    Ordering::Equal => {}
                    unequal => return Ok(unequal),
                }
            };
        }

        decide!(T1, item1);
        decide!(T2, item2);
        decide!(T3, item3);
        decide!(T4, item4);
        decide!(T5, item5);
        decide!(T6, item6);
        decide!(T7, item7);
        match (&self.rest, &other.rest) {
            (Some(rest), Some(other_rest)) => {
                rest.borrow().compare_with(&other_rest.borrow(), comparer)
            }
            (None, None) => Ok(Ordering::Equal),
            (None, Some(_)) => Ok(Ordering::Less),
            (Some(_), None) => Ok(Ordering::Greater),
        }
    }
}

impl<C, T1, T2, T3, T4, T5, T6, T7, R> StructuralHash<C>
    for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    C: ?Sized
        + Comparer<T1>
        + Comparer<T2>
        + Comparer<T3>
        + Comparer<T4>
        + Comparer<T5>
        + Comparer<T6>
        + Comparer<T7>,
    R: TupleShape + StructuralHash<C>,
{
    /// Hash at most the last [`HASH_WINDOW`] slots of this tuple.
    ///
    /// If `rest` alone has at least that many slots, the hash code of this tuple is the hash code
    /// of `rest`, and the seven slots held here do not contribute at all. Otherwise, just enough of
    /// the trailing slots held here are combined with the hash code of `rest` to make up eight.
    fn hash_with(&self, comparer: &C) -> i32 {
        let slot_hashes = || -> [i32; INLINE_SLOTS] {
            [
                <C as Comparer<T1>>::hash(comparer, &self.item1),
                <C as Comparer<T2>>::hash(comparer, &self.item2),
                <C as Comparer<T3>>::hash(comparer, &self.item3),
                <C as Comparer<T4>>::hash(comparer, &self.item4),
                <C as Comparer<T5>>::hash(comparer, &self.item5),
                <C as Comparer<T6>>::hash(comparer, &self.item6),
                <C as Comparer<T7>>::hash(comparer, &self.item7),
            ]
        };

        let rest = match &self.rest {
            Some(rest) => rest.borrow(),
            None => return hash::combine_all(&slot_hashes()),
        };

        let rest_size = rest.size();
        if rest_size >= HASH_WINDOW {
            return rest.hash_with(comparer);
        }

        let inline = (HASH_WINDOW - rest_size).min(INLINE_SLOTS);
        let mut window = [0; HASH_WINDOW];
        window[..inline].copy_from_slice(&slot_hashes()[INLINE_SLOTS - inline..]);
        window[inline] = rest.hash_with(comparer);
        hash::combine_all(&window[..=inline])
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R> PartialEq for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    Self: StructuralEq<Natural>,
    R: TupleShape,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals_with(other, &Natural)
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R> Eq for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    Self: StructuralEq<Natural>,
    R: TupleShape,
{
}

impl<T1, T2, T3, T4, T5, T6, T7, R> PartialOrd for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    Self: StructuralEq<Natural> + StructuralOrd<Natural>,
    R: TupleShape,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R> Ord for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    Self: StructuralEq<Natural> + StructuralOrd<Natural>,
    R: TupleShape,
{
    fn cmp(&self, other: &Self) -> Ordering {
        match self.compare_with(other, &Natural) {
            Ok(ordering) => ordering,
            Err(never) => match never {},
        }
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R> std::hash::Hash
    for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    Self: StructuralHash<Natural>,
    R: TupleShape,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_with(&Natural));
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, R> Element for ExtendedTuple<T1, T2, T3, T4, T5, T6, T7, R>
where
    Self: StructuralEq<Natural> + StructuralOrd<Natural> + StructuralHash<Natural>,
    R: TupleShape,
{
    fn element_eq(&self, other: &Self) -> bool {
        self.equals_with(other, &Natural)
    }

    fn element_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn element_hash(&self) -> i32 {
        self.hash_with(&Natural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    type Eight = ExtendedTuple<i32, i32, i32, i32, i32, i32, i32, Tuple1<i32>>;

    fn eight(base: i32) -> Eight {
        ExtendedTuple::new(
            base,
            base + 1,
            base + 2,
            base + 3,
            base + 4,
            base + 5,
            base + 6,
            Tuple1::new(base + 7),
        )
    }

    #[test]
    fn default_has_no_rest() {
        let t: ExtendedTuple<i32, f64, f32, u64, String, u8, bool, Tuple1<i16>> =
            ExtendedTuple::default();
        assert_eq!(*t.item1(), 0);
        assert_eq!(t.item5(), "");
        assert!(!*t.item7());
        assert!(t.rest().is_none());
        assert_eq!(t.size(), INLINE_SLOTS);
        assert_eq!(t.to_string(), "(0, 0, 0, 0, , 0, false)");
    }

    #[test]
    fn absent_rest_behaves_like_seven_slots() {
        let mut with_rest = eight(1);
        let rest = with_rest.take_rest();
        assert!(rest.is_some());
        let seven = Tuple7::new(1, 2, 3, 4, 5, 6, 7);

        assert_eq!(with_rest.hash_with(&Natural), seven.hash_with(&Natural));
        assert_eq!(with_rest.to_string(), seven.to_string());
        assert!(with_rest < eight(1));
        assert_ne!(with_rest, eight(1));

        let mut other = eight(1);
        let _ = other.take_rest();
        assert_eq!(with_rest, other);
    }

    #[test]
    fn accessors_reach_every_slot() {
        let mut t = eight(0);
        t.set_item1(10);
        *t.item4_mut() = 40;
        t.set_item7(70);
        assert_eq!((*t.item1(), *t.item4(), *t.item7()), (10, 40, 70));
        t.set_rest(Tuple1::new(80));
        assert_eq!(t.to_string(), "(10, 1, 2, 40, 4, 5, 70, 80)");
    }

    #[test]
    fn rest_comparison_breaks_ties() {
        let a = eight(0);
        let b = eight(0);
        if let Some(rest) = b.rest() {
            rest.borrow_mut().set_item1(100);
        }
        assert!(a < b);
        assert_eq!(a.compare_with(&b, &Natural), Ok(Ordering::Less));
        assert!(!a.equals_with(&b, &Natural));
    }

    #[test]
    fn inline_slots_take_precedence_over_rest() {
        let a = ExtendedTuple::new(0, 0, 0, 0, 0, 0, 1, Tuple1::new(0));
        let b = ExtendedTuple::new(0, 0, 0, 0, 0, 0, 0, Tuple1::new(100));
        assert!(a > b);
    }

    #[test]
    fn single_slot_rest_hashes_all_eight() {
        let t = eight(1);
        assert_eq!(t.hash_with(&Natural), hash::combine8(1, 2, 3, 4, 5, 6, 7, 8));
    }

    #[test]
    fn window_sizes_follow_rest_size() {
        let rest = Tuple6::new(10, 20, 30, 40, 50, 60);
        let t = ExtendedTuple::new(1, 2, 3, 4, 5, 6, 7, rest.clone());
        assert_eq!(
            t.hash_with(&Natural),
            hash::combine3(6, 7, rest.hash_with(&Natural))
        );

        let rest = Tuple7::new(10, 20, 30, 40, 50, 60, 70);
        let t = ExtendedTuple::new(1, 2, 3, 4, 5, 6, 7, rest.clone());
        assert_eq!(t.hash_with(&Natural), hash::combine(7, rest.hash_with(&Natural)));
    }

    #[test]
    fn clone_copies_rest() {
        let original = eight(1);
        let copy = original.clone();
        assert_eq!(copy, original);

        if let Some(rest) = copy.rest() {
            rest.borrow_mut().set_item1(99);
        }
        assert_eq!(original.to_string(), "(1, 2, 3, 4, 5, 6, 7, 8)");
        assert_eq!(copy.to_string(), "(1, 2, 3, 4, 5, 6, 7, 99)");

        let (a, b) = (original.rest(), copy.rest());
        assert!(matches!((a, b), (Some(a), Some(b)) if !Rc::ptr_eq(a, b)));
    }

    #[test]
    fn clone_without_rest_stays_without_rest() {
        let mut original = eight(1);
        let _ = original.take_rest();
        assert!(original.clone().rest().is_none());
    }

    #[test]
    fn std_hash_agrees_with_natural_hash() {
        use std::collections::HashSet;

        let set: HashSet<Eight> = vec![eight(0), eight(0), eight(1)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
