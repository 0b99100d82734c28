use {
    mtuple::prelude::*,
    quickcheck::{Gen, QuickCheck, TestResult},
    std::cmp::Ordering,
};

type Slots = (i32, String, f64, Option<i64>);

fn build(slots: Slots) -> Tuple4<i32, String, f64, Option<i64>> {
    slots.into()
}

fn build_extended(
    slots: Slots,
    rest: Slots,
) -> ExtendedTuple<i32, i32, i32, i32, i32, i32, i32, Tuple4<i32, String, f64, Option<i64>>> {
    let (a, _, _, _) = slots;
    ExtendedTuple::new(a, a, a, a, a, a, a, build(rest))
}

fn reflexivity_property(slots: Slots) -> TestResult {
    let t = build(slots.clone());
    let u = build(slots);
    TestResult::from_bool(
        t.equals_with(&u, &Natural)
            && t.compare_with(&u, &Natural) == Ok(Ordering::Equal)
            && t.hash_with(&Natural) == u.hash_with(&Natural),
    )
}

fn symmetry_property(a: Slots, b: Slots) -> TestResult {
    let (a, b) = (build(a), build(b));
    let forward = a.compare_with(&b, &Natural);
    let backward = b.compare_with(&a, &Natural);
    TestResult::from_bool(
        a.equals_with(&b, &Natural) == b.equals_with(&a, &Natural)
            && forward.map(Ordering::reverse) == backward,
    )
}

fn ordering_agrees_with_equality_property(a: Slots, b: Slots, c: Slots) -> TestResult {
    let (first, second) = (build_extended(a.clone(), b), build_extended(a, c));
    let equal = first == second;
    let ordered_equal = first.cmp(&second) == Ordering::Equal;
    if equal != ordered_equal {
        return TestResult::error(format!(
            "{:?} and {:?} disagree: eq = {}, cmp = {:?}",
            first,
            second,
            equal,
            first.cmp(&second)
        ));
    }
    if equal && first.hash_with(&Natural) != second.hash_with(&Natural) {
        return TestResult::error(format!(
            "{:?} and {:?} are equal but hash apart",
            first, second
        ));
    }
    TestResult::passed()
}

#[test]
fn reflexivity() {
    QuickCheck::new()
        .gen(Gen::new(13))
        .quickcheck(reflexivity_property as fn(_) -> TestResult)
}

#[test]
fn symmetry() {
    QuickCheck::new()
        .gen(Gen::new(13))
        .quickcheck(symmetry_property as fn(_, _) -> TestResult)
}

#[test]
fn ordering_agrees_with_equality() {
    QuickCheck::new()
        .gen(Gen::new(13))
        .quickcheck(ordering_agrees_with_equality_property as fn(_, _, _) -> TestResult)
}
