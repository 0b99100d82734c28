//! Combining the hash codes of individual slots into the hash code of a whole tuple.
//!
//! The mixing step is the Bernstein-style `((h1 << 5) + h1) ^ h2`, evaluated with wrapping 32-bit
//! arithmetic. For three to eight hash codes, the codes are folded along a fixed pairwise tree
//! (not a naive left fold), so that tuple hash codes stay identical to those produced by other
//! implementations of the same scheme.
//!
//! # Examples
//!
//! ```
//! use mtuple::hash;
//!
//! assert_eq!(hash::combine(1, 2), 35);
//! assert_eq!(hash::combine4(1, 2, 3, 4), hash::combine(hash::combine(1, 2), hash::combine(3, 4)));
//! assert_eq!(hash::combine_all(&[1, 2, 3, 4]), hash::combine4(1, 2, 3, 4));
//! ```

/// Mix two hash codes into one.
#[inline]
pub const fn combine(h1: i32, h2: i32) -> i32 {
    (h1 << 5).wrapping_add(h1) ^ h2
}

/// `combine(combine(h1, h2), h3)`
#[inline]
pub const fn combine3(h1: i32, h2: i32, h3: i32) -> i32 {
    combine(combine(h1, h2), h3)
}

/// `combine(combine(h1, h2), combine(h3, h4))`
#[inline]
pub const fn combine4(h1: i32, h2: i32, h3: i32, h4: i32) -> i32 {
    combine(combine(h1, h2), combine(h3, h4))
}

/// `combine(combine4(h1..h4), h5)`
#[inline]
pub const fn combine5(h1: i32, h2: i32, h3: i32, h4: i32, h5: i32) -> i32 {
    combine(combine4(h1, h2, h3, h4), h5)
}

/// `combine(combine4(h1..h4), combine(h5, h6))`
#[inline]
pub const fn combine6(h1: i32, h2: i32, h3: i32, h4: i32, h5: i32, h6: i32) -> i32 {
    combine(combine4(h1, h2, h3, h4), combine(h5, h6))
}

/// `combine(combine4(h1..h4), combine3(h5, h6, h7))`
#[inline]
pub const fn combine7(h1: i32, h2: i32, h3: i32, h4: i32, h5: i32, h6: i32, h7: i32) -> i32 {
    combine(combine4(h1, h2, h3, h4), combine3(h5, h6, h7))
}

/// `combine(combine4(h1..h4), combine4(h5..h8))`
#[inline]
#[allow(clippy::too_many_arguments)]
pub const fn combine8(
    h1: i32,
    h2: i32,
    h3: i32,
    h4: i32,
    h5: i32,
    h6: i32,
    h7: i32,
    h8: i32,
) -> i32 {
    combine(combine4(h1, h2, h3, h4), combine4(h5, h6, h7, h8))
}

/// Combine a slice of hash codes, picking the fixed tree for its length.
///
/// An empty slice hashes to `0` and a single code is returned unchanged. Slices longer than eight
/// combine the tree of their first eight codes with the combination of the remainder; tuples
/// themselves never produce such slices, since an [`ExtendedTuple`](crate::ExtendedTuple) caps
/// its hash window at eight codes.
pub fn combine_all(hashes: &[i32]) -> i32 {
    match *hashes {
        [] => 0,
        [h1] => h1,
        [h1, h2] => combine(h1, h2),
        [h1, h2, h3] => combine3(h1, h2, h3),
        [h1, h2, h3, h4] => combine4(h1, h2, h3, h4),
        [h1, h2, h3, h4, h5] => combine5(h1, h2, h3, h4, h5),
        [h1, h2, h3, h4, h5, h6] => combine6(h1, h2, h3, h4, h5, h6),
        [h1, h2, h3, h4, h5, h6, h7] => combine7(h1, h2, h3, h4, h5, h6, h7),
        [h1, h2, h3, h4, h5, h6, h7, h8] => combine8(h1, h2, h3, h4, h5, h6, h7, h8),
        _ => combine(combine_all(&hashes[..8]), combine_all(&hashes[8..])),
    }
}
