//! Exact big-integer shifts.
//!
//! Shift amounts that fit in 32 bits use the native big-integer shift.
//! Larger amounts go through `2^n` so that no shift count is ever
//! narrowed to a machine word.

use num_bigint::BigInt;
use num_traits::{Pow, Signed, ToPrimitive, Zero};

fn pow2(n: &BigInt) -> BigInt {
    Pow::pow(&BigInt::from(2u8), n.magnitude())
}

/// `i << n` for non-negative `n`.
pub(crate) fn lsh(i: &BigInt, n: &BigInt) -> BigInt {
    if let Some(u) = n.to_u32() {
        return i << u;
    }
    i * pow2(n)
}

/// `i >> n` for non-negative `n`, rounding towards negative infinity.
pub(crate) fn rsh(i: &BigInt, n: &BigInt) -> BigInt {
    if let Some(u) = n.to_u32() {
        return i >> u;
    }
    // Floor division, matching the shift rather than truncating division.
    let p = pow2(n);
    let q = i / &p;
    if i.is_negative() && !(i % &p).is_zero() {
        q - 1
    } else {
        q
    }
}
