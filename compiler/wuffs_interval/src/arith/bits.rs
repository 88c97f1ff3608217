//! Bitwise `&` and `|`.
//!
//! Both operands are split into a negative and a non-negative piece. Pieces
//! that are both non-negative get exact bounds from the bit patterns of
//! their ends. Negative pieces are mapped onto non-negative ones through
//! `!x == -x - 1`, using `!(x & y) == !x | !y` and its dual.

use std::cmp::{max, min};

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::fill_right;
use crate::bound::Bound;
use crate::interval::Interval;

/// A piece of values `>= 0`. A `hi` of `None` is unbounded.
struct NonNeg {
    lo: BigInt,
    hi: Option<BigInt>,
}

/// A piece of values `< 0`. A `lo` of `None` is unbounded.
struct Neg {
    lo: Option<BigInt>,
    hi: BigInt,
}

/// A finite range `[lo, hi]`. The ends may have either sign.
struct Span {
    lo: BigInt,
    hi: BigInt,
}

fn not(i: &BigInt) -> BigInt {
    -i - BigInt::one()
}

fn and_not(a: &BigInt, b: &BigInt) -> BigInt {
    a & &not(b)
}

/// `(1 << n) - 1`.
fn mask(n: u64) -> BigInt {
    (BigInt::one() << n) - BigInt::one()
}

fn not_bound(b: &Bound) -> Bound {
    match b {
        Bound::NegInf => Bound::PosInf,
        Bound::Finite(i) => Bound::Finite(not(i)),
        Bound::PosInf => Bound::NegInf,
    }
}

/// Applies `!` to every element.
fn not_interval(x: &Interval) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    Interval {
        lo: not_bound(&x.hi),
        hi: not_bound(&x.lo),
    }
}

impl NonNeg {
    fn complement(&self) -> Neg {
        Neg {
            lo: self.hi.as_ref().map(not),
            hi: not(&self.lo),
        }
    }

    fn span_to(&self, hi: &BigInt) -> Span {
        Span {
            lo: self.lo.clone(),
            hi: hi.clone(),
        }
    }

    fn to_interval(&self) -> Interval {
        Interval::from_options(Some(self.lo.clone()), self.hi.clone())
    }
}

impl Neg {
    fn complement(&self) -> NonNeg {
        NonNeg {
            lo: not(&self.hi),
            hi: self.lo.as_ref().map(not),
        }
    }
}

impl Span {
    fn complement(&self) -> Span {
        Span {
            lo: not(&self.hi),
            hi: not(&self.lo),
        }
    }
}

/// The negative and non-negative pieces of a non-empty interval.
fn split2(x: &Interval) -> (Option<Neg>, Option<NonNeg>) {
    let neg = x.contains_negative().then(|| Neg {
        lo: x.lo.finite().cloned(),
        hi: match x.hi.finite() {
            Some(hi) if *hi < BigInt::from(-1) => hi.clone(),
            _ => BigInt::from(-1),
        },
    });
    let non = x.contains_non_negative().then(|| NonNeg {
        lo: match x.lo.finite() {
            Some(lo) if *lo > BigInt::zero() => lo.clone(),
            _ => BigInt::zero(),
        },
        hi: x.hi.finite().cloned(),
    });
    (neg, non)
}

/// The largest `a & b` over `a` in `x` and `b` in `y`.
///
/// For non-overlapping spans the best candidate keeps one maximum whole and
/// clears the leftmost bit of the other maximum that can drop below it
/// without leaving its span, setting every bit right of it.
fn and_max(x: &Span, y: &Span) -> BigInt {
    if y.hi >= x.lo && x.hi >= y.lo {
        return min(&x.hi, &y.hi).clone();
    }
    let flip = |x: &Span, y: &Span| {
        let j = fill_right(&and_not(&x.hi, &x.lo));
        let j = fill_right(&and_not(&(&j & &x.hi), &y.hi));
        let i = and_not(&x.hi, &j);
        ((j >> 1u32) | i) & &y.hi
    };
    max(flip(x, y), flip(y, x))
}

/// The largest `a | b` over `a` in `x` and `b` in `y`.
fn or_max(x: &Span, y: &Span) -> BigInt {
    let droppable = fill_right(&(and_not(&x.hi, &x.lo) | and_not(&y.hi, &y.lo)));
    let available = droppable & &x.hi & &y.hi;
    (fill_right(&available) >> 1u32) | &x.hi | &y.hi
}

fn and_both_non_neg(x: &NonNeg, y: &NonNeg) -> Interval {
    let (x_hi, y_hi) = match (&x.hi, &y.hi) {
        (Some(x_hi), Some(y_hi)) => (x_hi, y_hi),
        (Some(hi), None) | (None, Some(hi)) => return Interval::new(0i64, hi.clone()),
        (None, None) => return Interval::at_least(0),
    };
    let x = x.span_to(x_hi);
    let y = y.span_to(y_hi);
    let lo = not(&or_max(&x.complement(), &y.complement()));
    Interval::new(lo, and_max(&x, &y))
}

fn or_both_non_neg(x: &NonNeg, y: &NonNeg) -> Interval {
    let (x, y, hi) = match (&x.hi, &y.hi) {
        (Some(x_hi), Some(y_hi)) => {
            let x = x.span_to(x_hi);
            let y = y.span_to(y_hi);
            let hi = Bound::Finite(or_max(&x, &y));
            (x, y, hi)
        }
        _ => {
            // a | b is at least each of a and b.
            if x.to_interval().contains(&y.lo) {
                return Interval::at_least(y.lo.clone());
            }
            if y.to_interval().contains(&x.lo) {
                return Interval::at_least(x.lo.clone());
            }
            // The pieces are disjoint, and the unbounded one lies above the
            // bounded one.
            let (bounded, unbounded) = match (&x.hi, &y.hi) {
                (Some(hi), None) => (x.span_to(hi), &y.lo),
                (None, Some(hi)) => (y.span_to(hi), &x.lo),
                _ => return Interval::at_least(max(&x.lo, &y.lo).clone()),
            };
            let unbounded = Span {
                lo: unbounded.clone(),
                hi: fill_right(unbounded),
            };
            (bounded, unbounded, Bound::PosInf)
        }
    };
    let lo = not(&and_max(&x.complement(), &y.complement()));
    Interval {
        lo: Bound::Finite(lo),
        hi,
    }
}

fn and_one_neg(neg: &Neg, non: &NonNeg) -> Interval {
    let Some(neg_lo) = &neg.lo else {
        return Interval::from_options(Some(BigInt::zero()), non.hi.clone());
    };
    // Below the mask's width every element of neg agrees with its low bits,
    // so neg can be replaced by its biased non-negative image.
    let width = max(neg_lo.bits(), non.hi.as_ref().unwrap_or(&non.lo).bits());
    let m = mask(width);
    let biased = NonNeg {
        lo: neg_lo & &m,
        hi: Some(&neg.hi & &m),
    };
    match &non.hi {
        Some(_) => and_both_non_neg(&biased, non),
        None => {
            let capped = NonNeg {
                lo: non.lo.clone(),
                hi: Some(m),
            };
            Interval {
                lo: and_both_non_neg(&biased, &capped).lo,
                hi: Bound::PosInf,
            }
        }
    }
}

fn or_one_neg(neg: &Neg, non: &NonNeg) -> Interval {
    not_interval(&and_one_neg(&non.complement(), &neg.complement()))
}

impl Interval {
    /// `self & other`.
    pub fn bit_and(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        let (nx, px) = split2(self);
        let (ny, py) = split2(other);

        let mut z = Interval::empty();
        if let Some(nx) = &nx {
            if let Some(ny) = &ny {
                let w = or_both_non_neg(&nx.complement(), &ny.complement());
                z = z.unite(&not_interval(&w));
            }
            if let Some(py) = &py {
                z = z.unite(&and_one_neg(nx, py));
            }
        }
        if let Some(px) = &px {
            if let Some(ny) = &ny {
                z = z.unite(&and_one_neg(ny, px));
            }
            if let Some(py) = &py {
                z = z.unite(&and_both_non_neg(px, py));
            }
        }
        z
    }

    /// `self | other`.
    pub fn bit_or(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        let (nx, px) = split2(self);
        let (ny, py) = split2(other);

        let mut z = Interval::empty();
        if let Some(nx) = &nx {
            if let Some(ny) = &ny {
                let w = and_both_non_neg(&nx.complement(), &ny.complement());
                z = z.unite(&not_interval(&w));
            }
            if let Some(py) = &py {
                z = z.unite(&or_one_neg(nx, py));
            }
        }
        if let Some(px) = &px {
            if let Some(ny) = &ny {
                z = z.unite(&or_one_neg(ny, px));
            }
            if let Some(py) = &py {
                z = z.unite(&or_both_non_neg(px, py));
            }
        }
        z
    }
}
