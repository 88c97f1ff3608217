//! Sound arithmetic over intervals.
//!
//! Each operation returns an interval containing `x op y` for every `x` in
//! the left operand and every `y` in the right operand. The sign-splitting
//! operations compute a bound per non-empty sign quadrant and take their
//! hull.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::big;
use crate::bound::Bound;
use crate::interval::Interval;

mod bits;


/// Running min/max over candidate bounds. Starts out empty.
struct Hull {
    lo: Bound,
    hi: Bound,
}

impl Hull {
    fn new() -> Self {
        Hull {
            lo: Bound::PosInf,
            hi: Bound::NegInf,
        }
    }

    fn from_interval(x: &Interval) -> Self {
        Hull {
            lo: x.lo.clone(),
            hi: x.hi.clone(),
        }
    }

    fn zero() -> Self {
        Hull {
            lo: Bound::Finite(BigInt::zero()),
            hi: Bound::Finite(BigInt::zero()),
        }
    }

    fn lower_min(&mut self, b: Bound) {
        if b < self.lo {
            self.lo = b;
        }
    }

    fn raise_max(&mut self, b: Bound) {
        if b > self.hi {
            self.hi = b;
        }
    }

    fn into_interval(self) -> Interval {
        Interval {
            lo: self.lo,
            hi: self.hi,
        }
    }
}

/// `combine(a, b)` when both are finite, otherwise `inf`.
fn finite_or(a: &Bound, b: &Bound, inf: Bound, combine: fn(&BigInt, &BigInt) -> BigInt) -> Bound {
    match (a, b) {
        (Bound::Finite(a), Bound::Finite(b)) => Bound::Finite(combine(a, b)),
        _ => inf,
    }
}

fn mul(a: &BigInt, b: &BigInt) -> BigInt {
    a * b
}

/// Sets every bit below the highest set bit: 6 becomes 7, 8 becomes 15.
///
/// Zero and negative inputs are returned unchanged.
pub fn fill_right(i: &BigInt) -> BigInt {
    if i.sign() != num_bigint::Sign::Plus {
        return i.clone();
    }
    (BigInt::one() << i.bits()) - 1
}

impl Interval {
    /// `self + other`.
    pub fn add(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        Interval {
            lo: finite_or(&self.lo, &other.lo, Bound::NegInf, |a, b| a + b),
            hi: finite_or(&self.hi, &other.hi, Bound::PosInf, |a, b| a + b),
        }
    }

    /// `self - other`.
    pub fn sub(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        Interval {
            lo: finite_or(&self.lo, &other.hi, Bound::NegInf, |a, b| a - b),
            hi: finite_or(&self.hi, &other.lo, Bound::PosInf, |a, b| a - b),
        }
    }

    /// `self * other`.
    pub fn mul(&self, other: &Interval) -> Interval {
        self.mul_lsh(other, false)
    }

    /// `self << other`.
    ///
    /// `None` if `self` is non-empty and `other` contains a negative value.
    pub fn lsh(&self, other: &Interval) -> Option<Interval> {
        if !self.is_empty() && other.contains_negative() {
            return None;
        }
        Some(self.mul_lsh(other, true))
    }

    fn mul_lsh(&self, other: &Interval, shift: bool) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        if self.is_just_zero() || (!shift && other.is_just_zero()) {
            return Interval::zero();
        }

        let combine: fn(&BigInt, &BigInt) -> BigInt = if shift { big::lsh } else { mul };
        let x = self.parts();
        let y = other.parts();

        let mut ret = if y.has_zero && shift {
            Hull::from_interval(self)
        } else if y.has_zero || x.has_zero {
            Hull::zero()
        } else {
            Hull::new()
        };

        if let Some(nx) = &x.neg {
            if let Some(ny) = &y.neg {
                // Negative times negative is positive. Unreachable for shifts,
                // whose right operand was checked to be non-negative.
                ret.lower_min(Bound::Finite(combine(&nx.hi, &ny.hi)));
                ret.raise_max(finite_or(&nx.lo, &ny.lo, Bound::PosInf, combine));
            }
            if let Some(py) = &y.pos {
                // Negative times positive is negative.
                ret.lower_min(finite_or(&nx.lo, &py.hi, Bound::NegInf, combine));
                ret.raise_max(Bound::Finite(combine(&nx.hi, &py.lo)));
            }
        }

        if let Some(px) = &x.pos {
            if let Some(ny) = &y.neg {
                // Positive times negative is negative.
                ret.lower_min(finite_or(&px.hi, &ny.lo, Bound::NegInf, combine));
                ret.raise_max(Bound::Finite(combine(&px.lo, &ny.hi)));
            }
            if let Some(py) = &y.pos {
                // Positive times positive is positive.
                ret.lower_min(Bound::Finite(combine(&px.lo, &py.lo)));
                ret.raise_max(finite_or(&px.hi, &py.hi, Bound::PosInf, combine));
            }
        }

        ret.into_interval()
    }

    /// `self / other`, truncating towards zero.
    ///
    /// `None` if `other` contains zero. Empty operands give an empty result.
    pub fn quo(&self, other: &Interval) -> Option<Interval> {
        if self.is_empty() || other.is_empty() {
            return Some(Interval::empty());
        }
        if other.contains_zero() {
            return None;
        }
        if self.is_just_zero() {
            return Some(Interval::zero());
        }

        let x = self.parts();
        let y = other.parts();
        let zero = || Bound::Finite(BigInt::zero());

        let mut ret = if x.has_zero { Hull::zero() } else { Hull::new() };

        if let Some(nx) = &x.neg {
            if let Some(ny) = &y.neg {
                // Same signs give a non-negative quotient.
                ret.raise_max(match &nx.lo {
                    Bound::Finite(lo) => Bound::Finite(lo / &ny.hi),
                    _ => Bound::PosInf,
                });
                ret.lower_min(match &ny.lo {
                    Bound::Finite(lo) => Bound::Finite(&nx.hi / lo),
                    _ => zero(),
                });
            }
            if let Some(py) = &y.pos {
                // Opposite signs give a non-positive quotient.
                ret.lower_min(match &nx.lo {
                    Bound::Finite(lo) => Bound::Finite(lo / &py.lo),
                    _ => Bound::NegInf,
                });
                ret.raise_max(match &py.hi {
                    Bound::Finite(hi) => Bound::Finite(&nx.hi / hi),
                    _ => zero(),
                });
            }
        }

        if let Some(px) = &x.pos {
            if let Some(ny) = &y.neg {
                ret.lower_min(match &px.hi {
                    Bound::Finite(hi) => Bound::Finite(hi / &ny.hi),
                    _ => Bound::NegInf,
                });
                ret.raise_max(match &ny.lo {
                    Bound::Finite(lo) => Bound::Finite(&px.lo / lo),
                    _ => zero(),
                });
            }
            if let Some(py) = &y.pos {
                ret.raise_max(match &px.hi {
                    Bound::Finite(hi) => Bound::Finite(hi / &py.lo),
                    _ => Bound::PosInf,
                });
                ret.lower_min(match &py.hi {
                    Bound::Finite(hi) => Bound::Finite(&px.lo / hi),
                    _ => zero(),
                });
            }
        }

        Some(ret.into_interval())
    }

    /// `self >> other`, an arithmetic shift that rounds towards negative
    /// infinity.
    ///
    /// `None` if `other` contains a negative value.
    pub fn rsh(&self, other: &Interval) -> Option<Interval> {
        if self.is_empty() || other.is_empty() {
            return Some(Interval::empty());
        }
        if other.contains_negative() {
            return None;
        }
        if self.is_just_zero() {
            return Some(Interval::zero());
        }

        // A non-empty interval without negatives has a finite lower end.
        let Bound::Finite(y_lo) = &other.lo else {
            return None;
        };
        let x = self.parts();

        let mut ret = if x.has_zero { Hull::zero() } else { Hull::new() };

        if let Some(nx) = &x.neg {
            // A negative value shifted right stays negative.
            ret.lower_min(match &nx.lo {
                Bound::Finite(lo) => Bound::Finite(big::rsh(lo, y_lo)),
                _ => Bound::NegInf,
            });
            ret.raise_max(match &other.hi {
                Bound::Finite(hi) => Bound::Finite(big::rsh(&nx.hi, hi)),
                _ => Bound::from(-1),
            });
        }

        if let Some(px) = &x.pos {
            // A positive value shifted right is non-negative.
            ret.lower_min(match &other.hi {
                Bound::Finite(hi) => Bound::Finite(big::rsh(&px.lo, hi)),
                _ => Bound::Finite(BigInt::zero()),
            });
            ret.raise_max(match &px.hi {
                Bound::Finite(hi) => Bound::Finite(big::rsh(hi, y_lo)),
                _ => Bound::PosInf,
            });
        }

        Some(ret.into_interval())
    }
}
