//! The interval type and its exact queries.

use std::cmp::{max, min};
use std::fmt;

use num_bigint::BigInt;

use crate::bound::Bound;

/// A closed integer interval `[lo ..= hi]`.
///
/// An infinite bound means the interval is unbounded on that side. The
/// values reachable inside an unbounded interval are arbitrarily large but
/// never infinite, so `0 * x` is exactly `0` for every such `x`.
///
/// An interval with `lo > hi` is empty. There is more than one empty
/// representation; use [`Interval::is_empty`] rather than comparing bounds.
/// Equality treats every empty interval as equal.
#[derive(Clone, Debug)]
pub struct Interval {
    pub lo: Bound,
    pub hi: Bound,
}

/// The result of [`Interval::split`].
///
/// `neg` holds the strictly negative values and `pos` the strictly positive
/// ones. A side with no values is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split {
    pub neg: Option<Interval>,
    pub has_zero: bool,
    pub pos: Option<Interval>,
}

/// The values of an interval below zero. The upper end is at most `-1`.
pub(crate) struct NegPart {
    pub lo: Bound,
    pub hi: BigInt,
}

/// The values of an interval above zero. The lower end is at least `1`.
pub(crate) struct PosPart {
    pub lo: BigInt,
    pub hi: Bound,
}

pub(crate) struct Parts {
    pub neg: Option<NegPart>,
    pub has_zero: bool,
    pub pos: Option<PosPart>,
}

impl Interval {
    pub fn new(lo: impl Into<Bound>, hi: impl Into<Bound>) -> Self {
        Interval {
            lo: lo.into(),
            hi: hi.into(),
        }
    }

    /// `[lo ..= hi]` with an absent bound meaning unbounded on that side.
    pub fn from_options(lo: Option<BigInt>, hi: Option<BigInt>) -> Self {
        Interval {
            lo: lo.map_or(Bound::NegInf, Bound::Finite),
            hi: hi.map_or(Bound::PosInf, Bound::Finite),
        }
    }

    pub fn from_ints(lo: i64, hi: i64) -> Self {
        Interval::new(lo, hi)
    }

    pub fn singleton(i: impl Into<BigInt>) -> Self {
        let i = i.into();
        Interval {
            lo: Bound::Finite(i.clone()),
            hi: Bound::Finite(i),
        }
    }

    pub fn zero() -> Self {
        Interval::from_ints(0, 0)
    }

    /// The interval containing every integer.
    pub fn unbounded() -> Self {
        Interval {
            lo: Bound::NegInf,
            hi: Bound::PosInf,
        }
    }

    pub fn at_least(lo: impl Into<BigInt>) -> Self {
        Interval {
            lo: Bound::Finite(lo.into()),
            hi: Bound::PosInf,
        }
    }

    pub fn at_most(hi: impl Into<BigInt>) -> Self {
        Interval {
            lo: Bound::NegInf,
            hi: Bound::Finite(hi.into()),
        }
    }

    /// A canonical empty interval, `[1 ..= -1]`.
    pub fn empty() -> Self {
        Interval::from_ints(1, -1)
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi || self.lo == Bound::PosInf || self.hi == Bound::NegInf
    }

    /// Whether this is exactly `[0 ..= 0]`.
    pub(crate) fn is_just_zero(&self) -> bool {
        self.lo.is_zero() && self.hi.is_zero()
    }

    pub fn contains_negative(&self) -> bool {
        !self.is_empty() && self.lo.is_negative()
    }

    pub fn contains_non_negative(&self) -> bool {
        !self.is_empty() && !self.hi.is_negative()
    }

    pub fn contains_positive(&self) -> bool {
        !self.is_empty() && self.hi.is_positive()
    }

    pub fn contains_zero(&self) -> bool {
        !self.lo.is_positive() && !self.hi.is_negative() && !self.is_empty()
    }

    pub fn contains(&self, i: &BigInt) -> bool {
        let i = Bound::Finite(i.clone());
        self.lo <= i && i <= self.hi
    }

    /// Whether every value of `other` is also in `self`.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        !self.is_empty() && self.lo <= other.lo && other.hi <= self.hi
    }

    /// Partitions into negative values, zero and positive values.
    pub fn split(&self) -> Split {
        let parts = self.parts();
        Split {
            neg: parts.neg.map(|n| Interval {
                lo: n.lo,
                hi: Bound::Finite(n.hi),
            }),
            has_zero: parts.has_zero,
            pos: parts.pos.map(|p| Interval {
                lo: Bound::Finite(p.lo),
                hi: p.hi,
            }),
        }
    }

    /// [`Interval::split`] with the finite end of each piece unwrapped.
    pub(crate) fn parts(&self) -> Parts {
        let neg = self.contains_negative().then(|| NegPart {
            lo: self.lo.clone(),
            hi: match &self.hi {
                Bound::Finite(hi) if *hi < BigInt::from(-1) => hi.clone(),
                _ => BigInt::from(-1),
            },
        });
        let pos = self.contains_positive().then(|| PosPart {
            lo: match &self.lo {
                Bound::Finite(lo) if *lo > BigInt::from(1) => lo.clone(),
                _ => BigInt::from(1),
            },
            hi: self.hi.clone(),
        });
        Parts {
            neg,
            has_zero: self.contains_zero(),
            pos,
        }
    }

    /// The smallest interval containing both `self` and `other`.
    pub fn unite(&self, other: &Interval) -> Interval {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Interval {
            lo: min(&self.lo, &other.lo).clone(),
            hi: max(&self.hi, &other.hi).clone(),
        }
    }

    pub fn intersect(&self, other: &Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Interval::empty();
        }
        Interval {
            lo: max(&self.lo, &other.lo).clone(),
            hi: min(&self.hi, &other.hi).clone(),
        }
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.lo == other.lo && self.hi == other.hi,
            _ => false,
        }
    }
}

impl Eq for Interval {}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[empty]");
        }
        write!(f, "[{} ..= {}]", self.lo, self.hi)
    }
}
