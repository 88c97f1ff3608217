//! Interval end points.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// One end of an interval.
///
/// The derived ordering is the natural one: `NegInf` is below every finite
/// value and `PosInf` is above every finite value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    NegInf,
    Finite(BigInt),
    PosInf,
}

impl Bound {
    #[inline]
    pub fn finite(&self) -> Option<&BigInt> {
        match self {
            Bound::Finite(i) => Some(i),
            Bound::NegInf | Bound::PosInf => None,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    /// Three-way sign: `NegInf` is negative, `PosInf` positive.
    pub(crate) fn is_negative(&self) -> bool {
        match self {
            Bound::NegInf => true,
            Bound::Finite(i) => i.is_negative(),
            Bound::PosInf => false,
        }
    }

    pub(crate) fn is_positive(&self) -> bool {
        match self {
            Bound::NegInf => false,
            Bound::Finite(i) => i.is_positive(),
            Bound::PosInf => true,
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        matches!(self, Bound::Finite(i) if i.is_zero())
    }
}

impl From<BigInt> for Bound {
    fn from(i: BigInt) -> Self {
        Bound::Finite(i)
    }
}

impl From<i64> for Bound {
    fn from(i: i64) -> Self {
        Bound::Finite(BigInt::from(i))
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInf => f.write_str("-∞"),
            Bound::Finite(i) => write!(f, "{i}"),
            Bound::PosInf => f.write_str("+∞"),
        }
    }
}
