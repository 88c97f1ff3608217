//! Interval arithmetic on arbitrary-precision integers.
//!
//! If `x` is in `[3 ..= 6]` and `y` is in `[10 ..= 15]` then `x + y` is in
//! `[13 ..= 21]`. Bounds may be infinite: if `x` is in `[3 ..= +∞]` and `y`
//! is in `[-4 ..= -2]` then `x * y` is in `[-∞ ..= -6]`.
//!
//! The checker uses these ranges to prove that an index such as `a[4*i + j]`
//! stays inside an array without a run-time bounds check. Every operation
//! over-approximates: a value reachable by the analyzed program is never
//! excluded from the computed interval.
//!
//! Operations that are undefined for some inputs (dividing by a range that
//! contains zero, shifting by a range that contains a negative value) return
//! `None`. Callers turn that into a compile error.

mod arith;
mod big;
mod bound;
mod interval;

pub use arith::fill_right;
pub use bound::Bound;
pub use interval::{Interval, Split};

pub use num_bigint::BigInt;
