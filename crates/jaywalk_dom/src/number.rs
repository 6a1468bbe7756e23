//! Numeric scalar for the document model.
//!
//! JSON numbers keep their integer/floating distinction instead of
//! collapsing everything into `f64`. Typed reads then decide how to
//! coerce: integer reads truncate floats toward zero, float reads widen
//! integers losslessly (within `f64` precision).

use std::fmt;

/// A JSON number, either integral or floating point.
///
/// The variants never compare equal across the divide: `Int(1)` and
/// `Float(1.0)` are distinct values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer in `i64` range.
    Int(i64),
    /// Floating point. Non-finite values are representable in memory but
    /// render as `null` when bridged to `serde_json`.
    Float(f64),
}

impl Number {
    /// Reads this number as an `i64`, truncating a float toward zero.
    ///
    /// Out-of-range floats saturate at the `i64` bounds and `NaN` reads
    /// as zero.
    #[inline]
    pub fn as_i64(self) -> i64 {
        match self {
            Number::Int(value) => value,
            Number::Float(value) => value as i64,
        }
    }

    /// Reads this number as an `f64`, widening an integer.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    /// Returns `true` for the integral variant.
    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
