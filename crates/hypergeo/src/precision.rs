//! Comparison policy for containment and collinearity tests.

use std::cmp::Ordering;

use crate::{EPSILON, Float};

/// Tolerance used when comparing floating-point quantities in containment
/// and collinearity tests.
///
/// [`Precision::EXACT`] compares with plain IEEE equality. This is what
/// [`crate::PointSet::contains()`] uses, so a point that is off by a single
/// rounding error is not contained. Pass [`Precision::APPROX`] (or a custom
/// tolerance) to [`crate::PointSet::contains_within()`] to absorb rounding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Precision {
    epsilon: Float,
}

impl Default for Precision {
    fn default() -> Self {
        Self::EXACT
    }
}

impl Precision {
    /// Bit-exact comparison.
    pub const EXACT: Self = Self { epsilon: 0.0 };
    /// Comparison that considers values separated by at most [`EPSILON`] to
    /// be equal.
    pub const APPROX: Self = Self { epsilon: EPSILON };

    /// Constructs a precision with an absolute tolerance. The sign of
    /// `epsilon` is ignored.
    pub fn new(epsilon: Float) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    /// Returns the absolute tolerance.
    pub fn epsilon(self) -> Float {
        self.epsilon
    }

    /// Returns whether two numbers are equal within the tolerance.
    ///
    /// Handles infinity specially.
    pub fn eq(self, a: Float, b: Float) -> bool {
        // use native float equality to handle infinities
        a == b || (a - b).abs() <= self.epsilon
    }
    /// Returns whether two numbers differ by more than the tolerance.
    pub fn ne(self, a: Float, b: Float) -> bool {
        !self.eq(a, b)
    }
    /// Returns whether `x` is within the tolerance of zero.
    pub fn eq_zero(self, x: Float) -> bool {
        self.eq(x, 0.0)
    }

    /// Compares two numbers, but considers them equal if they are within the
    /// tolerance.
    ///
    /// Numbers that are not comparable (NaN) compare as `Greater`.
    pub fn cmp(self, a: Float, b: Float) -> Ordering {
        if self.eq(a, b) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Returns whether `a` is less than `b` by more than the tolerance.
    pub fn lt(self, a: Float, b: Float) -> bool {
        a < b && !self.eq(a, b)
    }
    /// Returns whether `a` is greater than `b` by more than the tolerance.
    pub fn gt(self, a: Float, b: Float) -> bool {
        a > b && !self.eq(a, b)
    }
    /// Returns whether `a` is less than `b` or within the tolerance of it.
    pub fn lt_eq(self, a: Float, b: Float) -> bool {
        a < b || self.eq(a, b)
    }
    /// Returns whether `a` is greater than `b` or within the tolerance of it.
    pub fn gt_eq(self, a: Float, b: Float) -> bool {
        a > b || self.eq(a, b)
    }
}
