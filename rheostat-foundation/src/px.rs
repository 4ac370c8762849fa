//! Pixel coordinate scalar for slider geometry.
//!
//! All slider geometry is expressed in absolute pixels on the rendering
//! surface. [`Px`] wraps an `f64` rather than an integer because committed
//! button positions are real-valued: the value↔position mapping must round
//! trip within floating-point tolerance, which sub-pixel offsets preserve
//! and whole-pixel rounding would not.
//!
//! The coordinate system has its origin at the top-left corner, with the
//! x-axis increasing to the right and the y-axis increasing downward.
//! Negative values are supported for offsets that extend past a parent's
//! left edge (the button may legitimately sit half a button-width left of
//! the bar).

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A pixel coordinate or length on the rendering surface.
///
/// # Examples
///
/// ```
/// use rheostat_foundation::Px;
///
/// let left = Px::new(12.5);
/// let width = Px::new(30.0);
/// assert_eq!(left + width, Px::new(42.5));
/// assert_eq!(width * 0.5, Px::new(15.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Px(pub f64);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0.0);

    /// Creates a pixel value from an `f64`.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw `f64` value.
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Half of this length. Used pervasively for centering sub-parts.
    pub fn half(self) -> Self {
        Self(self.0 * 0.5)
    }

    /// Clamps this value into `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    /// Returns the larger of two pixel values.
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Whether this length is positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl From<f64> for Px {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Px {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Px {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}
