//! The bounded numeric range a slider selects from.

use thiserror::Error;

/// Error raised when a value range cannot be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// The minimum bound is not strictly below the maximum bound. A zero
    /// span would make the position mapping divide by zero, so it is
    /// rejected at construction instead of guarded at every conversion.
    #[error("value range is empty: min {min} must be strictly below max {max}")]
    Empty {
        /// The offending minimum bound.
        min: f64,
        /// The offending maximum bound.
        max: f64,
    },
}

/// An inclusive `[min, max]` value range with a strictly positive span.
///
/// # Examples
///
/// ```
/// use rheostat_foundation::ValueRange;
///
/// let range = ValueRange::new(0.0, 10.0).expect("non-empty range");
/// assert_eq!(range.span(), 10.0);
/// assert_eq!(range.midpoint(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Creates a range, rejecting `min >= max`.
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        if min >= max {
            return Err(RangeError::Empty { min, max });
        }
        Ok(Self { min, max })
    }

    /// The minimum selectable value.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The maximum selectable value.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`, always positive.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// The middle of the range, used as the fallback default value.
    pub fn midpoint(&self) -> f64 {
        self.min + 0.5 * self.span()
    }

    /// Whether `value` lies within the range, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamps `value` to the nearer bound.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}
