//! Linear value↔position transform over the track geometry.
//!
//! The two functions are exact inverses for button offsets inside the
//! admissible interval; round-trip precision is limited only by
//! floating-point arithmetic. [`ValueRange`] guarantees a positive span,
//! and callers guard against a zero-width bar before inverting, so neither
//! division can hit zero.

use crate::{Px, TrackGeometry, ValueRange};

/// Interpolates a value in `[min, max]` onto the admissible button-left
/// interval.
///
/// Values outside the range extrapolate linearly; callers clamp first when
/// they need an in-bounds position.
pub fn position_from_value(value: f64, geometry: &TrackGeometry, range: &ValueRange) -> Px {
    geometry.min_button_left() + geometry.bar_width * ((value - range.min()) / range.span())
}

/// Recovers the value encoded by a button left offset, sampling the
/// button's center.
pub fn value_from_position(button_left: Px, geometry: &TrackGeometry, range: &ValueRange) -> f64 {
    let center_offset = button_left + geometry.button_width.half() - geometry.bar_left;
    range.min() + range.span() * (center_offset.raw() / geometry.bar_width.raw())
}
