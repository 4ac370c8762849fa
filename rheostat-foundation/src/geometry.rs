//! Derived pixel geometry of the slider track.

use crate::Px;

/// Pixel bounds derived from the rendered sizes of the bar and button.
///
/// Recomputed on every layout pass; any previously cached button position
/// is invalid once a new geometry exists. The button is positioned by its
/// left edge but represents a value at its center, so the admissible left
/// offsets run from half a button-width left of the bar to half a
/// button-width left of the bar's right end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Left offset of the bar inside the track.
    pub bar_left: Px,
    /// Width of the bar, spanning the whole value range.
    pub bar_width: Px,
    /// Rendered width of the draggable button.
    pub button_width: Px,
}

impl TrackGeometry {
    /// Smallest admissible button left offset, aligning the button center
    /// with the bar's left end.
    pub fn min_button_left(&self) -> Px {
        self.bar_left - self.button_width.half()
    }

    /// Largest admissible button left offset, aligning the button center
    /// with the bar's right end.
    pub fn max_button_right(&self) -> Px {
        self.bar_left + self.bar_width - self.button_width.half()
    }

    /// Whether a button left offset lies within the admissible interval.
    ///
    /// Drag targets outside the interval are ignored rather than clamped,
    /// so the button stops following the pointer at the last boundary it
    /// satisfied.
    pub fn admits(&self, button_left: Px) -> bool {
        self.min_button_left() <= button_left && button_left <= self.max_button_right()
    }
}
