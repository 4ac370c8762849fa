//! Geometry computation from measured sub-part sizes.
//!
//! Nothing here is a fixed constant: every offset derives from the rendered
//! sizes of the sub-parts, queried through [`Measurable`], so the same
//! slider adapts to whatever fonts and styling the embed applies. The
//! computation is pure; applying the resulting offsets to the surface is
//! the controller's job.

use rheostat_foundation::{Px, TrackGeometry};
use rheostat_surface::{Measurable, Side};

/// Slack subtracted from the track width so the track never touches the
/// value box pixel-exactly.
const TRACK_SLACK: Px = Px(2.0);

/// Measured inputs to one layout pass, one entry per sub-part.
pub(super) struct SliderParts<'a> {
    /// The display label.
    pub label: &'a dyn Measurable,
    /// The editable value box. Its footprint includes padding and margin.
    pub value_box: &'a dyn Measurable,
    /// The track region; only its horizontal padding participates.
    pub track: &'a dyn Measurable,
    /// The bar; only its height participates.
    pub bar: &'a dyn Measurable,
    /// The draggable button.
    pub button: &'a dyn Measurable,
    /// The reset control.
    pub reset: &'a dyn Measurable,
    /// The minimum-bound label.
    pub min_label: &'a dyn Measurable,
    /// The maximum-bound label.
    pub max_label: &'a dyn Measurable,
}

/// Absolute pixel placement for every sub-part, recomputed per layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SliderLayout {
    pub label_top: Px,
    pub value_top: Px,
    pub track_top: Px,
    pub track_width: Px,
    pub track_height: Px,
    pub bar_top: Px,
    pub button_top: Px,
    pub reset_top: Px,
    pub min_top: Px,
    pub min_left: Px,
    pub max_top: Px,
    pub max_left: Px,
    /// The bounds driving the value↔position mapping.
    pub geometry: TrackGeometry,
}

/// Derives all absolute geometry from the measured sub-parts and the fixed
/// slider bounds.
///
/// The track receives the width remaining after the label, the value box
/// footprint, the reset control, and the track's own horizontal padding;
/// the bar spans the full track width; button, bar, and reset center
/// vertically; the min/max labels center under the bar endpoints, just
/// below the button.
pub(super) fn compute_layout(
    parts: &SliderParts<'_>,
    slider_width: Px,
    slider_height: Px,
) -> SliderLayout {
    let mid = slider_height.half();

    let label_top = mid - parts.label.height().half();
    let value_top = mid - parts.value_box.padded_height().half();
    let reset_top = mid - parts.reset.height().half();

    let track_pad_left = parts.track.padding(Side::Left);
    let track_width = (slider_width
        - parts.label.width()
        - parts.value_box.outer_width()
        - parts.reset.width()
        - track_pad_left
        - parts.track.padding(Side::Right)
        - TRACK_SLACK)
        .max(Px::ZERO);

    let bar_left = track_pad_left;
    let bar_top = mid - parts.bar.height().half();

    let button_height = parts.button.height();
    let button_top = mid - button_height.half();

    let min_height = parts.min_label.height();
    let min_top = mid + button_height.half() + min_height * 0.25;
    let min_left = bar_left - parts.min_label.width().half();
    let max_top = min_top;
    let max_left = bar_left + track_width - parts.max_label.width().half();

    SliderLayout {
        label_top,
        value_top,
        track_top: Px::ZERO,
        track_width,
        track_height: slider_height,
        bar_top,
        button_top,
        reset_top,
        min_top,
        min_left,
        max_top,
        max_left,
        geometry: TrackGeometry {
            bar_left,
            bar_width: track_width,
            button_width: parts.button.width(),
        },
    }
}
