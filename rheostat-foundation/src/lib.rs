//! Foundation primitives for the rheostat slider control.
//!
//! This crate holds the pure, surface-independent pieces of the slider:
//! pixel scalars, the bounded value range, the derived track geometry, the
//! linear value↔position mapping, and comparable callback handles for
//! change notification. Nothing in here touches a rendering surface.
#![deny(missing_docs, clippy::unwrap_used)]

mod geometry;
mod mapping;
mod prop;
mod px;
mod range;

pub use geometry::TrackGeometry;
pub use mapping::{position_from_value, value_from_position};
pub use prop::{CallbackWith, Slot};
pub use px::Px;
pub use range::{RangeError, ValueRange};
