//! Slider control built on the rheostat surface abstraction.
//!
//! # Usage
//!
//! Install one [`DragContext`](slider::DragContext) per document, then
//! construct sliders against a shared surface:
//!
//! ```
//! use std::sync::Arc;
//!
//! use rheostat_components::slider::{DragContext, Slider, SliderArgs};
//! use rheostat_surface::{HeadlessSurface, SharedSurface, Surface};
//!
//! let surface: SharedSurface = Arc::new(HeadlessSurface::new());
//! surface
//!     .create_node(surface.document(), "div", "panel", "", None)
//!     .expect("create container");
//! let drag = DragContext::install(&surface);
//!
//! let slider = Slider::new(
//!     Arc::clone(&surface),
//!     Arc::clone(&drag),
//!     SliderArgs::new("panel", "gain", "Gain", 0.0, 10.0)
//!         .value(2.5)
//!         .on_value_change(|value: f64| println!("gain = {value}")),
//! )
//! .expect("construct slider");
//! assert_eq!(slider.value().expect("parsable value"), 2.5);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod slider;

pub use slider::{DragContext, Slider, SliderArgs, SliderError};
