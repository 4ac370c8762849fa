//! An interactive slider for selecting a value in a bounded range.
//!
//! The control renders a label, an editable value box, and a track holding
//! a bar, a draggable button, a reset control, and min/max bound labels.
//! Dragging the button and editing the value box both commit values; every
//! committed change fires the configured callback and keeps the button
//! position and the text in sync.
//!
//! Sub-part identifiers derive from the slider identifier: `{id}-label`,
//! `{id}-value`, `{id}-range`, `{id}-bar`, `{id}-button`, `{id}-reset`,
//! `{id}-min`, `{id}-max`.

use std::sync::Arc;

use derive_setters::Setters;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, warn};

use rheostat_foundation::{
    CallbackWith, Px, RangeError, TrackGeometry, ValueRange, position_from_value,
    value_from_position,
};
use rheostat_surface::{Event, EventKind, MeasuredNode, NodeId, SharedSurface, Surface, SurfaceError};

use interaction::DragSession;
use layout::{SliderLayout, SliderParts, compute_layout};
use validation::{Indicator, is_float_literal, validate};

mod interaction;
mod layout;
mod validation;

pub use interaction::DragContext;

/// Class prefix shared by the slider root and every sub-part.
const CLASS_PREFIX: &str = "slider";

/// Tooltip on the reset control.
const RESET_TITLE: &str = "Reset slider value";

/// Errors surfaced by slider construction and strict value access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The configured container node does not exist on the surface.
    /// Construction aborts; nothing is created.
    #[error("container node '{0}' not found")]
    MissingContainer(String),
    /// The configured bounds do not form a usable range.
    #[error(transparent)]
    EmptyRange(#[from] RangeError),
    /// [`Slider::value`] was called while the value box holds unparsable
    /// text. The text is left as typed; nothing is auto-corrected.
    #[error("value box does not hold a number: {0:?}")]
    InvalidValue(String),
    /// A surface operation failed while building the sub-part tree.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Configuration for [`Slider::new`].
#[derive(Clone, Setters)]
#[setters(into)]
pub struct SliderArgs {
    /// Identifier of the container node the slider renders into.
    pub container_id: String,
    /// Identifier for the slider root; sub-part identifiers derive from it.
    pub id: String,
    /// Display text for the label sub-part.
    pub label: String,
    /// Minimum selectable value. Must be strictly below `max`.
    pub min: f64,
    /// Maximum selectable value.
    pub max: f64,
    /// Fixed slider height in pixels.
    pub height: Px,
    /// Fixed slider width in pixels.
    pub width: Px,
    /// Invoked on every committed value change.
    #[setters(skip)]
    pub on_value_change: CallbackWith<f64>,
    /// Initial value. Defaults to the range midpoint when unset; a supplied
    /// value commits through the normal validation path, so an out-of-range
    /// value clamps and flags the value box.
    #[setters(strip_option)]
    pub value: Option<f64>,
}

impl SliderArgs {
    /// Args with the required fields set and the rest defaulted.
    pub fn new(container_id: &str, id: &str, label: &str, min: f64, max: f64) -> Self {
        Self {
            container_id: container_id.to_string(),
            id: id.to_string(),
            label: label.to_string(),
            min,
            max,
            height: Px::new(60.0),
            width: Px::new(400.0),
            on_value_change: CallbackWith::default(),
            value: None,
        }
    }

    /// Sets the value-change callback.
    pub fn on_value_change(mut self, callback: impl Into<CallbackWith<f64>>) -> Self {
        self.on_value_change = callback.into();
        self
    }
}

/// Handles to the sub-part nodes, in creation order.
struct SliderNodes {
    root: NodeId,
    label: NodeId,
    value_box: NodeId,
    track: NodeId,
    bar: NodeId,
    button: NodeId,
    reset: NodeId,
    min_label: NodeId,
    max_label: NodeId,
}

/// Mutable per-slider state. The committed value itself lives in the value
/// box text; this holds the pixel side of the binding.
struct SliderState {
    button_left: Px,
    drag: Option<DragSession>,
}

struct SliderCore {
    surface: SharedSurface,
    drag_context: Arc<DragContext>,
    range: ValueRange,
    default_value: f64,
    width: Px,
    height: Px,
    on_value_change: CallbackWith<f64>,
    nodes: SliderNodes,
    layout: RwLock<SliderLayout>,
    state: RwLock<SliderState>,
}

/// An interactive slider instance.
///
/// See the crate root for a construction example. Sliders sharing a
/// document must share one [`DragContext`].
pub struct Slider {
    core: Arc<SliderCore>,
}

impl Slider {
    /// Builds the sub-part tree under the configured container, computes
    /// the initial geometry, arms the drag handlers, and commits the
    /// initial value, firing `on_value_change` exactly once.
    pub fn new(
        surface: SharedSurface,
        drag_context: Arc<DragContext>,
        args: SliderArgs,
    ) -> Result<Self, SliderError> {
        let container = surface
            .node_by_id(&args.container_id)
            .ok_or_else(|| SliderError::MissingContainer(args.container_id.clone()))?;
        let range = ValueRange::new(args.min, args.max)?;
        let default_value = args.value.unwrap_or_else(|| range.midpoint());

        let nodes = build_nodes(surface.as_ref(), container, &args.id, &args.label, &range)?;
        let layout = measure_layout(surface.as_ref(), &nodes, args.width, args.height);
        apply_layout(surface.as_ref(), &nodes, &layout, args.width, args.height);

        let core = Arc::new(SliderCore {
            surface,
            drag_context,
            range,
            default_value,
            width: args.width,
            height: args.height,
            on_value_change: args.on_value_change,
            nodes,
            layout: RwLock::new(layout),
            state: RwLock::new(SliderState {
                button_left: layout.geometry.min_button_left(),
                drag: None,
            }),
        });
        arm_handlers(&core);

        match args.value {
            Some(value) => core.commit(Some(&format_value(value))),
            None => core.commit(None),
        }
        Ok(Self { core })
    }

    /// The current value box content parsed strictly as a number.
    ///
    /// Unlike the committing paths, this never auto-corrects: unparsable
    /// text is surfaced as [`SliderError::InvalidValue`].
    pub fn value(&self) -> Result<f64, SliderError> {
        let text = self.core.value_text();
        if !is_float_literal(&text) {
            return Err(SliderError::InvalidValue(text));
        }
        text.parse::<f64>()
            .map_err(|_| SliderError::InvalidValue(text))
    }

    /// Commits a value, or reverts to the default when `value` is `None`.
    ///
    /// The callback receives the committed value, clamping included.
    pub fn set_value(&self, value: Option<f64>) {
        match value {
            Some(value) => self.core.commit(Some(&format_value(value))),
            None => self.core.commit(None),
        }
    }

    /// Makes the slider visible. Layout and value state are untouched.
    pub fn show(&self) {
        self.core
            .surface
            .set_style(self.core.nodes.root, "visibility", "visible");
    }

    /// Hides the slider. Layout and value state are untouched.
    pub fn hide(&self) {
        self.core
            .surface
            .set_style(self.core.nodes.root, "visibility", "hidden");
    }

    /// Re-measures the sub-parts, recomputes all geometry, and re-commits
    /// the current text so the button reflects the new geometry.
    ///
    /// Size changes are not observed automatically; embeds call this after
    /// anything that can change rendered sizes.
    pub fn refit(&self) {
        self.core.refit();
    }

    /// The slider root node, for embeds that need to place the subtree.
    pub fn root(&self) -> NodeId {
        self.core.nodes.root
    }

    /// The current button left offset in pixels.
    pub fn button_position(&self) -> Px {
        self.core.state.read().button_left
    }
}

impl SliderCore {
    fn value_text(&self) -> String {
        self.surface
            .attr(self.nodes.value_box, "value")
            .unwrap_or_default()
    }

    fn set_value_text(&self, text: &str) {
        self.surface.set_attr(self.nodes.value_box, "value", text);
    }

    fn set_indicator(&self, indicator: Indicator) {
        self.surface
            .set_style(self.nodes.value_box, "color", indicator.color());
    }

    fn place_button(&self, position: Px) {
        self.surface
            .set_px_dimension(self.nodes.button, "left", position);
        self.state.write().button_left = position;
    }

    /// Commits raw text, or the default value when `raw` is `None`.
    ///
    /// The box keeps the text as typed; validation only decides the
    /// committed value and the indicator. The button position is clamped
    /// into the admissible interval, which matters when a caller-supplied
    /// default lies outside the bounds.
    fn commit(&self, raw: Option<&str>) {
        let text = match raw {
            Some(raw) => raw.to_string(),
            None => format_value(self.default_value),
        };
        self.set_value_text(&text);

        let outcome = validate(&text, &self.range, self.default_value);
        match outcome.indicator {
            Indicator::Invalid => {
                warn!(text = %text, default = outcome.value, "unparsable value reverted to default");
            }
            Indicator::BelowMin | Indicator::AboveMax => {
                warn!(text = %text, corrected = outcome.value, "out-of-range value clamped");
            }
            Indicator::InRange => {}
        }
        self.set_indicator(outcome.indicator);

        let geometry = self.layout.read().geometry;
        let position = position_from_value(outcome.value, &geometry, &self.range)
            .clamp(geometry.min_button_left(), geometry.max_button_right());
        self.place_button(position);
        debug!(value = outcome.value, "committed value");
        self.on_value_change.call(outcome.value);
    }

    /// Commits a drag target position already known to be admissible.
    fn commit_position(&self, position: Px, geometry: &TrackGeometry) {
        self.place_button(position);
        let value = value_from_position(position, geometry, &self.range);
        self.set_value_text(&format_value(value));
        self.set_indicator(Indicator::InRange);
        debug!(value, "committed value from drag");
        self.on_value_change.call(value);
    }

    fn refit(&self) {
        let layout = measure_layout(self.surface.as_ref(), &self.nodes, self.width, self.height);
        *self.layout.write() = layout;
        apply_layout(self.surface.as_ref(), &self.nodes, &layout, self.width, self.height);
        debug!("geometry recomputed");
        // A geometry change invalidates the cached button position, so the
        // current text is committed again against the new geometry.
        let text = self.value_text();
        self.commit(Some(&text));
    }
}

/// Creates the sub-part tree with deterministic identifiers.
fn build_nodes(
    surface: &dyn Surface,
    container: NodeId,
    id: &str,
    label_text: &str,
    range: &ValueRange,
) -> Result<SliderNodes, SurfaceError> {
    let root = surface.create_node(container, "div", id, CLASS_PREFIX, None)?;
    let label = surface.create_node(
        root,
        "div",
        &format!("{id}-label"),
        &format!("{CLASS_PREFIX}-label"),
        Some(label_text),
    )?;
    let value_box = surface.create_node(
        root,
        "input",
        &format!("{id}-value"),
        &format!("{CLASS_PREFIX}-value"),
        None,
    )?;
    let track = surface.create_node(
        root,
        "div",
        &format!("{id}-range"),
        &format!("{CLASS_PREFIX}-range"),
        None,
    )?;
    let bar = surface.create_node(
        track,
        "div",
        &format!("{id}-bar"),
        &format!("{CLASS_PREFIX}-bar"),
        None,
    )?;
    let button = surface.create_node(
        track,
        "div",
        &format!("{id}-button"),
        &format!("{CLASS_PREFIX}-button"),
        None,
    )?;
    let reset = surface.create_node(
        track,
        "div",
        &format!("{id}-reset"),
        &format!("{CLASS_PREFIX}-reset"),
        None,
    )?;
    surface.set_attr(reset, "title", RESET_TITLE);
    let min_label = surface.create_node(
        track,
        "div",
        &format!("{id}-min"),
        &format!("{CLASS_PREFIX}-min"),
        Some(&format_value(range.min())),
    )?;
    let max_label = surface.create_node(
        track,
        "div",
        &format!("{id}-max"),
        &format!("{CLASS_PREFIX}-max"),
        Some(&format_value(range.max())),
    )?;
    Ok(SliderNodes {
        root,
        label,
        value_box,
        track,
        bar,
        button,
        reset,
        min_label,
        max_label,
    })
}

/// Measures every sub-part through the surface and computes the layout.
fn measure_layout(
    surface: &dyn Surface,
    nodes: &SliderNodes,
    width: Px,
    height: Px,
) -> SliderLayout {
    let label = MeasuredNode::new(surface, nodes.label);
    let value_box = MeasuredNode::new(surface, nodes.value_box);
    let track = MeasuredNode::new(surface, nodes.track);
    let bar = MeasuredNode::new(surface, nodes.bar);
    let button = MeasuredNode::new(surface, nodes.button);
    let reset = MeasuredNode::new(surface, nodes.reset);
    let min_label = MeasuredNode::new(surface, nodes.min_label);
    let max_label = MeasuredNode::new(surface, nodes.max_label);
    let parts = SliderParts {
        label: &label,
        value_box: &value_box,
        track: &track,
        bar: &bar,
        button: &button,
        reset: &reset,
        min_label: &min_label,
        max_label: &max_label,
    };
    compute_layout(&parts, width, height)
}

/// Writes the computed offsets back to the sub-parts as absolute pixels.
fn apply_layout(
    surface: &dyn Surface,
    nodes: &SliderNodes,
    layout: &SliderLayout,
    width: Px,
    height: Px,
) {
    surface.set_px_dimension(nodes.root, "width", width);
    surface.set_px_dimension(nodes.root, "height", height);

    surface.set_px_dimension(nodes.label, "top", layout.label_top);
    surface.set_px_dimension(nodes.value_box, "top", layout.value_top);

    surface.set_px_dimension(nodes.track, "top", layout.track_top);
    surface.set_px_dimension(nodes.track, "width", layout.track_width);
    surface.set_px_dimension(nodes.track, "height", layout.track_height);

    surface.set_px_dimension(nodes.bar, "top", layout.bar_top);
    surface.set_px_dimension(nodes.bar, "width", layout.geometry.bar_width);
    surface.set_px_dimension(nodes.bar, "left", layout.geometry.bar_left);

    surface.set_px_dimension(nodes.button, "top", layout.button_top);
    surface.set_px_dimension(nodes.button, "width", layout.geometry.button_width);

    surface.set_px_dimension(nodes.reset, "top", layout.reset_top);

    surface.set_px_dimension(nodes.min_label, "top", layout.min_top);
    surface.set_px_dimension(nodes.min_label, "left", layout.min_left);
    surface.set_px_dimension(nodes.max_label, "top", layout.max_top);
    surface.set_px_dimension(nodes.max_label, "left", layout.max_left);
}

/// Attaches the edit, reset, and drag handlers.
///
/// Handlers hold weak references so the surface does not keep a dropped
/// slider alive through its own handler table.
fn arm_handlers(core: &Arc<SliderCore>) {
    let surface = Arc::clone(&core.surface);

    let edit = Arc::downgrade(core);
    surface.attach(
        core.nodes.value_box,
        EventKind::KeyRelease,
        Arc::new(move |_event| {
            if let Some(core) = edit.upgrade() {
                let text = core.value_text();
                core.commit(Some(&text));
            }
        }),
    );

    let reset = Arc::downgrade(core);
    surface.attach(
        core.nodes.reset,
        EventKind::Click,
        Arc::new(move |_event| {
            if let Some(core) = reset.upgrade() {
                core.commit(None);
            }
        }),
    );

    let press = Arc::downgrade(core);
    surface.attach(
        core.nodes.button,
        EventKind::PointerDown,
        Arc::new(move |event| {
            if let Some(core) = press.upgrade() {
                handle_drag_start(&core, event);
            }
        }),
    );

    let drag = Arc::downgrade(core);
    surface.attach(
        core.nodes.track,
        EventKind::PointerMove,
        Arc::new(move |event| {
            if let Some(core) = drag.upgrade() {
                handle_drag_move(&core, event);
            }
        }),
    );
}

/// Idle to Dragging: captures the displacement and activates the shared
/// drag context for this button.
fn handle_drag_start(core: &SliderCore, event: &Event) {
    let Some(pointer_x) = event.pointer_x() else {
        return;
    };
    let button_left = core.state.read().button_left;
    core.state.write().drag = Some(DragSession::begin(button_left, pointer_x));
    core.drag_context
        .begin(core.surface.as_ref(), core.nodes.button);
}

/// Dragging to Dragging: commits the requested position when admissible.
///
/// Targets outside the admissible interval are ignored rather than
/// clamped, so the button stops at the boundary it last satisfied. Moves
/// arriving while another slider owns the drag context are ignored too.
fn handle_drag_move(core: &SliderCore, event: &Event) {
    if !core.drag_context.is_active(core.nodes.button) {
        return;
    }
    let Some(pointer_x) = event.pointer_x() else {
        return;
    };
    let Some(session) = core.state.read().drag else {
        return;
    };
    let layout = *core.layout.read();
    if !layout.geometry.bar_width.is_positive() {
        return;
    }
    let target = session.target(pointer_x);
    if layout.geometry.admits(target) {
        core.commit_position(target, &layout.geometry);
    }
}

/// Renders a value the way the value box and bound labels display it.
fn format_value(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use rheostat_surface::HeadlessSurface;

    use super::*;

    struct Page {
        headless: Arc<HeadlessSurface>,
        surface: SharedSurface,
        drag: Arc<DragContext>,
    }

    impl Page {
        fn new() -> Self {
            let headless = Arc::new(HeadlessSurface::new());
            let surface: SharedSurface = headless.clone();
            surface
                .create_node(surface.document(), "div", "panel", "", None)
                .expect("create container");
            let drag = DragContext::install(&surface);
            Self {
                headless,
                surface,
                drag,
            }
        }

        fn node(&self, id: &str) -> NodeId {
            self.surface.node_by_id(id).expect("node exists")
        }

        /// Seeds rendered sizes for a slider's sub-parts and refits so the
        /// geometry reflects them.
        fn seed_metrics(&self, slider: &Slider, id: &str) {
            self.headless
                .set_measured(self.node(&format!("{id}-label")), Px::new(50.0), Px::new(10.0));
            self.headless
                .set_measured(self.node(&format!("{id}-value")), Px::new(40.0), Px::new(16.0));
            self.headless
                .set_measured(self.node(&format!("{id}-reset")), Px::new(10.0), Px::new(10.0));
            self.headless
                .set_measured(self.node(&format!("{id}-button")), Px::new(16.0), Px::new(16.0));
            self.headless
                .set_measured(self.node(&format!("{id}-bar")), Px::ZERO, Px::new(4.0));
            self.headless
                .set_measured(self.node(&format!("{id}-min")), Px::new(20.0), Px::new(8.0));
            self.headless
                .set_measured(self.node(&format!("{id}-max")), Px::new(20.0), Px::new(8.0));
            self.headless
                .set_computed_style(self.node(&format!("{id}-range")), "padding-left", "8px");
            self.headless
                .set_computed_style(self.node(&format!("{id}-range")), "padding-right", "8px");
            slider.refit();
        }
    }

    fn counting_args(id: &str, hits: &Arc<AtomicUsize>) -> SliderArgs {
        let hits = Arc::clone(hits);
        SliderArgs::new("panel", id, "Level", 0.0, 100.0).on_value_change(move |_: f64| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn recording_args(id: &str, seen: &Arc<Mutex<Vec<f64>>>) -> SliderArgs {
        let seen = Arc::clone(seen);
        SliderArgs::new("panel", id, "Level", 0.0, 100.0).on_value_change(move |value: f64| {
            seen.lock().expect("record lock").push(value);
        })
    }

    #[test]
    fn test_construction_fires_callback_exactly_once_with_initial_value() {
        let page = Page::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let args = SliderArgs::new("panel", "s1", "Level", 0.0, 10.0)
            .value(3.0)
            .on_value_change({
                let seen = Arc::clone(&seen);
                move |value: f64| seen.lock().expect("record lock").push(value)
            });
        let slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");

        assert_eq!(*seen.lock().expect("record lock"), vec![3.0]);

        // The button sits where the mapping puts 3.0 in the initial
        // geometry.
        let geometry = slider.core.layout.read().geometry;
        let range = ValueRange::new(0.0, 10.0).expect("valid range");
        let expected = position_from_value(3.0, &geometry, &range);
        assert_eq!(slider.button_position(), expected);
        assert_eq!(
            page.surface.px_dimension(page.node("s1-button"), "left"),
            expected
        );
    }

    #[test]
    fn test_construction_defaults_to_midpoint() {
        let page = Page::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let args = recording_args("s1", &seen);
        let slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");
        assert_eq!(*seen.lock().expect("record lock"), vec![50.0]);
        assert_eq!(slider.value().expect("parsable"), 50.0);
    }

    #[test]
    fn test_construction_fails_without_container() {
        let page = Page::new();
        let args = SliderArgs::new("missing", "s1", "Level", 0.0, 100.0);
        let error = Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args)
            .err()
            .expect("construction must fail");
        assert_eq!(error, SliderError::MissingContainer("missing".to_string()));
    }

    #[test]
    fn test_construction_rejects_empty_range() {
        let page = Page::new();
        let args = SliderArgs::new("panel", "s1", "Level", 5.0, 5.0);
        let error = Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args)
            .err()
            .expect("construction must fail");
        assert!(matches!(error, SliderError::EmptyRange(_)));
    }

    #[test]
    fn test_sub_parts_carry_derived_identifiers() {
        let page = Page::new();
        let args = SliderArgs::new("panel", "vol", "Volume", 0.0, 100.0);
        let _slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");
        for suffix in ["label", "value", "range", "bar", "button", "reset", "min", "max"] {
            assert!(
                page.surface.node_by_id(&format!("vol-{suffix}")).is_some(),
                "missing sub-part vol-{suffix}"
            );
        }
        assert_eq!(
            page.surface.attr(page.node("vol-reset"), "title").as_deref(),
            Some(RESET_TITLE)
        );
        assert_eq!(page.headless.text(page.node("vol-min")).as_deref(), Some("0"));
        assert_eq!(page.headless.text(page.node("vol-max")).as_deref(), Some("100"));
        assert_eq!(page.headless.text(page.node("vol-label")).as_deref(), Some("Volume"));
        assert_eq!(page.headless.tag(page.node("vol-value")).as_deref(), Some("input"));
        // Root holds label, value box, and track; the track holds the rest.
        assert_eq!(page.headless.children(page.node("vol")).len(), 3);
        assert_eq!(page.headless.children(page.node("vol-range")).len(), 5);
    }

    #[test]
    fn test_out_of_range_edit_clamps_to_nearer_bound() {
        let page = Page::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let args = recording_args("s1", &seen);
        let slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");

        let value_box = page.node("s1-value");
        page.surface.set_attr(value_box, "value", "150");
        page.headless.dispatch(value_box, &Event::key_release());

        assert_eq!(seen.lock().expect("record lock").last(), Some(&100.0));
        assert_eq!(page.surface.style(value_box, "color").as_deref(), Some("blue"));
        // The box keeps the text as typed; strict access sees it.
        assert_eq!(slider.value().expect("still a number"), 150.0);
        // Button rests at the maximum admissible position.
        let geometry = slider.core.layout.read().geometry;
        assert_eq!(slider.button_position(), geometry.max_button_right());
    }

    #[test]
    fn test_malformed_edit_reverts_to_default_and_flags_invalid() {
        let page = Page::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let args = recording_args("s1", &seen);
        let slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");

        let value_box = page.node("s1-value");
        page.surface.set_attr(value_box, "value", "abc");
        page.headless.dispatch(value_box, &Event::key_release());

        assert_eq!(seen.lock().expect("record lock").last(), Some(&50.0));
        assert_eq!(page.surface.style(value_box, "color").as_deref(), Some("#f00"));
        assert!(matches!(slider.value(), Err(SliderError::InvalidValue(text)) if text == "abc"));
    }

    #[test]
    fn test_drag_commits_positions_and_values() {
        let page = Page::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let args = recording_args("s1", &seen);
        let slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");
        page.seed_metrics(&slider, "s1");

        let geometry = slider.core.layout.read().geometry;
        let range = ValueRange::new(0.0, 100.0).expect("valid range");
        let start = slider.button_position();

        let button = page.node("s1-button");
        let track = page.node("s1-range");
        page.headless
            .dispatch(button, &Event::pointer_down(Px::new(200.0)));
        assert!(page.headless.selection_suppressed());

        page.headless
            .dispatch(track, &Event::pointer_move(Px::new(210.0)));
        let moved = start + Px::new(10.0);
        assert_eq!(slider.button_position(), moved);
        let expected = value_from_position(moved, &geometry, &range);
        let last = *seen
            .lock()
            .expect("record lock")
            .last()
            .expect("drag committed");
        assert!((last - expected).abs() < 1e-9);
        assert_eq!(slider.value().expect("parsable"), last);

        // Release anywhere in the document ends the gesture; further moves
        // are ignored.
        page.headless
            .dispatch(page.surface.document(), &Event::pointer_up());
        assert!(!page.headless.selection_suppressed());
        let commits = seen.lock().expect("record lock").len();
        page.headless
            .dispatch(track, &Event::pointer_move(Px::new(260.0)));
        assert_eq!(slider.button_position(), moved);
        assert_eq!(seen.lock().expect("record lock").len(), commits);
    }

    #[test]
    fn test_drag_ignores_out_of_bound_targets() {
        let page = Page::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let args = counting_args("s1", &hits);
        let slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");
        page.seed_metrics(&slider, "s1");

        let before = slider.button_position();
        let commits = hits.load(Ordering::SeqCst);
        let button = page.node("s1-button");
        let track = page.node("s1-range");

        page.headless
            .dispatch(button, &Event::pointer_down(Px::new(200.0)));
        // A target far past the right boundary: position and value stay
        // untouched, silently.
        page.headless
            .dispatch(track, &Event::pointer_move(Px::new(5000.0)));
        assert_eq!(slider.button_position(), before);
        assert_eq!(hits.load(Ordering::SeqCst), commits);
        // Same past the left boundary.
        page.headless
            .dispatch(track, &Event::pointer_move(Px::new(-5000.0)));
        assert_eq!(slider.button_position(), before);
        assert_eq!(hits.load(Ordering::SeqCst), commits);
    }

    #[test]
    fn test_reset_restores_default_even_mid_drag() {
        let page = Page::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let args = recording_args("s1", &seen);
        let slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");
        page.seed_metrics(&slider, "s1");

        let button = page.node("s1-button");
        let track = page.node("s1-range");
        page.headless
            .dispatch(button, &Event::pointer_down(Px::new(200.0)));
        page.headless
            .dispatch(track, &Event::pointer_move(Px::new(230.0)));
        assert_ne!(slider.value().expect("parsable"), 50.0);

        page.headless.dispatch(page.node("s1-reset"), &Event::click());
        assert_eq!(slider.value().expect("parsable"), 50.0);
        assert_eq!(seen.lock().expect("record lock").last(), Some(&50.0));

        let geometry = slider.core.layout.read().geometry;
        let range = ValueRange::new(0.0, 100.0).expect("valid range");
        assert_eq!(
            slider.button_position(),
            position_from_value(50.0, &geometry, &range)
        );
    }

    #[test]
    fn test_two_sliders_share_one_drag_context() {
        let page = Page::new();
        let first_hits = Arc::new(AtomicUsize::new(0));
        let second_hits = Arc::new(AtomicUsize::new(0));
        let first = Slider::new(
            Arc::clone(&page.surface),
            Arc::clone(&page.drag),
            counting_args("a", &first_hits),
        )
        .expect("construct");
        let second = Slider::new(
            Arc::clone(&page.surface),
            Arc::clone(&page.drag),
            counting_args("b", &second_hits),
        )
        .expect("construct");
        page.seed_metrics(&first, "a");
        page.seed_metrics(&second, "b");

        let second_start = second.button_position();
        page.headless
            .dispatch(page.node("a-button"), &Event::pointer_down(Px::new(200.0)));
        let second_commits = second_hits.load(Ordering::SeqCst);

        // Motion over the other slider's track must not move its button.
        page.headless
            .dispatch(page.node("b-range"), &Event::pointer_move(Px::new(210.0)));
        assert_eq!(second.button_position(), second_start);
        assert_eq!(second_hits.load(Ordering::SeqCst), second_commits);

        // The dragged slider does track the same motion.
        let first_commits = first_hits.load(Ordering::SeqCst);
        page.headless
            .dispatch(page.node("a-range"), &Event::pointer_move(Px::new(210.0)));
        assert_eq!(first_hits.load(Ordering::SeqCst), first_commits + 1);

        // A release anywhere stops either from tracking further motion.
        page.headless
            .dispatch(page.surface.document(), &Event::pointer_up());
        let total = first_hits.load(Ordering::SeqCst);
        page.headless
            .dispatch(page.node("a-range"), &Event::pointer_move(Px::new(220.0)));
        page.headless
            .dispatch(page.node("b-range"), &Event::pointer_move(Px::new(220.0)));
        assert_eq!(first_hits.load(Ordering::SeqCst), total);
        assert_eq!(second_hits.load(Ordering::SeqCst), second_commits);
    }

    #[test]
    fn test_show_and_hide_toggle_visibility_only() {
        let page = Page::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let slider = Slider::new(
            Arc::clone(&page.surface),
            Arc::clone(&page.drag),
            counting_args("s1", &hits),
        )
        .expect("construct");

        let commits = hits.load(Ordering::SeqCst);
        let position = slider.button_position();
        slider.hide();
        assert_eq!(
            page.surface.style(slider.root(), "visibility").as_deref(),
            Some("hidden")
        );
        slider.show();
        assert_eq!(
            page.surface.style(slider.root(), "visibility").as_deref(),
            Some("visible")
        );
        assert_eq!(hits.load(Ordering::SeqCst), commits);
        assert_eq!(slider.button_position(), position);
    }

    #[test]
    fn test_refit_moves_button_onto_new_geometry() {
        let page = Page::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let args = recording_args("s1", &seen);
        let slider =
            Slider::new(Arc::clone(&page.surface), Arc::clone(&page.drag), args).expect("construct");
        let initial = slider.button_position();

        // Rendered sizes arrive; the refit inside seed_metrics re-commits
        // the unchanged value against the new geometry.
        page.seed_metrics(&slider, "s1");
        assert_eq!(slider.value().expect("parsable"), 50.0);
        assert_ne!(slider.button_position(), initial);

        let geometry = slider.core.layout.read().geometry;
        let range = ValueRange::new(0.0, 100.0).expect("valid range");
        assert_eq!(
            slider.button_position(),
            position_from_value(50.0, &geometry, &range)
        );
    }
}
