//! Two sliders on one headless document, driven by synthesized input.
//!
//! Run with `RUST_LOG=debug` to watch geometry and commit logging.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rheostat_components::slider::{DragContext, Slider, SliderArgs};
use rheostat_foundation::Px;
use rheostat_surface::{Event, HeadlessSurface, SharedSurface, Surface};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let headless = Arc::new(HeadlessSurface::new());
    let surface: SharedSurface = headless.clone();
    surface.create_node(surface.document(), "div", "panel", "", None)?;
    let drag = DragContext::install(&surface);

    let gain = Slider::new(
        Arc::clone(&surface),
        Arc::clone(&drag),
        SliderArgs::new("panel", "gain", "Gain", 0.0, 10.0)
            .value(2.5)
            .on_value_change(|value: f64| info!(value, "gain changed")),
    )?;
    let balance = Slider::new(
        Arc::clone(&surface),
        Arc::clone(&drag),
        SliderArgs::new("panel", "balance", "Balance", -1.0, 1.0)
            .on_value_change(|value: f64| info!(value, "balance changed")),
    )?;

    // Pretend the embed rendered the sub-parts and reported their sizes,
    // then refit so the geometry reflects them.
    for id in ["gain", "balance"] {
        seed_rendered_sizes(&headless, id);
    }
    gain.refit();
    balance.refit();

    // Drag the gain button 40px to the right.
    let button = surface.node_by_id("gain-button").expect("gain button");
    let track = surface.node_by_id("gain-range").expect("gain track");
    headless.dispatch(button, &Event::pointer_down(Px::new(150.0)));
    for step in 1..=4 {
        let x = Px::new(150.0 + 10.0 * step as f64);
        headless.dispatch(track, &Event::pointer_move(x));
    }
    headless.dispatch(surface.document(), &Event::pointer_up());
    info!(value = gain.value()?, position = gain.button_position().raw(), "after drag");

    // Type an out-of-range value into the balance box; it clamps to the
    // nearer bound and flags the box.
    let value_box = surface.node_by_id("balance-value").expect("balance value box");
    surface.set_attr(value_box, "value", "3");
    headless.dispatch(value_box, &Event::key_release());
    info!(
        committed = balance.button_position().raw(),
        color = %surface.style(value_box, "color").unwrap_or_default(),
        "after out-of-range edit"
    );

    // Reset restores the midpoint default.
    let reset = surface.node_by_id("balance-reset").expect("balance reset");
    headless.dispatch(reset, &Event::click());
    info!(value = balance.value()?, "after reset");

    Ok(())
}

fn seed_rendered_sizes(surface: &HeadlessSurface, id: &str) {
    let node = |suffix: &str| {
        surface
            .node_by_id(&format!("{id}-{suffix}"))
            .expect("sub-part exists")
    };
    surface.set_measured(node("label"), Px::new(60.0), Px::new(12.0));
    surface.set_measured(node("value"), Px::new(48.0), Px::new(18.0));
    surface.set_measured(node("reset"), Px::new(12.0), Px::new(12.0));
    surface.set_measured(node("button"), Px::new(16.0), Px::new(16.0));
    surface.set_measured(node("bar"), Px::ZERO, Px::new(4.0));
    surface.set_measured(node("min"), Px::new(20.0), Px::new(10.0));
    surface.set_measured(node("max"), Px::new(20.0), Px::new(10.0));
    surface.set_computed_style(node("range"), "padding-left", "8px");
    surface.set_computed_style(node("range"), "padding-right", "8px");
}
