//! Rendering-surface abstraction for the rheostat slider control.
//!
//! The slider never talks to a concrete widget tree directly. Everything it
//! needs from the outside world (node creation, attribute and style access,
//! the `"<n>px"` dimension convention, event attachment, and the
//! document-level select-start handler) goes through the [`Surface`] trait,
//! so the whole control runs headlessly in tests and demos.
//!
//! ## Usage
//!
//! Production embeds implement [`Surface`] over their widget tree; tests use
//! [`HeadlessSurface`] (feature `headless`) and synthesize events with
//! [`HeadlessSurface::dispatch`].
#![deny(missing_docs, clippy::unwrap_used)]

use std::sync::Arc;

use thiserror::Error;

use rheostat_foundation::Px;

mod event;
#[cfg(feature = "headless")]
mod headless;
mod measure;

pub use event::{Event, EventHandler, EventKind, SelectStartHandler};
#[cfg(feature = "headless")]
pub use headless::HeadlessSurface;
pub use measure::{Measurable, MeasuredNode, Side};

slotmap::new_key_type! {
    /// Opaque handle to a node on the rendering surface.
    pub struct NodeId;
}

/// Errors raised by surface operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// A node handle did not resolve on this surface.
    #[error("node not found on surface")]
    NodeNotFound,
    /// `create_node` was called without a live parent.
    #[error("parent node required")]
    ParentRequired,
    /// A node with the requested identifier already exists.
    #[error("duplicate node identifier: {0}")]
    DuplicateId(String),
}

/// Access to the widget tree the slider renders into.
///
/// Methods take `&self`; implementations use interior mutability because a
/// surface is shared between sliders and their event handlers via
/// `Arc<dyn Surface>`.
pub trait Surface: Send + Sync {
    /// The document root. Handlers attached here observe events anywhere
    /// on the surface.
    fn document(&self) -> NodeId;

    /// Resolves a node by its identifier attribute.
    fn node_by_id(&self, id: &str) -> Option<NodeId>;

    /// Creates a child node under `parent` with the given tag, identifier,
    /// class, and optional text content. Fails when the parent is absent.
    fn create_node(
        &self,
        parent: NodeId,
        tag: &str,
        id: &str,
        class: &str,
        text: Option<&str>,
    ) -> Result<NodeId, SurfaceError>;

    /// Reads an attribute.
    fn attr(&self, node: NodeId, name: &str) -> Option<String>;

    /// Writes an attribute.
    fn set_attr(&self, node: NodeId, name: &str, value: &str);

    /// Reads a style property, falling back to the computed style when no
    /// explicit value has been set.
    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    /// Writes a style property.
    fn set_style(&self, node: NodeId, property: &str, value: &str);

    /// Attaches an event handler to a node. Multiple handlers per event
    /// are invoked in attachment order.
    fn attach(&self, node: NodeId, kind: EventKind, handler: EventHandler);

    /// Swaps the document-level select-start handler, returning the handler
    /// that was installed before. Drag gestures install a suppressor here
    /// and restore the previous handler on release.
    fn replace_select_start_handler(
        &self,
        handler: Option<SelectStartHandler>,
    ) -> Option<SelectStartHandler>;

    /// Reads a style property as a pixel dimension, parsing the `"<n>px"`
    /// convention. Unset or unparsable dimensions read as zero.
    fn px_dimension(&self, node: NodeId, property: &str) -> Px {
        let value = match self.style(node, property) {
            Some(value) => value,
            None => return Px::ZERO,
        };
        value
            .trim()
            .strip_suffix("px")
            .and_then(|number| number.trim().parse::<f64>().ok())
            .map(Px::new)
            .unwrap_or(Px::ZERO)
    }

    /// Writes a style property as a pixel dimension in the `"<n>px"`
    /// convention.
    fn set_px_dimension(&self, node: NodeId, property: &str, value: Px) {
        self.set_style(node, property, &format!("{}px", value.raw()));
    }
}

/// Shared handle to a surface implementation.
pub type SharedSurface = Arc<dyn Surface>;
