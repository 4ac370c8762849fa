//! Drag gesture state and the per-document drag context.
//!
//! A slider is Idle until a pointer-down on its button and Dragging until
//! the next pointer-up anywhere in the document. Moves are tracked over the
//! track region only, so the context below is what distinguishes "button
//! being dragged" from "pointer passing over a track".

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

use rheostat_foundation::Px;
use rheostat_surface::{EventKind, NodeId, SelectStartHandler, SharedSurface, Surface};

/// Transient state of one active gesture, captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DragSession {
    /// Button left offset minus pointer x at drag start. Adding the
    /// current pointer x yields the new button left without re-deriving it
    /// from absolute geometry on every move.
    displacement: Px,
}

impl DragSession {
    /// Captures the displacement between the button and the pointer.
    pub fn begin(button_left: Px, pointer_x: Px) -> Self {
        Self {
            displacement: button_left - pointer_x,
        }
    }

    /// The button left offset this gesture requests for a pointer x.
    pub fn target(&self, pointer_x: Px) -> Px {
        pointer_x + self.displacement
    }
}

struct DragContextInner {
    active_button: Option<NodeId>,
    saved_select_start: Option<Option<SelectStartHandler>>,
}

/// Per-document drag bookkeeping shared by every slider on a surface.
///
/// Holds which button is the active drag target and the select-start
/// handler displaced for the gesture's duration. Mutation discipline: only
/// a button's pointer-down handler activates the context, and only the
/// document-level pointer-up hook installed by [`DragContext::install`]
/// deactivates it. The pointer may leave the track while still down, so
/// release must be observed document-wide.
pub struct DragContext {
    inner: Mutex<DragContextInner>,
}

impl DragContext {
    /// Creates the context and installs its document-level pointer-up hook
    /// on `surface`. One context per document; every slider on the surface
    /// shares it, so at most one slider tracks drag motion at a time.
    pub fn install(surface: &SharedSurface) -> Arc<Self> {
        let context = Arc::new(Self {
            inner: Mutex::new(DragContextInner {
                active_button: None,
                saved_select_start: None,
            }),
        });
        let hook = Arc::clone(&context);
        let weak_surface: Weak<dyn Surface> = Arc::downgrade(surface);
        surface.attach(
            surface.document(),
            EventKind::PointerUp,
            Arc::new(move |_event| {
                if let Some(surface) = weak_surface.upgrade() {
                    hook.end(surface.as_ref());
                }
            }),
        );
        context
    }

    /// Marks `button` as the active drag target and suppresses document
    /// text selection, remembering whatever handler was installed before.
    pub(super) fn begin(&self, surface: &dyn Surface, button: NodeId) {
        let mut inner = self.inner.lock();
        let previous = surface.replace_select_start_handler(Some(Arc::new(|| false)));
        if inner.active_button.is_none() {
            inner.saved_select_start = Some(previous);
        }
        inner.active_button = Some(button);
        debug!("drag started");
    }

    /// Clears the active target on any pointer-up, whether or not a drag
    /// was in progress, and restores the displaced select-start handler.
    fn end(&self, surface: &dyn Surface) {
        let mut inner = self.inner.lock();
        if let Some(saved) = inner.saved_select_start.take() {
            surface.replace_select_start_handler(saved);
        }
        if inner.active_button.take().is_some() {
            debug!("drag ended");
        }
    }

    /// Whether `button` is the active drag target.
    pub(super) fn is_active(&self, button: NodeId) -> bool {
        self.inner.lock().active_button == Some(button)
    }
}
