//! Normalized surface events.
//!
//! Mouse and touch gestures are folded into the same pointer events before
//! they reach the slider; the only coordinate the control consumes is the
//! pointer's x position, normalized across the page/client conventions the
//! way legacy embeds report it.

use std::sync::Arc;

use rheostat_foundation::Px;

/// The event classes a surface must be able to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Mouse button or touch pressed.
    PointerDown,
    /// Pointer moved while over the node the handler is attached to.
    PointerMove,
    /// Mouse button or touch released.
    PointerUp,
    /// Generic activation (click or tap).
    Click,
    /// Key released inside an editable node.
    KeyRelease,
}

/// A normalized event as delivered to attached handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The event class.
    pub kind: EventKind,
    /// Pointer x in page coordinates, when the embed reports it.
    pub page_x: Option<Px>,
    /// Pointer x in client coordinates, reported by embeds that lack
    /// page coordinates.
    pub client_x: Option<Px>,
}

impl Event {
    /// A pointer-down at the given page x.
    pub fn pointer_down(x: Px) -> Self {
        Self {
            kind: EventKind::PointerDown,
            page_x: Some(x),
            client_x: None,
        }
    }

    /// A pointer-move at the given page x.
    pub fn pointer_move(x: Px) -> Self {
        Self {
            kind: EventKind::PointerMove,
            page_x: Some(x),
            client_x: None,
        }
    }

    /// A pointer-up. Release position is irrelevant to the slider.
    pub fn pointer_up() -> Self {
        Self {
            kind: EventKind::PointerUp,
            page_x: None,
            client_x: None,
        }
    }

    /// A click or tap.
    pub fn click() -> Self {
        Self {
            kind: EventKind::Click,
            page_x: None,
            client_x: None,
        }
    }

    /// A key release inside an editable node. Handlers read the edited
    /// text back from the node, not from the event.
    pub fn key_release() -> Self {
        Self {
            kind: EventKind::KeyRelease,
            page_x: None,
            client_x: None,
        }
    }

    /// The pointer's x coordinate, preferring page over client
    /// coordinates.
    pub fn pointer_x(&self) -> Option<Px> {
        self.page_x.or(self.client_x)
    }
}

/// Handler invoked when an attached event fires.
pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Document-level select-start handler. Returning `false` suppresses text
/// selection, which drag gestures rely on.
pub type SelectStartHandler = Arc<dyn Fn() -> bool + Send + Sync>;
