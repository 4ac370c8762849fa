//! The measurement capability layout consumes.
//!
//! Layout never reads the surface directly; it works against [`Measurable`]
//! so geometry can be computed from injected metrics in tests without a
//! rendering surface behind them.

use rheostat_foundation::Px;

use crate::{NodeId, Surface};

/// A box side, for padding and margin queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The left edge.
    Left,
    /// The right edge.
    Right,
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
}

impl Side {
    fn suffix(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

/// Rendered-size queries for one sub-part of a control.
pub trait Measurable {
    /// Rendered width.
    fn width(&self) -> Px;

    /// Rendered height.
    fn height(&self) -> Px;

    /// Padding on one side.
    fn padding(&self, side: Side) -> Px;

    /// Margin on one side.
    fn margin(&self, side: Side) -> Px;

    /// Width including horizontal padding and margin, the footprint a part
    /// occupies in a row.
    fn outer_width(&self) -> Px {
        self.width()
            + self.padding(Side::Left)
            + self.padding(Side::Right)
            + self.margin(Side::Left)
            + self.margin(Side::Right)
    }

    /// Height including vertical padding.
    fn padded_height(&self) -> Px {
        self.height() + self.padding(Side::Top) + self.padding(Side::Bottom)
    }
}

/// [`Measurable`] view of a node on a surface.
pub struct MeasuredNode<'a> {
    surface: &'a dyn Surface,
    node: NodeId,
}

impl<'a> MeasuredNode<'a> {
    /// Measures `node` through `surface`.
    pub fn new(surface: &'a dyn Surface, node: NodeId) -> Self {
        Self { surface, node }
    }
}

impl Measurable for MeasuredNode<'_> {
    fn width(&self) -> Px {
        self.surface.px_dimension(self.node, "width")
    }

    fn height(&self) -> Px {
        self.surface.px_dimension(self.node, "height")
    }

    fn padding(&self, side: Side) -> Px {
        self.surface
            .px_dimension(self.node, &format!("padding-{}", side.suffix()))
    }

    fn margin(&self, side: Side) -> Px {
        self.surface
            .px_dimension(self.node, &format!("margin-{}", side.suffix()))
    }
}
