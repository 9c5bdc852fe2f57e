//! Scroll-edge detection for horizontal rails.
//!
//! A rail exposes two affordance booleans recomputed from every scroll
//! event: can we go further back, can we go further forward. A small
//! epsilon keeps sub-pixel rounding from flickering the arrows at the
//! boundaries.

/// Slack applied at both edges, in logical pixels.
pub const EDGE_EPSILON: f32 = 10.0;

/// Edge affordances of a horizontally scrollable rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEdges {
    pub can_scroll_backward: bool,
    pub can_scroll_forward: bool,
}

impl Default for ScrollEdges {
    /// Affordances before the first scroll event: a freshly mounted rail
    /// sits at its start with content extending beyond the viewport.
    fn default() -> Self {
        Self {
            can_scroll_backward: false,
            can_scroll_forward: true,
        }
    }
}

impl ScrollEdges {
    /// Recompute the affordances from current scroll metrics.
    ///
    /// `offset` is the scroll position, `content_extent` the total
    /// scrollable width, `viewport_extent` the visible width.
    pub fn from_metrics(offset: f32, content_extent: f32, viewport_extent: f32) -> Self {
        Self {
            can_scroll_backward: offset > EDGE_EPSILON,
            can_scroll_forward: offset < content_extent - viewport_extent - EDGE_EPSILON,
        }
    }
}
