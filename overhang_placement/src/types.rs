// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: anchor kinds, content specs, and results.

use kurbo::{Rect, Vec2};

/// Default height of one list row.
pub const DEFAULT_ROW_HEIGHT: f64 = 42.0;

/// Margin reserved above the viewport's bottom edge when a standard-anchored
/// panel overflows, so the clamped panel never touches the edge exactly.
pub const BOTTOM_OVERFLOW_MARGIN: f64 = 15.0;

/// Horizontal margin added on each side of a measured label by
/// [`fitting_width`](crate::metric::fitting_width).
pub const LABEL_MARGIN: f64 = 15.0;

/// The trigger element a panel is positioned relative to.
///
/// The two kinds differ in exactly one branch of [`compute`](crate::compute):
/// a bar-style anchor resolves horizontal overflow against its trailing edge
/// before the content offset is applied, while a standard anchor is clamped
/// against the viewport afterwards.
///
/// Frames are snapshots in viewport coordinates, taken at calculation time.
/// Staleness is the caller's responsibility; recompute on every layout pass
/// of the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnchorKind {
    /// A generic positioned element with settled bounds.
    Standard(Rect),
    /// A bar-style item whose trailing (right) edge is known independently of
    /// its frame.
    BarItem {
        /// Frame in viewport coordinates.
        frame: Rect,
        /// Trailing edge in viewport coordinates. When the panel would
        /// overflow the viewport, its right edge tucks under this edge
        /// rather than clamping to the viewport edge.
        trailing: f64,
    },
}

impl AnchorKind {
    /// A bar-item anchor whose trailing edge coincides with its frame.
    pub fn bar_item(frame: Rect) -> Self {
        Self::BarItem {
            frame,
            trailing: frame.x1,
        }
    }

    /// The anchor's frame in viewport coordinates.
    pub fn frame(&self) -> Rect {
        match *self {
            Self::Standard(r) => r,
            Self::BarItem { frame, .. } => frame,
        }
    }
}

/// Size and offset hints for the panel content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentSpec {
    /// Number of rows in the backing list.
    pub row_count: usize,
    /// Fixed height of each row.
    pub row_height: f64,
    /// Explicit panel width. When `None`, the width falls back to the wider
    /// of the anchor and the measured content.
    pub width: Option<f64>,
    /// Offset applied from the anchor's bottom-leading corner.
    pub offset: Vec2,
    /// Minimum clamped height for the panel to count as displayable.
    ///
    /// [`ContentSpec::new`] sets this to one row height, so
    /// [`Placement::visible`] means "at least one full row fits".
    pub min_visible_height: f64,
}

impl ContentSpec {
    /// Create a spec for `row_count` rows of `row_height` each, with no
    /// explicit width, a zero offset, and a one-row visibility threshold.
    pub fn new(row_count: usize, row_height: f64) -> Self {
        Self {
            row_count,
            row_height,
            width: None,
            offset: Vec2::ZERO,
            min_visible_height: row_height,
        }
    }

    /// Total unclamped height of the backing list.
    pub fn raw_height(&self) -> f64 {
        self.row_count as f64 * self.row_height
    }
}

impl Default for ContentSpec {
    fn default() -> Self {
        Self::new(0, DEFAULT_ROW_HEIGHT)
    }
}

/// Where and how large the panel should be, and whether it is worth showing.
///
/// Computed fresh by every [`compute`](crate::compute) call and never mutated
/// in place; hosts replace the previous value wholesale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Leading edge in viewport coordinates.
    pub x: f64,
    /// Top edge in viewport coordinates.
    pub y: f64,
    /// Panel width after fitting and clamping. Non-negative; zero only for
    /// degenerate input, which also reports the panel not visible.
    pub width: f64,
    /// Panel height after vertical clamping. Equals `visible_height`; kept
    /// separate so hosts can apply the rectangle without re-deriving it.
    pub height: f64,
    /// Vertical distance the unclamped list would extend past the viewport
    /// bottom, including the standard-anchor margin. Zero when everything
    /// fits.
    pub overflow_height: f64,
    /// List height that survives the clamp: raw height minus overflow,
    /// floored at zero.
    pub visible_height: f64,
    /// Whether the clamped panel can show at least
    /// [`ContentSpec::min_visible_height`] worth of content. A presentation
    /// request while this is false must be a no-op.
    pub visible: bool,
}

impl Placement {
    /// The panel rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// True when the backing list needs to scroll because rows were clamped
    /// away at the viewport bottom.
    pub fn needs_scroll(&self) -> bool {
        self.overflow_height > 0.0
    }
}
