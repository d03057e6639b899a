// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Placement: a Kurbo-native placement calculator for anchored panels.
//!
//! Overhang Placement is a reusable building block for dropdown and overlay
//! menus: given a trigger element's frame, the viewport, and content size
//! hints, it computes where the panel goes, how much of it fits, and whether
//! it is worth presenting at all.
//!
//! - Positions the panel directly below the anchor's bottom edge, shifted by
//!   a configurable offset.
//! - Clamps vertical overflow by reducing height (never by moving the panel
//!   up), reporting the clamped amount so hosts can enable list scrolling.
//! - Fits the width to the widest label via a pluggable [`TextMetric`], then
//!   shifts or shrinks against the viewport's trailing edge.
//! - Gates presentation: a panel that cannot show one full row reports
//!   [`Placement::visible`] as false, and hosts must treat a show request in
//!   that state as a no-op.
//!
//! ## Not a layout engine
//!
//! This crate solves the single-anchor, single-panel problem only. It does
//! not measure or arrange arbitrary UI, arbitrate between widgets, or carry
//! accessibility semantics. Upstream code supplies settled anchor and
//! viewport rectangles in one shared coordinate space; this crate returns a
//! rectangle and flags, and the host applies them.
//!
//! ## Coordinate space and state
//!
//! All inputs are snapshots in the viewport's coordinate system, supplied
//! fresh per call. [`compute`] reads no ambient state, caches nothing, and is
//! a pure function: identical inputs yield identical results. Recompute on
//! every layout-triggering event of the host (anchor move or resize, viewport
//! rotation, data-source change, width change).
//!
//! ## Anchor kinds
//!
//! [`AnchorKind::Standard`] is a generic positioned element. A
//! [`AnchorKind::BarItem`] models toolbar-style items whose trailing edge is
//! known independently of their frame: when the panel would overflow the
//! viewport horizontally, its right edge tucks under the anchor's trailing
//! edge before the offset applies, instead of clamping to the viewport edge.
//! The bar-item branch also omits the bottom overflow margin that the
//! standard branch reserves; the asymmetry is inherited behavior and kept as
//! two documented branches.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use overhang_placement::{compute, AnchorKind, ContentSpec};
//!
//! // A 5-row menu under a button, inside a 320x480 viewport.
//! let anchor = AnchorKind::Standard(Rect::new(20.0, 100.0, 120.0, 140.0));
//! let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
//! let mut content = ContentSpec::new(5, 42.0);
//! content.width = Some(100.0);
//!
//! let placement = compute(anchor, viewport, &content, 0.0);
//! assert_eq!((placement.x, placement.y), (20.0, 140.0));
//! assert_eq!((placement.width, placement.height), (100.0, 210.0));
//! assert!(placement.visible);
//! assert!(!placement.needs_scroll());
//! ```
//!
//! ### Overflow at the viewport bottom
//!
//! ```
//! use kurbo::Rect;
//! use overhang_placement::{compute, AnchorKind, ContentSpec};
//!
//! // Ten rows anchored near the bottom: the list is clamped, not moved.
//! let anchor = AnchorKind::Standard(Rect::new(20.0, 260.0, 120.0, 300.0));
//! let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
//! let mut content = ContentSpec::new(10, 42.0);
//! content.width = Some(100.0);
//!
//! let placement = compute(anchor, viewport, &content, 0.0);
//! assert_eq!(placement.overflow_height, 255.0);
//! assert_eq!(placement.height, 165.0);
//! assert!(placement.visible);
//! assert!(placement.needs_scroll());
//! ```
//!
//! ### Sizing from labels
//!
//! ```
//! use kurbo::Rect;
//! use overhang_placement::{
//!     compute, fitting_width, AnchorKind, ContentSpec, FixedAdvance, LABEL_MARGIN,
//! };
//!
//! let labels = ["Short", "A considerably longer option"];
//! let metric = FixedAdvance { advance: 7.0 };
//! let fallback = fitting_width(labels, &metric, LABEL_MARGIN);
//!
//! let anchor = AnchorKind::Standard(Rect::new(10.0, 10.0, 70.0, 40.0));
//! let viewport = Rect::new(0.0, 0.0, 640.0, 480.0);
//! let content = ContentSpec::new(labels.len(), 42.0);
//!
//! // No explicit width: the panel grows past the anchor to fit the labels.
//! let placement = compute(anchor, viewport, &content, fallback);
//! assert_eq!(placement.width, fallback);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod metric;
mod types;

pub use metric::{FixedAdvance, MonospaceMetric, TextMetric, fitting_width};
pub use types::{
    AnchorKind, BOTTOM_OVERFLOW_MARGIN, ContentSpec, DEFAULT_ROW_HEIGHT, LABEL_MARGIN, Placement,
};

use kurbo::Rect;

/// Compute the panel placement for `anchor` inside `viewport`.
///
/// `fallback_width` is the measured content width (see [`fitting_width`]);
/// it is consulted only when `content.width` is `None`, both as a lower
/// bound on the initial width and in the width-fit pass.
///
/// The result always satisfies `width >= 0`, `height >= 0`, and
/// `y + height <= viewport.y1` once overflow handling has applied. Degenerate
/// input (zero rows, an offset that consumes the whole width, a viewport
/// shorter than one row) is clamped rather than rejected and reports
/// [`Placement::visible`] as false.
pub fn compute(
    anchor: AnchorKind,
    viewport: Rect,
    content: &ContentSpec,
    fallback_width: f64,
) -> Placement {
    let raw_height = content.raw_height();

    let (x, y, width, overflow_height) = match anchor {
        AnchorKind::Standard(frame) => {
            place_below(frame, viewport, content, fallback_width, raw_height)
        }
        AnchorKind::BarItem { frame, trailing } => {
            place_below_bar_item(frame, trailing, viewport, content, fallback_width, raw_height)
        }
    };

    // Width-fit pass: without an explicit width, grow to the measured content
    // so no label is clipped.
    let mut width = width;
    if content.width.is_none() {
        width = width.max(fallback_width);
    }

    // X-clamp pass: shift left to stay inside the viewport; once the panel
    // hits the leading edge, shrink instead.
    let mut x = x;
    let panel_max_x = x + width;
    if panel_max_x > viewport.x1 {
        let overflow_width = panel_max_x - viewport.x1;
        let adjusted_x = x - overflow_width;
        if adjusted_x > 0.0 {
            x = adjusted_x;
        } else {
            x = 0.0;
            width += adjusted_x;
        }
    }
    let width = width.max(0.0);

    let visible_height = (raw_height - overflow_height).max(0.0);
    let visible = width > 0.0 && visible_height >= content.min_visible_height;

    Placement {
        x,
        y,
        width,
        height: visible_height,
        overflow_height,
        visible_height,
        visible,
    }
}

/// Standard branch: the panel hangs off the anchor's bottom-leading corner.
fn place_below(
    frame: Rect,
    viewport: Rect,
    content: &ContentSpec,
    fallback_width: f64,
    raw_height: f64,
) -> (f64, f64, f64, f64) {
    let width = content
        .width
        .unwrap_or_else(|| frame.width().max(fallback_width) - content.offset.x);

    let x = frame.x0 + content.offset.x;
    let y = frame.y1 + content.offset.y;

    let panel_max_y = y + raw_height;
    let overflow_height = if panel_max_y > viewport.y1 {
        (panel_max_y - viewport.y1) + BOTTOM_OVERFLOW_MARGIN
    } else {
        0.0
    };

    (x, y, width, overflow_height)
}

/// Bar-item branch: horizontal overflow resolves against the anchor's
/// trailing edge before the offset applies, and the bottom margin is not
/// reserved.
fn place_below_bar_item(
    frame: Rect,
    trailing: f64,
    viewport: Rect,
    content: &ContentSpec,
    fallback_width: f64,
    raw_height: f64,
) -> (f64, f64, f64, f64) {
    let width = content
        .width
        .unwrap_or_else(|| frame.width().max(fallback_width) - content.offset.x);

    let mut x = frame.x0;
    let overflow_width = x + width - viewport.x1;
    if overflow_width > 0.0 {
        // Tuck the panel's right edge under the anchor's trailing edge.
        x -= overflow_width + (viewport.x1 - trailing);
    }
    x += content.offset.x;

    let y = frame.y1 + content.offset.y;

    let panel_max_y = y + raw_height;
    let overflow_height = (panel_max_y - viewport.y1).max(0.0);

    (x, y, width, overflow_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 480.0);

    fn anchor_at(x: f64, y: f64, w: f64, h: f64) -> AnchorKind {
        AnchorKind::Standard(Rect::new(x, y, x + w, y + h))
    }

    #[test]
    fn fits_below_anchor_without_overflow() {
        let mut content = ContentSpec::new(5, 42.0);
        content.width = Some(100.0);
        let p = compute(anchor_at(20.0, 100.0, 100.0, 40.0), VIEWPORT, &content, 0.0);
        assert_eq!(p.x, 20.0);
        assert_eq!(p.y, 140.0);
        assert_eq!(p.width, 100.0);
        assert_eq!(p.height, 210.0);
        assert_eq!(p.overflow_height, 0.0);
        assert!(p.visible);
    }

    #[test]
    fn bottom_overflow_clamps_height_with_margin() {
        let mut content = ContentSpec::new(10, 42.0);
        content.width = Some(100.0);
        // Anchor bottom at y=300: 300 + 420 = 720 exceeds 480 by 240.
        let p = compute(anchor_at(20.0, 260.0, 100.0, 40.0), VIEWPORT, &content, 0.0);
        assert_eq!(p.overflow_height, 255.0, "240 overflow + 15 margin");
        assert_eq!(p.visible_height, 165.0);
        assert_eq!(p.height, 165.0);
        assert!(p.visible, "165 >= one 42-unit row");
        assert!(p.needs_scroll());
        assert!(p.y + p.height <= VIEWPORT.y1);
    }

    #[test]
    fn right_overflow_shifts_panel_left() {
        let mut content = ContentSpec::new(3, 42.0);
        content.width = Some(100.0);
        let p = compute(anchor_at(250.0, 100.0, 100.0, 40.0), VIEWPORT, &content, 0.0);
        // 250 + 100 = 350 exceeds 320 by 30; shifted, not shrunk.
        assert_eq!(p.x, 220.0);
        assert_eq!(p.width, 100.0);
        assert!(p.x + p.width <= VIEWPORT.x1);
    }

    #[test]
    fn wide_explicit_width_shifts_until_leading_edge() {
        let mut content = ContentSpec::new(3, 42.0);
        content.width = Some(200.0);
        let p = compute(anchor_at(250.0, 100.0, 100.0, 40.0), VIEWPORT, &content, 0.0);
        // 250 + 200 = 450 exceeds 320 by 130; 250 - 130 = 120 is still on-screen.
        assert_eq!(p.x, 120.0);
        assert_eq!(p.width, 200.0);
        assert_eq!(p.x + p.width, VIEWPORT.x1);
    }

    #[test]
    fn panel_wider_than_viewport_shrinks_at_leading_edge() {
        let mut content = ContentSpec::new(3, 42.0);
        content.width = Some(400.0);
        let p = compute(anchor_at(10.0, 100.0, 100.0, 40.0), VIEWPORT, &content, 0.0);
        // 10 + 400 overflows by 90; shifting lands at -80, so pin and shrink.
        assert_eq!(p.x, 0.0);
        assert_eq!(p.width, 320.0);
        assert!(p.x + p.width <= VIEWPORT.x1);
    }

    #[test]
    fn zero_rows_is_never_visible() {
        let mut content = ContentSpec::new(0, 42.0);
        content.width = Some(100.0);
        let p = compute(anchor_at(20.0, 100.0, 100.0, 40.0), VIEWPORT, &content, 0.0);
        assert_eq!(p.height, 0.0);
        assert!(!p.visible);
    }

    #[test]
    fn viewport_shorter_than_one_row_is_not_visible() {
        let content = ContentSpec::new(4, 42.0);
        let anchor = anchor_at(0.0, 0.0, 100.0, 10.0);
        let p = compute(anchor, Rect::new(0.0, 0.0, 320.0, 30.0), &content, 80.0);
        // 10 + 168 overflows by 148 (+15); only 5 units survive.
        assert!(p.visible_height < content.row_height);
        assert!(!p.visible);
        assert!(p.height >= 0.0);
    }

    #[test]
    fn overflow_larger_than_content_floors_height_at_zero() {
        let content = ContentSpec::new(1, 42.0);
        // Anchor bottom sits below the viewport entirely.
        let anchor = anchor_at(0.0, 470.0, 100.0, 40.0);
        let p = compute(anchor, VIEWPORT, &content, 80.0);
        assert_eq!(p.height, 0.0);
        assert!(!p.visible);
    }

    #[test]
    fn fallback_width_grows_unsized_panel() {
        let content = ContentSpec::new(3, 42.0);
        // Anchor is 60 wide; measured content wants 140.
        let p = compute(anchor_at(20.0, 100.0, 60.0, 40.0), VIEWPORT, &content, 140.0);
        assert_eq!(p.width, 140.0);
    }

    #[test]
    fn explicit_width_ignores_fallback() {
        let mut content = ContentSpec::new(3, 42.0);
        content.width = Some(90.0);
        let p = compute(anchor_at(20.0, 100.0, 60.0, 40.0), VIEWPORT, &content, 140.0);
        assert_eq!(p.width, 90.0);
    }

    #[test]
    fn offset_moves_origin_and_narrows_fallback_width() {
        let mut content = ContentSpec::new(3, 42.0);
        content.offset = Vec2::new(10.0, 5.0);
        let p = compute(anchor_at(20.0, 100.0, 100.0, 40.0), VIEWPORT, &content, 0.0);
        assert_eq!(p.x, 30.0);
        assert_eq!(p.y, 145.0);
        assert_eq!(p.width, 90.0);
    }

    #[test]
    fn offset_consuming_width_clamps_to_zero_and_hides() {
        let mut content = ContentSpec::new(3, 42.0);
        content.offset = Vec2::new(150.0, 0.0);
        let p = compute(anchor_at(20.0, 100.0, 100.0, 40.0), VIEWPORT, &content, 0.0);
        assert!(p.width >= 0.0);
        assert!(!p.visible);
    }

    #[test]
    fn overflow_grows_with_row_count() {
        let anchor = anchor_at(20.0, 260.0, 100.0, 40.0);
        let mut last = 0.0;
        for rows in 0..24 {
            let mut content = ContentSpec::new(rows, 42.0);
            content.width = Some(100.0);
            let p = compute(anchor, VIEWPORT, &content, 0.0);
            assert!(
                p.overflow_height >= last,
                "overflow must not decrease as rows grow"
            );
            last = p.overflow_height;
        }
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let mut content = ContentSpec::new(7, 42.0);
        content.offset = Vec2::new(4.0, 2.0);
        let anchor = anchor_at(200.0, 400.0, 90.0, 30.0);
        let a = compute(anchor, VIEWPORT, &content, 120.0);
        let b = compute(anchor, VIEWPORT, &content, 120.0);
        assert_eq!(a, b);
    }

    #[test]
    fn visibility_matches_one_row_threshold_exactly() {
        // Two 42-unit rows: visible_height = 465 - anchor_bottom once the
        // overflow branch is active, so the one-row boundary sits at 423.
        for (anchor_bottom, expect_visible) in [(423.0, true), (424.0, false)] {
            let mut content = ContentSpec::new(2, 42.0);
            content.width = Some(100.0);
            let anchor = anchor_at(20.0, anchor_bottom - 40.0, 100.0, 40.0);
            let p = compute(anchor, VIEWPORT, &content, 0.0);
            assert_eq!(
                p.visible,
                expect_visible,
                "anchor bottom {anchor_bottom}: visible_height {}",
                p.visible_height
            );
            assert_eq!(p.visible, p.visible_height >= content.row_height);
        }
    }

    #[test]
    fn bar_item_tucks_right_edge_under_trailing_edge() {
        let frame = Rect::new(250.0, 0.0, 300.0, 40.0);
        let mut content = ContentSpec::new(3, 42.0);
        content.width = Some(100.0);
        let p = compute(AnchorKind::bar_item(frame), VIEWPORT, &content, 0.0);
        // 250 + 100 overflows by 30; tuck pulls x back by 30 + (320 - 300).
        assert_eq!(p.x, 200.0);
        assert_eq!(p.x + p.width, frame.x1);
    }

    #[test]
    fn bar_item_without_overflow_keeps_leading_edge() {
        let frame = Rect::new(40.0, 0.0, 100.0, 40.0);
        let mut content = ContentSpec::new(3, 42.0);
        content.width = Some(100.0);
        let p = compute(AnchorKind::bar_item(frame), VIEWPORT, &content, 0.0);
        assert_eq!(p.x, 40.0);
    }

    #[test]
    fn bar_item_offset_applies_after_tuck() {
        let frame = Rect::new(250.0, 0.0, 300.0, 40.0);
        let mut content = ContentSpec::new(3, 42.0);
        content.width = Some(100.0);
        content.offset = Vec2::new(-8.0, 0.0);
        let p = compute(AnchorKind::bar_item(frame), VIEWPORT, &content, 0.0);
        assert_eq!(p.x, 192.0);
    }

    #[test]
    fn bar_item_vertical_overflow_has_no_margin() {
        let frame = Rect::new(20.0, 260.0, 120.0, 300.0);
        let mut content = ContentSpec::new(10, 42.0);
        content.width = Some(100.0);
        let p = compute(AnchorKind::bar_item(frame), VIEWPORT, &content, 0.0);
        // Same geometry as the standard case, minus the 15-unit pad.
        assert_eq!(p.overflow_height, 240.0);
        assert_eq!(p.height, 180.0);
        assert_eq!(p.y + p.height, VIEWPORT.y1);
    }

    #[test]
    fn result_stays_inside_viewport_horizontally() {
        for x in [0.0, 50.0, 200.0, 280.0, 310.0] {
            for width in [40.0, 100.0, 200.0, 500.0] {
                let mut content = ContentSpec::new(3, 42.0);
                content.width = Some(width);
                let p = compute(anchor_at(x, 100.0, 60.0, 30.0), VIEWPORT, &content, 0.0);
                assert!(p.x >= 0.0, "x={x} width={width}");
                assert!(
                    p.x + p.width <= VIEWPORT.x1 + 1e-9,
                    "x={x} width={width} gave {} + {}",
                    p.x,
                    p.width
                );
            }
        }
    }
}
