// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Compute a panel rectangle below an anchor, then push the anchor toward the
//! viewport edges and watch the clamps engage.
//!
//! Run:
//! - `cargo run -p overhang_demos --example placement_basics`

use kurbo::Rect;
use overhang_placement::{AnchorKind, ContentSpec, compute};

fn main() {
    let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
    let mut content = ContentSpec::new(5, 42.0);
    content.width = Some(100.0);

    // Plenty of room: the panel hangs straight off the anchor's bottom edge.
    let anchor = AnchorKind::Standard(Rect::new(20.0, 100.0, 120.0, 140.0));
    let placement = compute(anchor, viewport, &content, 0.0);
    println!("roomy    : {:?}", placement.rect());
    assert!(placement.visible && !placement.needs_scroll());

    // Near the bottom: the height is clamped, never the origin.
    let anchor = AnchorKind::Standard(Rect::new(20.0, 260.0, 120.0, 300.0));
    let placement = compute(anchor, viewport, &content, 0.0);
    println!(
        "clamped  : {:?} (overflow {})",
        placement.rect(),
        placement.overflow_height
    );
    assert!(placement.needs_scroll());
    assert!(placement.y + placement.height <= viewport.y1);

    // Near the trailing edge: the panel shifts left to stay on-screen.
    let anchor = AnchorKind::Standard(Rect::new(250.0, 100.0, 350.0, 140.0));
    let placement = compute(anchor, viewport, &content, 0.0);
    println!("shifted  : {:?}", placement.rect());
    assert!(placement.x + placement.width <= viewport.x1);
}
