// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar-item overflow.
//!
//! A toolbar item near the trailing edge: instead of clamping to the
//! viewport, the panel's right edge tucks under the anchor's trailing edge.
//!
//! Run:
//! - `cargo run -p overhang_demos --example bar_item_overflow`

use kurbo::Rect;
use overhang_dropdown::{AnchorRegistry, AnchorRole, Dropdown};
use overhang_placement::FixedAdvance;

fn main() {
    let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
    let metric = FixedAdvance { advance: 7.0 };

    let mut anchors = AnchorRegistry::new();
    let item = anchors.register(AnchorRole::BarItem);
    anchors.set_frame(item, Rect::new(250.0, 0.0, 300.0, 40.0));

    let labels = vec![
        "Cut".to_string(),
        "Copy".to_string(),
        "Paste and Match Style".to_string(),
    ];
    let mut dropdown = Dropdown::new(item, labels);
    dropdown.set_width(Some(100.0));

    let placement = *dropdown.relayout(&anchors, viewport, &metric).unwrap();
    println!("panel: {:?}", placement.rect());

    // Right edge aligned with the anchor's trailing edge, not the viewport's.
    assert_eq!(placement.x + placement.width, 300.0);
    assert!(dropdown.show());
}
