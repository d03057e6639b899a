// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown flow.
//!
//! Wire a registry, a dropdown, and an observer together: relayout, show,
//! pick an item, and watch the callbacks fire in order.
//!
//! Run:
//! - `cargo run -p overhang_demos --example dropdown_flow`

use kurbo::Rect;
use overhang_dropdown::{AnchorRegistry, AnchorRole, Dropdown, DropdownObserver};
use overhang_placement::FixedAdvance;

struct Printer;

impl DropdownObserver for Printer {
    fn will_show(&mut self) {
        println!("observer: will_show");
    }
    fn will_hide(&mut self) {
        println!("observer: will_hide");
    }
    fn item_selected(&mut self, index: usize, label: &str) {
        println!("observer: picked #{index} ({label})");
    }
}

fn main() {
    let mut anchors = AnchorRegistry::new();
    let button = anchors.register(AnchorRole::Standard);
    anchors.set_frame(button, Rect::new(20.0, 100.0, 120.0, 140.0));

    let items = vec![
        "Espresso".to_string(),
        "Cappuccino".to_string(),
        "Flat White".to_string(),
    ];
    let mut dropdown = Dropdown::new(button, items).with_observer(Printer);

    let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
    let metric = FixedAdvance { advance: 7.0 };

    // A show request before any relayout is suppressed.
    assert!(!dropdown.show());

    let placement = *dropdown.relayout(&anchors, viewport, &metric).unwrap();
    println!("panel: {:?}", placement.rect());

    assert!(dropdown.show());
    assert!(dropdown.select(1));
    println!("selected: {:?}", dropdown.selected_label());
    assert!(!dropdown.is_open());
}
