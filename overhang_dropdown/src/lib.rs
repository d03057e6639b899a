// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Dropdown: the widget core for an anchored dropdown menu.
//!
//! ## Overview
//!
//! This crate owns the state a dropdown carries between layout passes — the
//! backing labels, the selection, the cached panel placement — and sequences
//! the lifecycle callbacks around it. Geometry comes from
//! [`overhang_placement`]; rendering, styling, animation curves, and gesture
//! recognition stay with the host toolkit.
//!
//! - [`AnchorRegistry`]: non-owning anchor handles. The host owns its UI
//!   tree; the dropdown keeps only a generational [`AnchorId`] and resolves
//!   it at calculation time. Anchors that are stale, not yet laid out, or
//!   hidden simply fail to resolve.
//! - [`Dropdown`]: the state machine. [`Dropdown::relayout`] recomputes the
//!   placement from fresh anchor/viewport snapshots; [`Dropdown::show`] is
//!   gated on the result (a request while the panel is not displayable is a
//!   silent no-op); [`Dropdown::select`] records the choice, notifies, and
//!   hides.
//! - [`DropdownObserver`]: lifecycle notifications with no-op defaults,
//!   fired synchronously — `will_show` before presentation, `will_hide`
//!   before dismissal, `item_selected` once per selection and before the
//!   hide that follows it.
//!
//! ## Workflow
//!
//! 1) Register the trigger element and refresh its frame whenever the host
//!    lays out.
//! 2) Call [`Dropdown::relayout`] with the current viewport and a
//!    [`TextMetric`](overhang_placement::TextMetric) once per
//!    layout-triggering event, on the host's UI thread.
//! 3) Apply the returned [`Placement`](overhang_placement::Placement) to the
//!    panel container; enable list scrolling when
//!    [`Dropdown::needs_scroll`] says rows were clamped away.
//! 4) Drive [`Dropdown::show`] / [`Dropdown::select`] / [`Dropdown::hide`]
//!    from the host's gestures.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use overhang_dropdown::{AnchorRegistry, AnchorRole, Dropdown};
//! use overhang_placement::FixedAdvance;
//!
//! let mut anchors = AnchorRegistry::new();
//! let button = anchors.register(AnchorRole::Standard);
//! anchors.set_frame(button, Rect::new(20.0, 100.0, 120.0, 140.0));
//!
//! let mut dropdown = Dropdown::new(
//!     button,
//!     vec!["Red".into(), "Green".into(), "Blue".into()],
//! );
//!
//! let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
//! let metric = FixedAdvance { advance: 7.0 };
//! let placement = *dropdown.relayout(&anchors, viewport, &metric).unwrap();
//! assert!(placement.visible);
//!
//! assert!(dropdown.show());
//! assert!(dropdown.select(1));
//! assert_eq!(dropdown.selected_label(), Some("Green"));
//! assert!(!dropdown.is_open());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchors;
mod dropdown;

pub use anchors::{AnchorFlags, AnchorId, AnchorRegistry, AnchorRole};
pub use dropdown::{Dropdown, DropdownObserver, NoObserver};
