// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown state machine: items, selection, and gated show/hide.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Rect, Vec2};
use overhang_placement::{
    ContentSpec, DEFAULT_ROW_HEIGHT, LABEL_MARGIN, Placement, TextMetric, compute, fitting_width,
};

use crate::anchors::{AnchorId, AnchorRegistry};

/// Observer of dropdown lifecycle points.
///
/// All methods default to no-ops; implement only what the host cares about.
/// Notifications fire synchronously at well-defined points: `will_show`
/// before a presentation proceeds, `will_hide` before dismissal begins, and
/// `item_selected` once per selection, before the hide that follows it.
pub trait DropdownObserver {
    /// The dropdown is about to be presented.
    fn will_show(&mut self) {}

    /// The dropdown is about to be dismissed.
    fn will_hide(&mut self) {}

    /// The user chose `label` at `index`. Fired at most once per selection,
    /// before the accompanying hide.
    fn item_selected(&mut self, index: usize, label: &str) {
        let _ = (index, label);
    }
}

/// An observer that ignores every notification.
///
/// Used by default when the host has no interest in lifecycle points.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObserver;

impl DropdownObserver for NoObserver {}

/// An anchored dropdown menu: a list of labels, a selection, and a cached
/// placement for the panel.
///
/// The dropdown holds only a non-owning [`AnchorId`]; the host owns the
/// trigger element and the [`AnchorRegistry`]. Call [`Dropdown::relayout`]
/// on every layout-triggering event, then [`Dropdown::show`] to request
/// presentation. A request while the cached placement is missing or not
/// visible is silently suppressed.
pub struct Dropdown<O: DropdownObserver = NoObserver> {
    anchor: AnchorId,
    items: Vec<String>,
    selected: Option<usize>,
    content: ContentSpec,
    observer: O,
    placement: Option<Placement>,
    open: bool,
}

impl<O: DropdownObserver> core::fmt::Debug for Dropdown<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dropdown")
            .field("anchor", &self.anchor)
            .field("items", &self.items.len())
            .field("selected", &self.selected)
            .field("content", &self.content)
            .field("placement", &self.placement)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl Dropdown<NoObserver> {
    /// Create a dropdown over `items`, anchored to `anchor`.
    pub fn new(anchor: AnchorId, items: Vec<String>) -> Self {
        let content = ContentSpec::new(items.len(), DEFAULT_ROW_HEIGHT);
        Self {
            anchor,
            items,
            selected: None,
            content,
            observer: NoObserver,
            placement: None,
            open: false,
        }
    }
}

impl<O: DropdownObserver> Dropdown<O> {
    /// Attach an observer, replacing the current one.
    pub fn with_observer<O2: DropdownObserver>(self, observer: O2) -> Dropdown<O2> {
        Dropdown {
            anchor: self.anchor,
            items: self.items,
            selected: self.selected,
            content: self.content,
            observer,
            placement: self.placement,
            open: self.open,
        }
    }

    /// The backing labels.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replace the backing labels.
    ///
    /// Invalidates the cached placement and clamps a selection that no
    /// longer points at an item.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.content.row_count = self.items.len();
        if self.selected.is_some_and(|i| i >= self.items.len()) {
            self.selected = None;
        }
        self.placement = None;
    }

    /// Set the height of each row, which is also the visibility threshold.
    pub fn set_row_height(&mut self, row_height: f64) {
        self.content.row_height = row_height;
        self.content.min_visible_height = row_height;
        self.placement = None;
    }

    /// Set or clear the explicit panel width.
    pub fn set_width(&mut self, width: Option<f64>) {
        self.content.width = width;
        self.placement = None;
    }

    /// Set the offset applied from the anchor's bottom-leading corner.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.content.offset = offset;
        self.placement = None;
    }

    /// The current content spec fed to placement calculations.
    pub fn content(&self) -> &ContentSpec {
        &self.content
    }

    /// The selected row, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected row's label, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.and_then(|i| self.items.get(i)).map(String::as_str)
    }

    /// Preselect a row without firing the selection callback, or clear the
    /// selection. Out-of-range indices clear it.
    pub fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected.filter(|&i| i < self.items.len());
    }

    /// Recompute the panel placement against the current anchor frame.
    ///
    /// This is the input hook for every layout-triggering event of the host:
    /// anchor move or resize, viewport rotation, data-source change, width
    /// change. When the anchor does not resolve (stale id, not laid out,
    /// hidden), the cached placement is cleared and `None` is returned; a
    /// subsequent [`Dropdown::show`] is then a no-op.
    pub fn relayout<M: TextMetric + ?Sized>(
        &mut self,
        anchors: &AnchorRegistry,
        viewport: Rect,
        metric: &M,
    ) -> Option<&Placement> {
        let Some(anchor) = anchors.resolve(self.anchor) else {
            self.placement = None;
            return None;
        };
        let fallback = fitting_width(self.items.iter(), metric, LABEL_MARGIN);
        self.placement = Some(compute(anchor, viewport, &self.content, fallback));
        self.placement.as_ref()
    }

    /// The placement computed by the last [`Dropdown::relayout`], if any.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Whether the panel is currently presented.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the backing list needs to scroll under the current placement.
    pub fn needs_scroll(&self) -> bool {
        self.placement.is_some_and(|p| p.needs_scroll())
    }

    /// Request presentation.
    ///
    /// Fires [`DropdownObserver::will_show`] and opens, returning `true`.
    /// Returns `false` without side effects when there is no cached
    /// placement or it is not visible; the request is suppressed, not an
    /// error. Showing an already-open dropdown is a no-op returning `true`.
    pub fn show(&mut self) -> bool {
        if self.open {
            return true;
        }
        if !self.placement.is_some_and(|p| p.visible) {
            return false;
        }
        self.observer.will_show();
        self.open = true;
        true
    }

    /// Dismiss the panel, firing [`DropdownObserver::will_hide`] first.
    /// Hiding an already-hidden dropdown is a no-op.
    pub fn hide(&mut self) {
        if self.open {
            self.observer.will_hide();
            self.open = false;
        }
    }

    /// Record a user selection of the row at `index`.
    ///
    /// Fires [`DropdownObserver::item_selected`] with the index and label,
    /// then hides. Returns `false` for an out-of-range index, leaving state
    /// untouched.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(label) = self.items.get(index) else {
            return false;
        };
        self.selected = Some(index);
        self.observer.item_selected(index, label.as_str());
        self.hide();
        true
    }

    /// The attached observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The attached observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
