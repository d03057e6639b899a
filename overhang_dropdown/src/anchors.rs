// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-owning anchor handles and the registry that resolves them.
//!
//! A dropdown must not extend its trigger element's lifetime: the anchor is
//! owned by the surrounding UI tree. The registry models that as an
//! identifier plus external lookup. The host registers an anchor, refreshes
//! its frame on every layout pass, and removes it when the element leaves the
//! tree; the dropdown keeps only the copyable [`AnchorId`] and resolves it at
//! calculation time. A stale id never aliases a different live anchor because
//! the generation must match.

use alloc::vec::Vec;
use bitflags::bitflags;
use kurbo::Rect;
use overhang_placement::AnchorKind;

/// Identifier for a registered anchor (generational).
///
/// Small, copyable, and stable until the anchor is removed. On removal the
/// slot is freed; reuse increments the generation, producing a distinct id.
/// Use [`AnchorRegistry::is_alive`] to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnchorId(u32, u32);

impl AnchorId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Anchor state bits consulted by [`AnchorRegistry::resolve`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AnchorFlags: u8 {
        /// A frame has been supplied since registration. Bar-style items in
        /// particular have no true bounds until the host has rendered them.
        const LAID_OUT = 0b0000_0001;
        /// The anchor is currently visible in the host tree.
        const VISIBLE  = 0b0000_0010;
    }
}

impl Default for AnchorFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Which [`AnchorKind`] an entry resolves to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnchorRole {
    /// A generic positioned element.
    Standard,
    /// A bar-style item with trailing-edge overflow handling.
    BarItem,
}

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    role: AnchorRole,
    frame: Rect,
    trailing: f64,
    flags: AnchorFlags,
}

/// Registry of anchor frames, addressed by generational [`AnchorId`].
pub struct AnchorRegistry {
    slots: Vec<Option<Entry>>, // generational slots
    free_list: Vec<usize>,
}

impl core::fmt::Debug for AnchorRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("AnchorRegistry")
            .field("slots_total", &total)
            .field("slots_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for AnchorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Register an anchor with no frame yet. It will not resolve until the
    /// host supplies one via [`AnchorRegistry::set_frame`].
    pub fn register(&mut self, role: AnchorRole) -> AnchorId {
        let entry = Entry {
            generation: 0, // patched below
            role,
            frame: Rect::ZERO,
            trailing: 0.0,
            flags: AnchorFlags::default(),
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.slots[idx].as_ref().map(|e| e.generation).unwrap_or(0) + 1;
            self.slots[idx] = Some(Entry { generation, ..entry });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "AnchorId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Entry { generation, ..entry }));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "AnchorId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        AnchorId::new(idx, generation)
    }

    /// Update the anchor's frame (viewport coordinates), marking it laid out.
    ///
    /// The trailing edge follows the frame; use
    /// [`AnchorRegistry::set_trailing`] afterwards when it differs.
    pub fn set_frame(&mut self, id: AnchorId, frame: Rect) {
        if let Some(entry) = self.entry_mut(id) {
            entry.frame = frame;
            entry.trailing = frame.x1;
            entry.flags |= AnchorFlags::LAID_OUT;
        }
    }

    /// Override the trailing edge of a bar-style anchor.
    pub fn set_trailing(&mut self, id: AnchorId, trailing: f64) {
        if let Some(entry) = self.entry_mut(id) {
            entry.trailing = trailing;
        }
    }

    /// Replace the anchor's flags.
    pub fn set_flags(&mut self, id: AnchorId, flags: AnchorFlags) {
        if let Some(entry) = self.entry_mut(id) {
            entry.flags = flags;
        }
    }

    /// Remove an anchor, freeing its slot. Existing ids for it go stale.
    pub fn remove(&mut self, id: AnchorId) {
        if self.entry_mut(id).is_some() {
            self.slots[id.idx()] = None;
            self.free_list.push(id.idx());
        }
    }

    /// Whether `id` still refers to a live anchor.
    pub fn is_alive(&self, id: AnchorId) -> bool {
        self.entry(id).is_some()
    }

    /// The anchor's current frame, if laid out.
    pub fn frame(&self, id: AnchorId) -> Option<Rect> {
        let entry = self.entry(id)?;
        entry
            .flags
            .contains(AnchorFlags::LAID_OUT)
            .then_some(entry.frame)
    }

    /// Resolve `id` to the [`AnchorKind`] a placement calculation needs.
    ///
    /// Returns `None` when the id is stale, the anchor has no frame yet, or
    /// it is not visible. Callers must not run a placement calculation on a
    /// miss; there is no anchor to place against.
    pub fn resolve(&self, id: AnchorId) -> Option<AnchorKind> {
        let entry = self.entry(id)?;
        if !entry.flags.contains(AnchorFlags::LAID_OUT | AnchorFlags::VISIBLE) {
            return None;
        }
        Some(match entry.role {
            AnchorRole::Standard => AnchorKind::Standard(entry.frame),
            AnchorRole::BarItem => AnchorKind::BarItem {
                frame: entry.frame,
                trailing: entry.trailing,
            },
        })
    }

    fn entry(&self, id: AnchorId) -> Option<&Entry> {
        let entry = self.slots.get(id.idx())?.as_ref()?;
        (entry.generation == id.1).then_some(entry)
    }

    fn entry_mut(&mut self, id: AnchorId) -> Option<&mut Entry> {
        let entry = self.slots.get_mut(id.idx())?.as_mut()?;
        if entry.generation != id.1 {
            return None;
        }
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlaid_anchor_does_not_resolve() {
        let mut anchors = AnchorRegistry::new();
        let id = anchors.register(AnchorRole::Standard);
        assert!(anchors.is_alive(id));
        assert_eq!(anchors.resolve(id), None);

        anchors.set_frame(id, Rect::new(10.0, 10.0, 60.0, 40.0));
        assert_eq!(
            anchors.resolve(id),
            Some(AnchorKind::Standard(Rect::new(10.0, 10.0, 60.0, 40.0)))
        );
    }

    #[test]
    fn hidden_anchor_does_not_resolve() {
        let mut anchors = AnchorRegistry::new();
        let id = anchors.register(AnchorRole::Standard);
        anchors.set_frame(id, Rect::new(0.0, 0.0, 50.0, 20.0));
        anchors.set_flags(id, AnchorFlags::LAID_OUT);
        assert_eq!(anchors.resolve(id), None);

        anchors.set_flags(id, AnchorFlags::LAID_OUT | AnchorFlags::VISIBLE);
        assert!(anchors.resolve(id).is_some());
    }

    #[test]
    fn removal_makes_ids_stale() {
        let mut anchors = AnchorRegistry::new();
        let id = anchors.register(AnchorRole::Standard);
        anchors.set_frame(id, Rect::new(0.0, 0.0, 50.0, 20.0));
        anchors.remove(id);
        assert!(!anchors.is_alive(id));
        assert_eq!(anchors.resolve(id), None);

        // Updates through a stale id are ignored.
        anchors.set_frame(id, Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(anchors.frame(id), None);
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let mut anchors = AnchorRegistry::new();
        let old = anchors.register(AnchorRole::Standard);
        anchors.remove(old);
        let new = anchors.register(AnchorRole::Standard);
        assert_ne!(old, new);
        assert!(!anchors.is_alive(old));
        assert!(anchors.is_alive(new));
    }

    #[test]
    fn bar_item_resolves_with_trailing_edge() {
        let mut anchors = AnchorRegistry::new();
        let id = anchors.register(AnchorRole::BarItem);
        anchors.set_frame(id, Rect::new(250.0, 0.0, 300.0, 40.0));
        anchors.set_trailing(id, 310.0);
        assert_eq!(
            anchors.resolve(id),
            Some(AnchorKind::BarItem {
                frame: Rect::new(250.0, 0.0, 300.0, 40.0),
                trailing: 310.0,
            })
        );
    }

    #[test]
    fn set_frame_refreshes_trailing_edge() {
        let mut anchors = AnchorRegistry::new();
        let id = anchors.register(AnchorRole::BarItem);
        anchors.set_frame(id, Rect::new(0.0, 0.0, 80.0, 30.0));
        let Some(AnchorKind::BarItem { trailing, .. }) = anchors.resolve(id) else {
            panic!("expected a bar item");
        };
        assert_eq!(trailing, 80.0);
    }
}
