// Copyright 2026 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluggable text measurement and the content sizing helper.
//!
//! [`compute`](crate::compute) takes a precomputed fallback width rather than
//! labels, so measurement stays swappable without API churn: hosts with a real
//! text stack implement [`TextMetric`] over it, while the provided
//! [`FixedAdvance`] and [`MonospaceMetric`] cover estimation and terminal
//! cells.

use unicode_width::UnicodeWidthStr;

/// Deterministic text measurement used to size panel content.
///
/// Implementations must be pure: identical inputs yield identical widths.
/// Nothing is cached across calls.
pub trait TextMetric {
    /// Width of `text` when rendered under this metric.
    fn text_width(&self, text: &str) -> f64;
}

/// Fixed advance per `char`. A cheap estimate for proportional fonts when the
/// host cannot shape text at sizing time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Horizontal advance per `char`.
    pub advance: f64,
}

impl TextMetric for FixedAdvance {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

/// Display-column metric for monospace rendering.
///
/// Uses Unicode width semantics, so wide glyphs (for example CJK) count as
/// two columns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMetric {
    /// Width of one display column.
    pub cell_width: f64,
}

impl TextMetric for MonospaceMetric {
    fn text_width(&self, text: &str) -> f64 {
        text.width() as f64 * self.cell_width
    }
}

/// Minimum panel width that renders every label without truncation.
///
/// Measures each label under `metric`, adds `margin_per_side` on both sides,
/// and returns the maximum; returns 0 for an empty label set. The
/// conventional margin is [`LABEL_MARGIN`](crate::LABEL_MARGIN) per side.
///
/// ```
/// use overhang_placement::{fitting_width, FixedAdvance, LABEL_MARGIN};
///
/// let metric = FixedAdvance { advance: 7.0 };
/// let w = fitting_width(["Red", "Green", "Blue"], &metric, LABEL_MARGIN);
/// // "Green" is the longest: 5 chars * 7.0 + 2 * 15.0
/// assert_eq!(w, 65.0);
///
/// let empty: [&str; 0] = [];
/// assert_eq!(fitting_width(empty, &metric, LABEL_MARGIN), 0.0);
/// ```
pub fn fitting_width<M, I, S>(labels: I, metric: &M, margin_per_side: f64) -> f64
where
    M: TextMetric + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| metric.text_width(label.as_ref()) + 2.0 * margin_per_side)
        .fold(0.0, f64::max)
}
