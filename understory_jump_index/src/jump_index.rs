// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful jump-index control model.
//!
//! ## Usage
//!
//! 1) Create a [`JumpIndex`] with the row metrics reported by your text stack.
//! 2) Feed it section titles with [`JumpIndex::set_titles`] and its laid-out size with
//!    [`JumpIndex::set_bounds`].
//! 3) Draw from [`JumpIndex::layout`]. Re-draw whenever [`JumpIndex::revision`] moves.
//! 4) Forward pointer input through [`JumpIndex::touch_down`], [`JumpIndex::touch_move`]
//!    and [`JumpIndex::touch_up`], and scroll your list whenever a
//!    [`SelectionChanged`] comes back.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_jump_index::{JumpIndex, RowMetrics};
//!
//! let mut index = JumpIndex::new(RowMetrics::new(10.0, 2.0).unwrap());
//! index.set_titles(["A", "B", "C", "D"]);
//! index.set_bounds(Size::new(16.0, 100.0));
//!
//! // Rows span 30..70. Touching the third row selects "C".
//! let changed = index.touch_down(55.0).unwrap();
//! assert_eq!(changed.index, 2);
//!
//! // Moving within the same row doesn't notify again.
//! assert_eq!(index.touch_move(58.0), None);
//!
//! // Releasing keeps the selection.
//! index.touch_up();
//! assert_eq!(index.selection(), Some(2));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;

use crate::count::EntryCount;
use crate::hit::map_touch_with_count;
use crate::layout::{EntryLayout, layout_entries};
use crate::measure::{TitleMeasure, measure};
use crate::metrics::RowMetrics;
use crate::plan::{DisplayEntry, plan_with_count};
use crate::style::IndexStyle;

/// Notification that the selected section changed during a touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The newly selected title index.
    pub index: usize,
    /// The index selected before this touch sample, if any.
    pub previous: Option<usize>,
}

/// A jump-index strip: section titles, geometry, and the current selection.
///
/// The selection is unset until the first touch. After that it is only ever
/// overwritten by later touches; releasing the touch or replacing the titles leaves
/// it alone, so hosts that shrink the title list should treat a stale index as
/// their own concern.
#[derive(Clone, Debug)]
pub struct JumpIndex {
    titles: Vec<String>,
    metrics: RowMetrics,
    style: IndexStyle,
    bounds: Size,
    preferred_max_layout_height: f64,
    selection: Option<usize>,
    last_touch: Option<f64>,
    revision: u64,
}

impl JumpIndex {
    /// Creates an empty strip with zero bounds and the default [`IndexStyle`].
    #[must_use]
    pub fn new(metrics: RowMetrics) -> Self {
        Self {
            titles: Vec::new(),
            metrics,
            style: IndexStyle::default(),
            bounds: Size::ZERO,
            preferred_max_layout_height: 0.0,
            selection: None,
            last_touch: None,
            revision: 0,
        }
    }

    /// Returns the section titles.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Replaces the section titles.
    pub fn set_titles<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        if titles == self.titles {
            return;
        }
        self.titles = titles;
        self.bump_revision();
    }

    /// Returns the row metrics.
    #[must_use]
    pub fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    /// Sets the row metrics, for example after a font or scale factor change.
    pub fn set_metrics(&mut self, metrics: RowMetrics) {
        if metrics != self.metrics {
            self.metrics = metrics;
            self.bump_revision();
        }
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> IndexStyle {
        self.style
    }

    /// Sets the style.
    pub fn set_style(&mut self, style: IndexStyle) {
        if style != self.style {
            self.style = style;
            self.bump_revision();
        }
    }

    /// Returns the size the strip was laid out at.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Sets the size the strip was laid out at.
    ///
    /// Sizes are compared bitwise, so setting the same `NaN` again is a no-op.
    pub fn set_bounds(&mut self, bounds: Size) {
        if !same_bits(bounds.width, self.bounds.width)
            || !same_bits(bounds.height, self.bounds.height)
        {
            self.bounds = bounds;
            self.bump_revision();
        }
    }

    /// Returns the height used by [`JumpIndex::intrinsic_size`].
    #[must_use]
    pub fn preferred_max_layout_height(&self) -> f64 {
        self.preferred_max_layout_height
    }

    /// Sets the height used by [`JumpIndex::intrinsic_size`].
    pub fn set_preferred_max_layout_height(&mut self, height: f64) {
        if !same_bits(height, self.preferred_max_layout_height) {
            self.preferred_max_layout_height = height;
            self.bump_revision();
        }
    }

    /// Counter bumped whenever anything affecting drawing or measurement changes.
    ///
    /// Selection changes don't bump it; they are reported through
    /// [`SelectionChanged`] instead.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Row count for the current bounds.
    #[must_use]
    pub fn entry_count(&self) -> EntryCount {
        EntryCount::new(self.titles.len(), self.bounds.height, &self.metrics)
    }

    /// Rows to draw at the current bounds.
    #[must_use]
    pub fn entries(&self) -> Vec<DisplayEntry<'_>> {
        plan_with_count(&self.titles, self.entry_count())
    }

    /// Rows to draw at the current bounds, with their rectangles.
    #[must_use]
    pub fn layout<M>(&self, width_of: &M) -> EntryLayout<'_>
    where
        M: TitleMeasure + ?Sized,
    {
        layout_entries(
            &self.entries(),
            self.bounds,
            &self.metrics,
            &self.style,
            width_of,
        )
    }

    /// Size the strip wants when offered `max_height`.
    #[must_use]
    pub fn size_that_fits<M>(&self, max_height: f64, width_of: &M) -> Size
    where
        M: TitleMeasure + ?Sized,
    {
        measure(&self.titles, max_height, &self.metrics, &self.style, width_of)
    }

    /// Size the strip wants at [`JumpIndex::preferred_max_layout_height`].
    #[must_use]
    pub fn intrinsic_size<M>(&self, width_of: &M) -> Size
    where
        M: TitleMeasure + ?Sized,
    {
        self.size_that_fits(self.preferred_max_layout_height, width_of)
    }

    /// Selected title index, or `0` before the first touch.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selection.unwrap_or(0)
    }

    /// Selected title index, or `None` before the first touch.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Returns `true` between [`JumpIndex::touch_down`] and [`JumpIndex::touch_up`].
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.last_touch.is_some()
    }

    /// Starts tracking a touch at vertical position `y`.
    ///
    /// Returns a notification if the touched section differs from the current
    /// selection.
    pub fn touch_down(&mut self, y: f64) -> Option<SelectionChanged> {
        if !y.is_finite() {
            log::warn!("JumpIndex::touch_down: dropping non-finite position {y}");
            return None;
        }
        self.last_touch = Some(y);
        self.select_at(y)
    }

    /// Continues the current touch at vertical position `y`.
    ///
    /// Ignored unless a touch is being tracked.
    pub fn touch_move(&mut self, y: f64) -> Option<SelectionChanged> {
        if self.last_touch.is_none() {
            return None;
        }
        if !y.is_finite() {
            log::warn!("JumpIndex::touch_move: dropping non-finite position {y}");
            return None;
        }
        self.last_touch = Some(y);
        self.select_at(y)
    }

    /// Ends the current touch. The selection is kept.
    pub fn touch_up(&mut self) {
        self.last_touch = None;
    }

    fn select_at(&mut self, y: f64) -> Option<SelectionChanged> {
        let count = self.entry_count();
        let index = map_touch_with_count(y, self.bounds.height, &self.metrics, count)?;
        if self.selection == Some(index) {
            return None;
        }
        let previous = self.selection.replace(index);
        log::trace!("JumpIndex selection {previous:?} -> {index}");
        Some(SelectionChanged { index, previous })
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn same_bits(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}
