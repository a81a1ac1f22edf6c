// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row placement for renderers.
//!
//! [`layout_entries`] turns a planned entry list into rectangles: where to draw each
//! title's text and each marker's dot. Painting itself stays with the host.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::measure::TitleMeasure;
use crate::metrics::RowMetrics;
use crate::plan::DisplayEntry;
use crate::style::IndexStyle;

/// A display entry together with the rectangle it occupies.
///
/// For titles, `rect` is the text box (measured width by one row height). For
/// markers, it is the bounding square of the dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedEntry<'a> {
    /// The entry being drawn.
    pub entry: DisplayEntry<'a>,
    /// Where to draw it, in the strip's coordinate space.
    pub rect: Rect,
}

/// Positioned rows of an index strip.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryLayout<'a> {
    entries: Vec<PlacedEntry<'a>>,
    top: f64,
    total_height: f64,
}

impl<'a> EntryLayout<'a> {
    /// The placed entries, top to bottom.
    #[must_use]
    pub fn entries(&self) -> &[PlacedEntry<'a>] {
        &self.entries
    }

    /// Top edge of the first row, before pixel snapping.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Combined height of all rows.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the layout, returning the placed entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<PlacedEntry<'a>> {
        self.entries
    }
}

/// Places `entries` inside a strip of size `bounds`.
///
/// Rows are stacked at a pitch of [`RowMetrics::row_height`] and the block is centered
/// vertically. Every entry is centered horizontally. Origins are rounded to the
/// device pixel grid; sizes are left as measured.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_jump_index::{IndexStyle, RowMetrics, layout_entries, plan_entries};
///
/// let titles = ["A", "B", "C", "D", "E"];
/// let metrics = RowMetrics::new(10.0, 1.0).unwrap();
/// let bounds = Size::new(20.0, 30.0);
///
/// let entries = plan_entries(&titles, bounds.height, &metrics);
/// let layout = layout_entries(&entries, bounds, &metrics, &IndexStyle::default(), &|_: &str| 8.0);
///
/// let rects: Vec<Rect> = layout.entries().iter().map(|placed| placed.rect).collect();
/// assert_eq!(rects[0], Rect::new(6.0, 0.0, 14.0, 10.0));
/// // The marker dot sits in the middle of the second row.
/// assert_eq!(rects[1], Rect::new(7.0, 12.0, 13.0, 18.0));
/// assert_eq!(rects[2], Rect::new(6.0, 20.0, 14.0, 30.0));
/// ```
#[must_use]
pub fn layout_entries<'a, M>(
    entries: &[DisplayEntry<'a>],
    bounds: Size,
    metrics: &RowMetrics,
    style: &IndexStyle,
    width_of: &M,
) -> EntryLayout<'a>
where
    M: TitleMeasure + ?Sized,
{
    let grid = metrics.grid();
    let row_height = metrics.row_height();
    let total_height = row_height * entries.len() as f64;
    let top = (bounds.height - total_height) / 2.0;

    let mut y = top;
    let mut placed = Vec::with_capacity(entries.len());
    for &entry in entries {
        let rect = match entry {
            DisplayEntry::Title { text, .. } => {
                let width = width_of.title_width(text);
                let x = grid.round((bounds.width - width) / 2.0);
                Rect::new(x, grid.round(y), x + width, grid.round(y) + row_height)
            }
            DisplayEntry::Marker => {
                let diameter = style.marker_diameter;
                let x = grid.round((bounds.width - diameter) / 2.0);
                let top = grid.round(y + (row_height - diameter) / 2.0);
                Rect::new(x, top, x + diameter, top + diameter)
            }
        };
        placed.push(PlacedEntry { entry, rect });
        y += row_height;
    }

    EntryLayout {
        entries: placed,
        top,
        total_height,
    }
}
