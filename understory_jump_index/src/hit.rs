// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch hit-testing: map a vertical position on the strip to a section index.
//!
//! Hit-testing does not look at which rows are markers. The rendered block of rows
//! is treated as a track spanning the whole title range, so a finger dragged over an
//! elided strip still scrubs through every section, like a scrollbar thumb over a
//! much larger document.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::count::EntryCount;
use crate::metrics::RowMetrics;

/// Maps `touch_y` to a title index in `0..title_count`.
///
/// The rows are assumed vertically centered in `available_height`, with the row count
/// derived exactly as [`plan_entries`](crate::plan_entries) derives it. Positions above
/// or below the rows clamp to the first or last title.
///
/// Returns `None` when `title_count` is zero. `touch_y` must be finite; this is
/// checked in debug builds.
///
/// ```rust
/// use understory_jump_index::{RowMetrics, map_touch};
///
/// let metrics = RowMetrics::new(10.0, 1.0).unwrap();
///
/// // Seven rows centered in 200 units: they span 65..135.
/// assert_eq!(map_touch(64.0, 200.0, &metrics, 7), Some(0));
/// assert_eq!(map_touch(100.0, 200.0, &metrics, 7), Some(3));
/// assert_eq!(map_touch(500.0, 200.0, &metrics, 7), Some(6));
/// assert_eq!(map_touch(100.0, 200.0, &metrics, 0), None);
/// ```
#[must_use]
pub fn map_touch(
    touch_y: f64,
    available_height: f64,
    metrics: &RowMetrics,
    title_count: usize,
) -> Option<usize> {
    let count = EntryCount::new(title_count, available_height, metrics);
    map_touch_with_count(touch_y, available_height, metrics, count)
}

/// Maps `touch_y` using an already derived [`EntryCount`].
///
/// This is the half of [`map_touch`] that runs after the row count is known; hosts
/// that already derived the count for drawing can reuse it here.
#[must_use]
pub fn map_touch_with_count(
    touch_y: f64,
    available_height: f64,
    metrics: &RowMetrics,
    count: EntryCount,
) -> Option<usize> {
    debug_assert!(touch_y.is_finite(), "touch position must be finite");

    let title_count = count.title_count();
    let last = title_count.checked_sub(1)?;

    let total_height = metrics.row_height() * count.rows() as f64;
    let top = (available_height - total_height) / 2.0;
    let raw = ((touch_y - top) / total_height * title_count as f64).floor();

    if raw.is_nan() || raw <= 0.0 {
        return Some(0);
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Saturating cast; the index is clamped to `last` immediately"
    )]
    let index = raw as usize;
    Some(index.min(last))
}
