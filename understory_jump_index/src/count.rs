// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry-count derivation shared by the planner and the hit mapper.
//!
//! Drawing and hit-testing are computed independently, but they must agree on how
//! many rows the strip shows. Both go through [`EntryCount`], which is the only
//! place the row-count formula lives.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::metrics::RowMetrics;

/// Smallest number of rows shown once titles have to be elided.
///
/// Three rows is the first title, one marker, and the last title.
pub const MIN_ELIDED_ROWS: usize = 3;

/// Rounds `x` down to the nearest odd value.
///
/// Odd values are returned unchanged. `0` has no odd value below it and stays `0`;
/// callers clamp the result up to [`MIN_ELIDED_ROWS`] anyway.
#[must_use]
pub const fn floor_odd(x: usize) -> usize {
    if x % 2 == 1 { x } else { x.saturating_sub(1) }
}

/// How many rows an index strip renders for a given title count and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryCount {
    title_count: usize,
    max_fit: usize,
}

impl EntryCount {
    /// Derives the row count for `title_count` titles in `available_height`.
    ///
    /// `max_fit` is the available height divided by the row height rounded up to the
    /// pixel grid, floored. Negative or `NaN` heights fit nothing.
    #[must_use]
    pub fn new(title_count: usize, available_height: f64, metrics: &RowMetrics) -> Self {
        let fit = (available_height / metrics.snapped_row_height()).floor();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Row counts are small; `as` saturates and maps NaN to zero"
        )]
        let max_fit = if fit > 0.0 { fit as usize } else { 0 };
        Self {
            title_count,
            max_fit,
        }
    }

    /// Number of titles the count was derived for.
    #[must_use]
    pub fn title_count(&self) -> usize {
        self.title_count
    }

    /// Number of whole rows that fit in the available height.
    #[must_use]
    pub fn max_fit(&self) -> usize {
        self.max_fit
    }

    /// Returns `true` when not every title fits and markers are needed.
    #[must_use]
    pub fn is_elided(&self) -> bool {
        self.title_count > self.max_fit
    }

    /// Number of rows rendered.
    ///
    /// Equal to the title count when everything fits. Otherwise the largest odd
    /// count within `max_fit`, but never fewer than [`MIN_ELIDED_ROWS`].
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.is_elided() {
            floor_odd(self.max_fit).max(MIN_ELIDED_ROWS)
        } else {
            self.title_count
        }
    }

    /// Number of marker/title pairs following the leading title, or `0` when
    /// nothing is elided.
    #[must_use]
    pub fn pairs(&self) -> usize {
        if self.is_elided() { self.rows() / 2 } else { 0 }
    }
}
