// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry planning: which titles to show and where markers replace the rest.

use alloc::vec::Vec;

use crate::count::EntryCount;
use crate::metrics::RowMetrics;

/// One row of an index strip, in top-to-bottom order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayEntry<'a> {
    /// A section title, borrowed verbatim from the title list.
    Title {
        /// Position of the title in the source list.
        index: usize,
        /// The title text.
        text: &'a str,
    },
    /// A placeholder (drawn as a dot) standing in for elided titles.
    Marker,
}

impl<'a> DisplayEntry<'a> {
    /// Returns the title text, or `None` for a marker.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        match self {
            Self::Title { text, .. } => Some(*text),
            Self::Marker => None,
        }
    }

    /// Returns the source index of a title, or `None` for a marker.
    #[must_use]
    pub fn source_index(&self) -> Option<usize> {
        match self {
            Self::Title { index, .. } => Some(*index),
            Self::Marker => None,
        }
    }

    /// Returns `true` for [`DisplayEntry::Marker`].
    #[must_use]
    pub fn is_marker(&self) -> bool {
        matches!(self, Self::Marker)
    }
}

/// Plans the rows for `titles` in `available_height`.
///
/// When every title fits, each one is returned in order. Otherwise the result has
/// [`EntryCount::rows`] entries: the first title, followed by marker/title pairs
/// whose titles are spread evenly over the rest of the list, ending on the last
/// title. Consecutive pairs may resolve to the same title (a single title with no
/// room is the simplest case); such repeats are kept.
///
/// ```rust
/// use understory_jump_index::{DisplayEntry, RowMetrics, plan_entries};
///
/// let titles = ["A", "B", "C", "D", "E"];
/// let metrics = RowMetrics::new(10.0, 1.0).unwrap();
///
/// // Room for three rows: first title, a marker, last title.
/// let entries = plan_entries(&titles, 30.0, &metrics);
/// assert_eq!(
///     entries,
///     [
///         DisplayEntry::Title { index: 0, text: "A" },
///         DisplayEntry::Marker,
///         DisplayEntry::Title { index: 4, text: "E" },
///     ]
/// );
/// ```
#[must_use]
pub fn plan_entries<'a, S>(
    titles: &'a [S],
    available_height: f64,
    metrics: &RowMetrics,
) -> Vec<DisplayEntry<'a>>
where
    S: AsRef<str>,
{
    let count = EntryCount::new(titles.len(), available_height, metrics);
    plan_with_count(titles, count)
}

/// Plans rows for `titles` using an already derived [`EntryCount`].
///
/// `count` must have been derived for `titles.len()` titles.
#[must_use]
pub fn plan_with_count<S>(titles: &[S], count: EntryCount) -> Vec<DisplayEntry<'_>>
where
    S: AsRef<str>,
{
    debug_assert_eq!(
        count.title_count(),
        titles.len(),
        "entry count derived for a different title list"
    );

    let title = move |index: usize| DisplayEntry::Title {
        index,
        text: titles[index].as_ref(),
    };

    if !count.is_elided() {
        return (0..titles.len()).map(title).collect();
    }

    let half = count.pairs();
    let last = titles.len() - 1;
    let mut entries = Vec::with_capacity(count.rows());
    entries.push(title(0));
    for i in 1..=half {
        entries.push(DisplayEntry::Marker);
        entries.push(title(spread_index(i, half, last)));
    }
    entries
}

/// `round(i / half * last)`, rounding ties away from zero, in exact integer math.
///
/// Works in `u64` so `2 * i * last` can't overflow a 32-bit `usize`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "i <= half, so the quotient is at most last, which is a usize"
)]
fn spread_index(i: usize, half: usize, last: usize) -> usize {
    let (i, half, last) = (i as u64, half as u64, last as u64);
    ((2 * i * last + half) / (2 * half)) as usize
}
