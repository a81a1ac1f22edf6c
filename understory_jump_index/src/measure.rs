// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preferred-size measurement.

use kurbo::Size;

use crate::metrics::RowMetrics;
use crate::plan::plan_entries;
use crate::style::IndexStyle;

/// Text-measurement collaborator: reports the rendered width of a title.
///
/// Implemented for any `Fn(&str) -> f64`, so a closure over a font works directly.
pub trait TitleMeasure {
    /// Returns the advance width of `title` in logical units.
    fn title_width(&self, title: &str) -> f64;
}

impl<F> TitleMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn title_width(&self, title: &str) -> f64 {
        self(title)
    }
}

/// Measures the size a strip wants when given `max_height`.
///
/// The width fits the widest title that would actually be shown at that height plus
/// [`IndexStyle::horizontal_padding`], and is never below [`IndexStyle::min_width`].
/// Markers don't contribute. The height is `max_height` unchanged: the strip fills
/// the vertical space it is offered.
///
/// ```rust
/// use understory_jump_index::{IndexStyle, RowMetrics, measure};
///
/// let metrics = RowMetrics::new(13.0, 2.0).unwrap();
/// let width_of = |title: &str| 7.0 * title.len() as f64;
///
/// let size = measure(&["A", "Bb"], 400.0, &metrics, &IndexStyle::default(), &width_of);
/// assert_eq!(size.width, 18.0);
/// assert_eq!(size.height, 400.0);
///
/// let empty: [&str; 0] = [];
/// let size = measure(&empty, 400.0, &metrics, &IndexStyle::default(), &width_of);
/// assert_eq!(size.width, 15.0);
/// ```
#[must_use]
pub fn measure<S, M>(
    titles: &[S],
    max_height: f64,
    metrics: &RowMetrics,
    style: &IndexStyle,
    width_of: &M,
) -> Size
where
    S: AsRef<str>,
    M: TitleMeasure + ?Sized,
{
    let widest = plan_entries(titles, max_height, metrics)
        .iter()
        .filter_map(|entry| entry.text())
        .map(|text| width_of.title_width(text))
        .fold(0.0, f64::max);
    let width = (widest + style.horizontal_padding).max(style.min_width);
    Size::new(width, max_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> RowMetrics {
        RowMetrics::new(10.0, 1.0).unwrap()
    }

    fn by_len(title: &str) -> f64 {
        5.0 * title.chars().count() as f64
    }

    #[test]
    fn narrow_titles_use_min_width() {
        let size = measure(&["A", "B"], 100.0, &metrics(), &IndexStyle::default(), &by_len);
        assert_eq!(size, Size::new(15.0, 100.0));
    }

    #[test]
    fn widest_title_plus_padding() {
        let titles = ["A", "Wide", "B"];
        let size = measure(&titles, 100.0, &metrics(), &IndexStyle::default(), &by_len);
        assert_eq!(size.width, 24.0);
    }

    #[test]
    fn elided_titles_do_not_count() {
        // 30 units show only A and D; 50 units bring the wide title back.
        let titles = ["A", "B", "Enormous", "C", "D"];
        let size = measure(&titles, 30.0, &metrics(), &IndexStyle::default(), &by_len);
        assert_eq!(size.width, 15.0);

        let size = measure(&titles, 50.0, &metrics(), &IndexStyle::default(), &by_len);
        assert_eq!(size.width, 44.0);
    }

    #[test]
    fn height_passes_through() {
        let size = measure(&["A"], 7.5, &metrics(), &IndexStyle::default(), &by_len);
        assert_eq!(size.height, 7.5);
    }

    #[test]
    fn style_overrides_apply() {
        let style = IndexStyle::default()
            .with_min_width(0.0)
            .with_horizontal_padding(10.0);
        let size = measure(&["AB"], 100.0, &metrics(), &style, &by_len);
        assert_eq!(size.width, 20.0);
    }
}
