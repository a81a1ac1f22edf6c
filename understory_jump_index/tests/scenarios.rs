// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios for `understory_jump_index`.
//!
//! These drive the planner, hit mapper, and measurement together the way a host
//! control would, using alphabet-style section lists.

use kurbo::Size;
use understory_jump_index::{
    DisplayEntry, EntryCount, IndexStyle, JumpIndex, RowMetrics, map_touch, measure, plan_entries,
};

fn alphabet() -> Vec<String> {
    ('A'..='Z').map(String::from).chain(["#".into()]).collect()
}

fn unit_rows() -> RowMetrics {
    RowMetrics::new(10.0, 1.0).unwrap()
}

#[test]
fn seven_letters_with_room_to_spare() {
    let titles = ["A", "B", "C", "D", "E", "F", "G"];
    let metrics = unit_rows();
    let height = 200.0;
    assert_eq!(EntryCount::new(titles.len(), height, &metrics).max_fit(), 20);

    let entries = plan_entries(&titles, height, &metrics);
    let expected: Vec<_> = titles
        .iter()
        .enumerate()
        .map(|(index, &text)| DisplayEntry::Title { index, text })
        .collect();
    assert_eq!(entries, expected);

    assert_eq!(map_touch(0.0, height, &metrics, titles.len()), Some(0));
    assert_eq!(map_touch(height, height, &metrics, titles.len()), Some(6));
}

#[test]
fn full_alphabet_in_nine_rows() {
    let titles = alphabet();
    let metrics = unit_rows();
    let height = 95.0;
    let count = EntryCount::new(titles.len(), height, &metrics);
    assert_eq!(count.max_fit(), 9);
    assert_eq!(count.rows(), 9);

    let entries = plan_entries(&titles, height, &metrics);
    let rendered: Vec<Option<&str>> = entries.iter().map(DisplayEntry::text).collect();
    assert_eq!(
        rendered,
        [
            Some("A"),
            None,
            Some("H"),
            None,
            Some("N"),
            None,
            Some("U"),
            None,
            Some("#"),
        ]
    );
}

#[test]
fn empty_list() {
    let titles: Vec<String> = Vec::new();
    let metrics = unit_rows();
    assert!(plan_entries(&titles, 300.0, &metrics).is_empty());

    let size = measure(&titles, 300.0, &metrics, &IndexStyle::default(), &|_: &str| 9.0);
    assert_eq!(size, Size::new(15.0, 300.0));
}

#[test]
fn exact_odd_fit_skips_elision() {
    // Nine titles and exactly nine rows: every title is shown, no markers.
    let titles: Vec<String> = alphabet().into_iter().take(9).collect();
    let metrics = unit_rows();
    let entries = plan_entries(&titles, 90.0, &metrics);
    assert_eq!(entries.len(), 9);
    assert!(entries.iter().all(|entry| !entry.is_marker()));
}

#[test]
fn control_scrubs_an_elided_strip() {
    let mut index = JumpIndex::new(RowMetrics::new(10.0, 2.0).unwrap());
    index.set_titles(alphabet());
    index.set_bounds(Size::new(16.0, 95.0));
    assert_eq!(index.entries().len(), 9);

    // Slide from top to bottom; every section is reached in order, each exactly once.
    let mut seen = Vec::new();
    if let Some(changed) = index.touch_down(0.0) {
        seen.push(changed.index);
    }
    let mut y = 0.0;
    while y <= 95.0 {
        if let Some(changed) = index.touch_move(y) {
            assert_eq!(changed.previous, seen.last().copied());
            seen.push(changed.index);
        }
        y += 0.25;
    }
    index.touch_up();

    assert_eq!(seen, (0..27).collect::<Vec<_>>());
    assert_eq!(index.selection(), Some(26));
}

#[test]
fn layout_matches_plan() {
    let mut index = JumpIndex::new(RowMetrics::new(12.0, 3.0).unwrap());
    index.set_titles(alphabet());
    index.set_bounds(Size::new(18.0, 130.0));

    let layout = index.layout(&|_: &str| 7.0);
    let planned = index.entries();
    assert_eq!(layout.entries().len(), planned.len());
    for (placed, entry) in layout.entries().iter().zip(&planned) {
        assert_eq!(&placed.entry, entry);
        assert!(placed.rect.y0 >= 0.0 && placed.rect.y1 <= 130.0);
    }
    assert!(layout.total_height() <= 130.0);
}
