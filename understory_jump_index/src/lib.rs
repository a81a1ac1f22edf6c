// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_jump_index --heading-base-level=0

//! Understory Jump Index: headless section index strips.
//!
//! A jump index is the compact column of letters beside a long sectioned list that
//! lets a user tap or drag to jump between sections. This crate decides _what_ such
//! a strip shows and _where_, and maps touches back to sections. Painting, text
//! shaping, and event plumbing stay with the host.
//!
//! The core pieces are:
//!
//! - [`plan_entries`]: given the section titles and the available height, returns the
//!   rows to draw. When every title fits, that is each title in order. Otherwise the
//!   first title is kept and the rest are sampled evenly, separated by
//!   [`DisplayEntry::Marker`] rows, for an odd number of rows no smaller than three.
//! - [`map_touch`]: maps a vertical touch position to a section index. It treats the
//!   rendered rows as a track over the _full_ title range, so an elided strip still
//!   scrubs through every section.
//! - [`EntryCount`]: the row-count derivation both of the above share, so drawing and
//!   hit-testing always agree on how many rows exist.
//! - [`floor_to_pixel_grid`], [`round_to_pixel_grid`], [`ceil_to_pixel_grid`] and
//!   [`PixelGrid`]: snap coordinates to device pixels so text and dots stay crisp at
//!   fractional scale factors.
//! - [`measure`]: the preferred width for a height constraint.
//! - [`layout_entries`]: rectangles for each planned row, ready for a renderer.
//!
//! [`JumpIndex`] ties these together into a small control model that owns the titles
//! and the current selection and reports [`SelectionChanged`] as a touch moves.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_jump_index::{DisplayEntry, RowMetrics, map_touch, plan_entries};
//!
//! let titles: Vec<String> = ('A'..='Z').map(String::from).chain(["#".into()]).collect();
//! // 11.5 unit rows at 2x; 104 units fit 9 rows.
//! let metrics = RowMetrics::new(11.5, 2.0).unwrap();
//!
//! let entries = plan_entries(&titles, 104.0, &metrics);
//! assert_eq!(entries.len(), 9);
//! assert_eq!(entries[0].text(), Some("A"));
//! assert_eq!(entries[1], DisplayEntry::Marker);
//! assert_eq!(entries[8].text(), Some("#"));
//!
//! // Touches anywhere on the strip resolve to one of all 27 sections.
//! assert_eq!(map_touch(0.0, 104.0, &metrics, titles.len()), Some(0));
//! assert_eq!(map_touch(52.0, 104.0, &metrics, titles.len()), Some(13));
//! assert_eq!(map_touch(104.0, 104.0, &metrics, titles.len()), Some(26));
//! ```
//!
//! Row heights come from the host's text stack (typically a font's line height) and
//! are validated once by [`RowMetrics::new`]. All coordinates are `f64` logical units
//! in the strip's own space.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod count;
mod hit;
mod jump_index;
mod layout;
mod measure;
mod metrics;
mod pixel;
mod plan;
mod style;

pub use count::{EntryCount, MIN_ELIDED_ROWS, floor_odd};
pub use hit::{map_touch, map_touch_with_count};
pub use jump_index::{JumpIndex, SelectionChanged};
pub use layout::{EntryLayout, PlacedEntry, layout_entries};
pub use measure::{TitleMeasure, measure};
pub use metrics::{MetricsError, RowMetrics};
pub use pixel::{PixelGrid, ceil_to_pixel_grid, floor_to_pixel_grid, round_to_pixel_grid};
pub use plan::{DisplayEntry, plan_entries, plan_with_count};
pub use style::IndexStyle;
