// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry configuration for index strips.

/// Visual constants for an index strip.
///
/// These only affect geometry: layout and measurement. Colors and fonts belong to
/// the renderer and text-measurement collaborators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexStyle {
    /// Diameter of the dot drawn for a marker row.
    pub marker_diameter: f64,
    /// Narrowest width the strip reports from measurement.
    pub min_width: f64,
    /// Total horizontal padding added around the widest title.
    pub horizontal_padding: f64,
}

impl Default for IndexStyle {
    fn default() -> Self {
        Self {
            marker_diameter: 6.0,
            min_width: 15.0,
            horizontal_padding: 4.0,
        }
    }
}

impl IndexStyle {
    /// Returns a copy with a different marker diameter.
    #[must_use]
    pub fn with_marker_diameter(mut self, diameter: f64) -> Self {
        self.marker_diameter = diameter;
        self
    }

    /// Returns a copy with a different minimum width.
    #[must_use]
    pub fn with_min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    /// Returns a copy with different horizontal padding.
    #[must_use]
    pub fn with_horizontal_padding(mut self, padding: f64) -> Self {
        self.horizontal_padding = padding;
        self
    }
}
