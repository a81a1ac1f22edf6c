// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row metrics supplied by the text-measurement collaborator.

use core::fmt;

use crate::pixel::{PixelGrid, ceil_to_pixel_grid};

/// Height of one index row plus the device pixel scale it is drawn at.
///
/// The row height usually comes from a font's line height. Both values are
/// validated on construction, so the planner and hit mapper never divide by a
/// zero or non-finite row pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowMetrics {
    row_height: f64,
    scale: f64,
}

impl RowMetrics {
    /// Creates row metrics, rejecting non-positive or non-finite values.
    pub fn new(row_height: f64, scale: f64) -> Result<Self, MetricsError> {
        if !(row_height.is_finite() && row_height > 0.0) {
            return Err(MetricsError::RowHeight(row_height));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(MetricsError::Scale(scale));
        }
        Ok(Self { row_height, scale })
    }

    /// Returns the unsnapped row height.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Returns the device pixel scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the pixel grid for this scale.
    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        PixelGrid::new(self.scale)
    }

    /// Row height rounded up to the pixel grid.
    ///
    /// Used when counting how many rows fit, so rows never overlap on screen.
    #[must_use]
    pub fn snapped_row_height(&self) -> f64 {
        ceil_to_pixel_grid(self.row_height, self.scale)
    }
}

/// Error returned by [`RowMetrics::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricsError {
    /// The row height was zero, negative, or not finite.
    RowHeight(f64),
    /// The scale factor was zero, negative, or not finite.
    Scale(f64),
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowHeight(value) => {
                write!(f, "row height must be finite and positive, got {value}")
            }
            Self::Scale(value) => {
                write!(f, "scale factor must be finite and positive, got {value}")
            }
        }
    }
}

impl core::error::Error for MetricsError {}
