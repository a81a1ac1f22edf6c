// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device pixel grid quantization.
//!
//! Logical coordinates are snapped to multiples of `1 / scale`, where `scale` is the
//! number of device pixels per logical unit. Snapping row boundaries, glyph origins,
//! and marker boxes this way keeps edges crisp under fractional scale factors.
//!
//! [`floor_to_pixel_grid`] returns the largest grid value `k / scale` that is no
//! greater than `x`, and [`ceil_to_pixel_grid`] the smallest one that is no less
//! than `x`. The candidate pixel comes from `x * scale` and is then checked against
//! `x` itself, since the product may round onto the wrong side of a whole pixel.
//! Grid values are therefore fixed points of both. The helpers are total over
//! finite inputs; non-finite values propagate through unchanged in kind (`NaN`
//! stays `NaN`).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// Rounds `x` down to the device pixel grid for the given `scale`.
///
/// The result never exceeds `x`.
#[must_use]
pub fn floor_to_pixel_grid(x: f64, scale: f64) -> f64 {
    let k = (x * scale).floor();
    if k / scale > x {
        (k - 1.0) / scale
    } else if (k + 1.0) / scale <= x {
        (k + 1.0) / scale
    } else {
        k / scale
    }
}

/// Rounds `x` to the nearest point on the device pixel grid for the given `scale`.
///
/// Ties round away from zero.
#[must_use]
pub fn round_to_pixel_grid(x: f64, scale: f64) -> f64 {
    (x * scale).round() / scale
}

/// Rounds `x` up to the device pixel grid for the given `scale`.
///
/// The result is never less than `x`.
#[must_use]
pub fn ceil_to_pixel_grid(x: f64, scale: f64) -> f64 {
    let k = (x * scale).ceil();
    if k / scale < x {
        (k + 1.0) / scale
    } else if (k - 1.0) / scale >= x {
        (k - 1.0) / scale
    } else {
        k / scale
    }
}

/// A device pixel grid with a fixed scale factor.
///
/// This is a thin convenience over the free functions in this module for callers
/// that snap many values against the same scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelGrid {
    scale: f64,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl PixelGrid {
    /// Creates a grid with `scale` device pixels per logical unit.
    ///
    /// `scale` is expected to be finite and positive; this is checked in debug builds.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        debug_assert!(
            scale.is_finite() && scale > 0.0,
            "pixel grid scale must be finite and positive, got {scale}"
        );
        Self { scale }
    }

    /// Returns the scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// See [`floor_to_pixel_grid`].
    #[must_use]
    pub fn floor(&self, x: f64) -> f64 {
        floor_to_pixel_grid(x, self.scale)
    }

    /// See [`round_to_pixel_grid`].
    #[must_use]
    pub fn round(&self, x: f64) -> f64 {
        round_to_pixel_grid(x, self.scale)
    }

    /// See [`ceil_to_pixel_grid`].
    #[must_use]
    pub fn ceil(&self, x: f64) -> f64 {
        ceil_to_pixel_grid(x, self.scale)
    }

    /// Rounds both coordinates of `pt` to the grid.
    #[must_use]
    pub fn round_point(&self, pt: Point) -> Point {
        Point::new(self.round(pt.x), self.round(pt.y))
    }

    /// Moves `rect` so that its origin lies on the grid, keeping its size.
    #[must_use]
    pub fn round_origin(&self, rect: Rect) -> Rect {
        let origin = self.round_point(rect.origin());
        Rect::from_origin_size(origin, rect.size())
    }
}
