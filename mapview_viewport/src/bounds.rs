// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::error::{ConstrainError, InvalidBoundsError};
use crate::mercator::{lng_lat_to_world, world_to_lng_lat};

/// Highest zoom level [`fit_bounds`] will return.
pub const MAX_FIT_ZOOM: f64 = 24.0;

/// Geographic bounding box in degrees.
///
/// `min` is the south-west corner and `max` the north-east corner, with
/// `x` = longitude and `y` = latitude. Construction guarantees
/// `min.x < max.x` and `min.y < max.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    min: Point,
    max: Point,
}

impl GeoBounds {
    /// Bounding box of Switzerland.
    pub const SWITZERLAND: Self = Self {
        min: Point::new(5.956_303, 45.818_031),
        max: Point::new(10.491_944, 47.808_264),
    };

    /// Creates a box from its south-west and north-east corners.
    pub fn new(min: Point, max: Point) -> Result<Self, InvalidBoundsError> {
        let finite = min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite();
        if !finite || min.x >= max.x || min.y >= max.y {
            return Err(InvalidBoundsError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates a box from `[[min_lon, min_lat], [max_lon, max_lat]]`.
    pub fn from_corners(corners: [[f64; 2]; 2]) -> Result<Self, InvalidBoundsError> {
        let [[x0, y0], [x1, y1]] = corners;
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// South-west corner.
    #[must_use]
    pub fn min(&self) -> Point {
        self.min
    }

    /// North-east corner.
    #[must_use]
    pub fn max(&self) -> Point {
        self.max
    }

    /// Western longitude.
    #[must_use]
    pub fn west(&self) -> f64 {
        self.min.x
    }

    /// Southern latitude.
    #[must_use]
    pub fn south(&self) -> f64 {
        self.min.y
    }

    /// Eastern longitude.
    #[must_use]
    pub fn east(&self) -> f64 {
        self.max.x
    }

    /// Northern latitude.
    #[must_use]
    pub fn north(&self) -> f64 {
        self.max.y
    }

    /// Returns `true` if `lng_lat` lies inside the box or on its edge.
    #[must_use]
    pub fn contains(&self, lng_lat: Point) -> bool {
        (self.min.x..=self.max.x).contains(&lng_lat.x)
            && (self.min.y..=self.max.y).contains(&lng_lat.y)
    }

    /// Returns the box grown by `margin` degrees on every side.
    #[must_use]
    pub fn inflate(&self, margin: f64) -> Self {
        Self {
            min: Point::new(self.min.x - margin, self.min.y - margin),
            max: Point::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Corners as `[[min_lon, min_lat], [max_lon, max_lat]]`.
    #[must_use]
    pub fn to_corners(&self) -> [[f64; 2]; 2] {
        [[self.min.x, self.min.y], [self.max.x, self.max.y]]
    }
}

/// Camera center and zoom that make a box fill a padded screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FittedView {
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Zoom level.
    pub zoom: f64,
}

impl FittedView {
    /// Center as a point (`x` = longitude).
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

/// Computes the center and zoom at which `bounds` exactly fills a screen of
/// `size` pixels minus `padding` on every edge.
///
/// The tighter axis decides the zoom, so the box fits on both axes. The
/// result is capped at [`MAX_FIT_ZOOM`].
pub fn fit_bounds(
    size: Size,
    bounds: &GeoBounds,
    padding: f64,
) -> Result<FittedView, ConstrainError> {
    if !(padding.is_finite() && padding >= 0.0) {
        return Err(ConstrainError::InvalidPadding(padding));
    }
    let target = Size::new(size.width - 2.0 * padding, size.height - 2.0 * padding);
    if !(target.width > 0.0 && target.height > 0.0) {
        return Err(ConstrainError::PaddingTooLarge {
            padding,
            width: size.width,
            height: size.height,
        });
    }

    let nw = lng_lat_to_world(Point::new(bounds.west(), bounds.north()));
    let se = lng_lat_to_world(Point::new(bounds.east(), bounds.south()));
    let scale_x = target.width / (se.x - nw.x).abs();
    let scale_y = target.height / (se.y - nw.y).abs();
    let zoom = scale_x.min(scale_y).log2().min(MAX_FIT_ZOOM);

    let center = world_to_lng_lat(nw.midpoint(se));
    Ok(FittedView {
        longitude: center.x,
        latitude: center.y,
        zoom,
    })
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{GeoBounds, MAX_FIT_ZOOM, fit_bounds};
    use crate::ConstrainError;
    use crate::mercator::WebMercator;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn rejects_inverted_or_empty_boxes() {
        assert!(GeoBounds::from_corners([[10.0, 46.0], [6.0, 48.0]]).is_err());
        assert!(GeoBounds::from_corners([[6.0, 48.0], [10.0, 48.0]]).is_err());
        assert!(GeoBounds::from_corners([[f64::NAN, 46.0], [10.0, 48.0]]).is_err());
        assert!(GeoBounds::from_corners([[6.0, 46.0], [10.0, 48.0]]).is_ok());
    }

    #[test]
    fn switzerland_constant_is_valid() {
        let ch = GeoBounds::SWITZERLAND;
        assert!(GeoBounds::new(ch.min(), ch.max()).is_ok());
        assert!(ch.contains(Point::new(8.2275, 46.8182)));
    }

    #[test]
    fn fitted_box_touches_padded_window() {
        let bounds = GeoBounds::from_corners([[6.0, 46.0], [10.0, 48.0]]).unwrap();
        let size = Size::new(800.0, 600.0);
        let padding = 60.0;
        let fit = fit_bounds(size, &bounds, padding).unwrap();

        let proj = WebMercator::new(fit.center(), fit.zoom, size);
        let rect = proj.project_bounds(&bounds);

        // Inside the padded window on both axes...
        assert!(rect.x0 >= padding - 1e-6 && rect.x1 <= size.width - padding + 1e-6);
        assert!(rect.y0 >= padding - 1e-6 && rect.y1 <= size.height - padding + 1e-6);
        // ...and flush against it on the tighter one.
        let fills_x = (rect.width() - (size.width - 2.0 * padding)).abs() < 1e-6;
        let fills_y = (rect.height() - (size.height - 2.0 * padding)).abs() < 1e-6;
        assert!(fills_x || fills_y, "fitted rect {rect:?} touches neither axis");

        // Symmetric longitude range centers exactly.
        assert_close(fit.longitude, 8.0, 1e-9);
    }

    #[test]
    fn fit_rejects_padding_that_eats_the_screen() {
        let bounds = GeoBounds::SWITZERLAND;
        let err = fit_bounds(Size::new(100.0, 600.0), &bounds, 60.0).unwrap_err();
        assert!(matches!(err, ConstrainError::PaddingTooLarge { .. }));
        let err = fit_bounds(Size::new(800.0, 600.0), &bounds, -1.0).unwrap_err();
        assert_eq!(err, ConstrainError::InvalidPadding(-1.0));
    }

    #[test]
    fn tiny_boxes_cap_at_max_zoom() {
        let bounds = GeoBounds::from_corners([[8.0, 47.0], [8.000_000_1, 47.000_000_1]]).unwrap();
        let fit = fit_bounds(Size::new(800.0, 600.0), &bounds, 0.0).unwrap();
        assert_close(fit.zoom, MAX_FIT_ZOOM, 0.0);
    }
}
