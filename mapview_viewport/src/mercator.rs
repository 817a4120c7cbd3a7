// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{FRAC_PI_4, PI};

use kurbo::{Point, Rect, Size, Vec2};

use crate::bounds::GeoBounds;

/// Width and height in pixels of the whole world at zoom 0.
pub const TILE_SIZE: f64 = 512.0;

/// Latitude (degrees) at which the Web Mercator world becomes square.
///
/// Latitudes beyond ±`MAX_LATITUDE` are clamped before projection.
pub const MAX_LATITUDE: f64 = 85.051_129;

/// Earth circumference in meters used for ground distances.
pub const EARTH_CIRCUMFERENCE: f64 = 40.03e6;

/// Converts a longitude/latitude pair (degrees, `x` = longitude) into
/// zoom-0 world coordinates.
///
/// World coordinates span `[0, TILE_SIZE]` on both axes, with `y` growing
/// northward.
#[must_use]
pub fn lng_lat_to_world(lng_lat: Point) -> Point {
    let lambda = lng_lat.x.to_radians();
    let phi = lng_lat.y.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = TILE_SIZE * (lambda + PI) / (2.0 * PI);
    let y = TILE_SIZE * (PI + (FRAC_PI_4 + phi * 0.5).tan().ln()) / (2.0 * PI);
    Point::new(x, y)
}

/// Inverse of [`lng_lat_to_world`].
#[must_use]
pub fn world_to_lng_lat(world: Point) -> Point {
    let lambda = world.x / TILE_SIZE * 2.0 * PI - PI;
    let phi = 2.0 * ((world.y / TILE_SIZE * 2.0 * PI - PI).exp().atan() - FRAC_PI_4);
    Point::new(lambda.to_degrees(), phi.to_degrees())
}

/// Flat Web Mercator projection bound to one camera state.
///
/// Pixel coordinates are relative to the top-left corner of the screen and
/// grow downward; the camera center maps to the middle of the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebMercator {
    center_world: Point,
    scale: f64,
    size: Size,
}

impl WebMercator {
    /// Creates a projection centered on `center` (longitude, latitude) at
    /// `zoom`, for a screen of `size` pixels.
    #[must_use]
    pub fn new(center: Point, zoom: f64, size: Size) -> Self {
        Self {
            center_world: lng_lat_to_world(center),
            scale: zoom.exp2(),
            size,
        }
    }

    /// Pixels per zoom-0 world unit (`2^zoom`).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen size this projection maps into.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Ground meters covered by one pixel at the camera center.
    #[must_use]
    pub fn meters_per_pixel(&self) -> f64 {
        let latitude = world_to_lng_lat(self.center_world).y.to_radians();
        EARTH_CIRCUMFERENCE * latitude.cos() / (TILE_SIZE * self.scale)
    }

    /// Projects a longitude/latitude pair into screen pixels.
    #[must_use]
    pub fn project(&self, lng_lat: Point) -> Point {
        let delta = (lng_lat_to_world(lng_lat) - self.center_world) * self.scale;
        Point::new(
            self.size.width * 0.5 + delta.x,
            self.size.height * 0.5 - delta.y,
        )
    }

    /// Converts a screen pixel back into longitude/latitude.
    #[must_use]
    pub fn unproject(&self, pixel: Point) -> Point {
        let delta = Vec2::new(
            (pixel.x - self.size.width * 0.5) / self.scale,
            (self.size.height * 0.5 - pixel.y) / self.scale,
        );
        world_to_lng_lat(self.center_world + delta)
    }

    /// Projects a geographic box into the screen-space rectangle it covers.
    ///
    /// North maps to the smaller `y`, so the south-west corner lands on
    /// `(x0, y1)` and the north-east corner on `(x1, y0)`.
    #[must_use]
    pub fn project_bounds(&self, bounds: &GeoBounds) -> Rect {
        let sw = self.project(bounds.min());
        let ne = self.project(bounds.max());
        Rect::from_points(sw, ne)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{
        EARTH_CIRCUMFERENCE, MAX_LATITUDE, TILE_SIZE, WebMercator, lng_lat_to_world,
        world_to_lng_lat,
    };

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn null_island_is_world_center() {
        let world = lng_lat_to_world(Point::new(0.0, 0.0));
        assert_close(world.x, TILE_SIZE / 2.0, 1e-9);
        assert_close(world.y, TILE_SIZE / 2.0, 1e-9);
    }

    #[test]
    fn world_edges_match_antimeridian_and_max_latitude() {
        let west = lng_lat_to_world(Point::new(-180.0, MAX_LATITUDE));
        assert_close(west.x, 0.0, 1e-9);
        assert_close(west.y, TILE_SIZE, 1e-3);

        // Beyond the limit latitudes clamp instead of diverging.
        let pole = lng_lat_to_world(Point::new(180.0, 90.0));
        assert_close(pole.x, TILE_SIZE, 1e-9);
        assert_close(pole.y, west.y, 1e-9);
    }

    #[test]
    fn world_round_trip() {
        let p = Point::new(8.2275, 46.8182);
        let back = world_to_lng_lat(lng_lat_to_world(p));
        assert_close(back.x, p.x, 1e-9);
        assert_close(back.y, p.y, 1e-9);
    }

    #[test]
    fn center_projects_to_screen_middle() {
        let center = Point::new(8.0, 47.0);
        let proj = WebMercator::new(center, 7.5, Size::new(800.0, 600.0));
        let px = proj.project(center);
        assert_close(px.x, 400.0, 1e-9);
        assert_close(px.y, 300.0, 1e-9);
    }

    #[test]
    fn pixel_round_trip_and_orientation() {
        let proj = WebMercator::new(Point::new(8.0, 47.0), 6.0, Size::new(800.0, 600.0));
        let p = Point::new(9.5, 46.2);
        let px = proj.project(p);
        // East of center is right, south of center is down.
        assert!(px.x > 400.0);
        assert!(px.y > 300.0);

        let back = proj.unproject(px);
        assert_close(back.x, p.x, 1e-9);
        assert_close(back.y, p.y, 1e-9);
    }

    #[test]
    fn one_zoom_level_doubles_distances() {
        let center = Point::new(0.0, 0.0);
        let size = Size::new(512.0, 512.0);
        let p = Point::new(10.0, 0.0);
        let d0 = WebMercator::new(center, 3.0, size).project(p).x - 256.0;
        let d1 = WebMercator::new(center, 4.0, size).project(p).x - 256.0;
        assert_close(d1, 2.0 * d0, 1e-9);
    }

    #[test]
    fn ground_resolution_shrinks_with_zoom_and_latitude() {
        let size = Size::new(512.0, 512.0);
        let equator = WebMercator::new(Point::new(0.0, 0.0), 0.0, size);
        assert_close(equator.meters_per_pixel(), EARTH_CIRCUMFERENCE / TILE_SIZE, 1e-6);

        let zoomed = WebMercator::new(Point::new(0.0, 0.0), 1.0, size);
        assert_close(zoomed.meters_per_pixel() * 2.0, equator.meters_per_pixel(), 1e-6);

        let north = WebMercator::new(Point::new(0.0, 60.0), 0.0, size);
        assert_close(north.meters_per_pixel() * 2.0, equator.meters_per_pixel(), 1e-3);
    }
}
