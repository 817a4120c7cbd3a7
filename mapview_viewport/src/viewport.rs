// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::mercator::WebMercator;

/// Easing used by a rendering surface when animating toward a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interpolator {
    /// Interpolate center and zoom linearly.
    Linear,
    /// Zoom out, pan, and zoom back in along a "fly to" arc.
    FlyTo,
}

/// Animation parameters attached to a viewport.
///
/// A viewport whose transition is [`Transition::NONE`] is applied
/// immediately.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transition {
    /// Animation length in milliseconds; `0` means instantaneous.
    pub duration_ms: f64,
    /// Easing, if any.
    pub interpolator: Option<Interpolator>,
}

impl Transition {
    /// No animation.
    pub const NONE: Self = Self {
        duration_ms: 0.0,
        interpolator: None,
    };

    /// Creates an animated transition.
    #[must_use]
    pub fn new(duration_ms: f64, interpolator: Interpolator) -> Self {
        Self {
            duration_ms,
            interpolator: Some(interpolator),
        }
    }

    /// Returns `true` if this transition applies instantly.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.duration_ms == 0.0 && self.interpolator.is_none()
    }
}

/// Map camera state.
///
/// Values are plain data: operations in this crate return new viewports
/// rather than mutating their inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Zoom level; the world is `512 * 2^zoom` pixels wide.
    pub zoom: f64,
    /// Screen width in pixels.
    pub width: f64,
    /// Screen height in pixels.
    pub height: f64,
    /// Camera tilt in degrees. Carried through, not projected.
    pub pitch: f64,
    /// Camera rotation in degrees. Carried through, not projected.
    pub bearing: f64,
    /// Lower zoom limit for interactive controllers. Carried through.
    pub min_zoom: f64,
    /// Upper zoom limit for interactive controllers. Carried through.
    pub max_zoom: f64,
    /// Pending animation toward this state.
    pub transition: Transition,
}

impl Viewport {
    /// Opening view of the Swiss preview, before the screen size is known.
    pub const SWISS_INITIAL: Self = Self {
        longitude: 8.2275,
        latitude: 46.8182,
        zoom: 2.0,
        width: 0.0,
        height: 0.0,
        pitch: 0.0,
        bearing: 0.0,
        min_zoom: 2.0,
        max_zoom: 16.0,
        transition: Transition::NONE,
    };

    /// Creates an untilted viewport centered on `center` (longitude,
    /// latitude).
    ///
    /// Zoom limits default to `[0, 24]`.
    #[must_use]
    pub fn new(center: Point, zoom: f64, size: Size) -> Self {
        Self {
            longitude: center.x,
            latitude: center.y,
            zoom,
            width: size.width,
            height: size.height,
            pitch: 0.0,
            bearing: 0.0,
            min_zoom: 0.0,
            max_zoom: 24.0,
            transition: Transition::NONE,
        }
    }

    /// Center as a point (`x` = longitude).
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }

    /// Screen size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns `true` once the screen has a positive area.
    #[must_use]
    pub fn has_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Returns a copy with a different screen size.
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self
        }
    }

    /// Returns a copy with a different center.
    #[must_use]
    pub fn with_center(self, center: Point) -> Self {
        Self {
            longitude: center.x,
            latitude: center.y,
            ..self
        }
    }

    /// Returns a copy with a different zoom.
    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }

    /// Returns a copy with a different transition.
    #[must_use]
    pub fn with_transition(self, transition: Transition) -> Self {
        Self { transition, ..self }
    }

    /// Projection matching this camera.
    #[must_use]
    pub fn projection(&self) -> WebMercator {
        WebMercator::new(self.center(), self.zoom, self.size())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{Interpolator, Transition, Viewport};

    #[test]
    fn builders_leave_other_fields_alone() {
        let base = Viewport::SWISS_INITIAL;
        let sized = base.with_size(Size::new(640.0, 480.0));
        assert!(!base.has_size());
        assert!(sized.has_size());
        assert_eq!(sized.center(), base.center());
        assert_eq!(sized.zoom, base.zoom);
        assert_eq!(sized.min_zoom, 2.0);
        assert_eq!(sized.max_zoom, 16.0);

        let moved = sized.with_center(Point::new(7.0, 46.0)).with_zoom(9.0);
        assert_eq!(moved.size(), sized.size());
        assert_eq!(moved.longitude, 7.0);
        assert_eq!(moved.zoom, 9.0);
    }

    #[test]
    fn transition_none_detection() {
        assert!(Transition::NONE.is_none());
        assert!(Transition::default().is_none());
        assert!(!Transition::new(300.0, Interpolator::FlyTo).is_none());
        let zero_with_easing = Transition {
            duration_ms: 0.0,
            interpolator: Some(Interpolator::Linear),
        };
        assert!(!zero_with_easing.is_none());
    }
}
