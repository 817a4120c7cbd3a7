// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::bounds::{FittedView, GeoBounds, fit_bounds};
use crate::error::ConstrainError;
use crate::viewport::{Transition, Viewport};

/// Default screen margin, in pixels, kept around a constrained box.
pub const DEFAULT_PADDING: f64 = 60.0;

/// Corrects `viewport` so that `bounds` stays adequately on screen.
///
/// On each axis independently:
/// - if the box is smaller than the padded window, the center snaps to the
///   fitted center so the box stays centered;
/// - otherwise the center is clamped so that the padded window stays inside
///   the box.
///
/// The returned zoom is never below the zoom needed to fit `bounds`, and the
/// returned transition is [`Transition::NONE`].
///
/// Invalid input (zero-size screen, oversized padding, negative zoom) leaves
/// the viewport untouched; use [`try_constrain`] to observe the reason.
#[must_use]
pub fn constrain(viewport: &Viewport, bounds: &GeoBounds, padding: f64) -> Viewport {
    try_constrain(viewport, bounds, padding).unwrap_or(*viewport)
}

/// Checked form of [`constrain`].
pub fn try_constrain(
    viewport: &Viewport,
    bounds: &GeoBounds,
    padding: f64,
) -> Result<Viewport, ConstrainError> {
    check_viewport(viewport)?;
    let size = viewport.size();
    let fitted = fit_bounds(size, bounds, padding)?;

    let projection = viewport.projection();
    let center = projection.project(viewport.center());
    let extent = projection.project_bounds(bounds);
    let fitted_center = projection.project(fitted.center());
    let half = Vec2::new(
        (size.width - 2.0 * padding) / 2.0,
        (size.height - 2.0 * padding) / 2.0,
    );

    let x = clamp_axis(center.x, extent.x0, extent.x1, half.x, fitted_center.x);
    let y = clamp_axis(center.y, extent.y0, extent.y1, half.y, fitted_center.y);
    let corrected = projection.unproject(Point::new(x, y));

    Ok(Viewport {
        longitude: corrected.x,
        latitude: corrected.y,
        zoom: viewport.zoom.max(fitted.zoom),
        transition: Transition::NONE,
        ..*viewport
    })
}

fn check_viewport(viewport: &Viewport) -> Result<(), ConstrainError> {
    let (width, height) = (viewport.width, viewport.height);
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(ConstrainError::EmptyScreen { width, height });
    }
    if !(viewport.zoom.is_finite() && viewport.zoom >= 0.0) {
        return Err(ConstrainError::InvalidZoom(viewport.zoom));
    }
    if !(viewport.longitude.is_finite() && viewport.latitude.is_finite()) {
        return Err(ConstrainError::NonFiniteCenter);
    }
    Ok(())
}

/// One axis of the constraint, in pixels.
///
/// `low..high` is the projected box, `half` the half-extent of the padded
/// window and `fitted` the fitted center.
fn clamp_axis(pos: f64, low: f64, high: f64, half: f64, fitted: f64) -> f64 {
    if high - low < 2.0 * half {
        fitted
    } else if pos - half < low {
        low + half
    } else if pos + half > high {
        high - half
    } else {
        pos
    }
}

/// A bounding box together with the padding it is constrained with.
///
/// Handy for callers that apply the same constraint on every resize or
/// interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsConstraint {
    bounds: GeoBounds,
    padding: f64,
}

impl BoundsConstraint {
    /// Constrains to `bounds` with [`DEFAULT_PADDING`].
    #[must_use]
    pub fn new(bounds: GeoBounds) -> Self {
        Self {
            bounds,
            padding: DEFAULT_PADDING,
        }
    }

    /// Returns a copy with a different padding.
    ///
    /// The value is kept as given; [`Self::try_apply`] and [`Self::fit`]
    /// report a negative or non-finite one.
    #[must_use]
    pub fn with_padding(self, padding: f64) -> Self {
        Self { padding, ..self }
    }

    /// Constrained box.
    #[must_use]
    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// Padding in pixels.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// See [`constrain`].
    #[must_use]
    pub fn apply(&self, viewport: &Viewport) -> Viewport {
        constrain(viewport, &self.bounds, self.padding)
    }

    /// See [`try_constrain`].
    pub fn try_apply(&self, viewport: &Viewport) -> Result<Viewport, ConstrainError> {
        try_constrain(viewport, &self.bounds, self.padding)
    }

    /// See [`fit_bounds`].
    pub fn fit(&self, size: Size) -> Result<FittedView, ConstrainError> {
        fit_bounds(size, &self.bounds, self.padding)
    }
}
