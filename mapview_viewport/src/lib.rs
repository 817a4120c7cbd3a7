// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapview Viewport: camera state, Web Mercator projection, and bounds
//! constraining for interactive map previews.
//!
//! This crate provides small, headless models of a map camera whose screen
//! extents are expressed in pixels. It focuses on:
//! - Camera state ([`Viewport`]: center, zoom, screen size, tilt).
//! - Geographic ↔ pixel conversion ([`WebMercator`]).
//! - Bounds fitting ([`fit_bounds`]).
//! - Keeping a region of interest on screen ([`constrain`]).
//!
//! It does **not** own any renderer or input handling. Callers are expected
//! to feed the corrected [`Viewport`] to their rendering surface and to call
//! [`constrain`] whenever the screen is resized or an interaction settles.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use mapview_viewport::{GeoBounds, Viewport, constrain, DEFAULT_PADDING};
//!
//! let bounds = GeoBounds::new(Point::new(6.0, 46.0), Point::new(10.0, 48.0)).unwrap();
//! let viewport = Viewport::new(Point::new(8.0, 47.0), 5.0, Size::new(800.0, 600.0));
//!
//! let corrected = constrain(&viewport, &bounds, DEFAULT_PADDING);
//! assert!(corrected.zoom >= viewport.zoom);
//! assert!(corrected.transition.is_none());
//! ```
//!
//! ## Design notes
//!
//! - The projection is flat: pitch and bearing are carried through
//!   untouched and do not influence pixel positions.
//! - Zoom is the usual slippy-map zoom level: the world is
//!   `512 * 2^zoom` pixels wide.
//! - [`constrain`] never mutates its input; it returns a new [`Viewport`]
//!   with transitions cleared so the correction applies instantly.

mod bounds;
mod constrain;
mod error;
mod mercator;
mod viewport;

pub use bounds::{FittedView, GeoBounds, MAX_FIT_ZOOM, fit_bounds};
pub use constrain::{BoundsConstraint, DEFAULT_PADDING, constrain, try_constrain};
pub use error::{ConstrainError, InvalidBoundsError};
pub use mercator::{
    EARTH_CIRCUMFERENCE, MAX_LATITUDE, TILE_SIZE, WebMercator, lng_lat_to_world, world_to_lng_lat,
};
pub use viewport::{Interpolator, Transition, Viewport};
