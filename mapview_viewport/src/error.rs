// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// Error returned when a geographic box does not satisfy `min < max` on
/// both axes (or has non-finite corners).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidBoundsError {
    /// Requested south-west corner.
    pub min: Point,
    /// Requested north-east corner.
    pub max: Point,
}

impl fmt::Display for InvalidBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid bounds [[{}, {}], [{}, {}]]: expected min < max on both axes",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

impl core::error::Error for InvalidBoundsError {}

/// Caller contract violations detected by [`crate::try_constrain`] and
/// [`crate::fit_bounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstrainError {
    /// The screen has a zero, negative, or non-finite dimension.
    ///
    /// Typically the view has not been laid out yet.
    EmptyScreen {
        /// Screen width in pixels.
        width: f64,
        /// Screen height in pixels.
        height: f64,
    },
    /// Zoom is negative or not finite.
    InvalidZoom(f64),
    /// Padding is negative or not finite.
    InvalidPadding(f64),
    /// Padding leaves no visible window on at least one axis.
    PaddingTooLarge {
        /// Requested padding in pixels.
        padding: f64,
        /// Screen width in pixels.
        width: f64,
        /// Screen height in pixels.
        height: f64,
    },
    /// The viewport center is not finite.
    NonFiniteCenter,
}

impl fmt::Display for ConstrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScreen { width, height } => {
                write!(f, "viewport has no screen area ({width}x{height})")
            }
            Self::InvalidZoom(zoom) => write!(f, "invalid zoom {zoom}"),
            Self::InvalidPadding(padding) => write!(f, "invalid padding {padding}"),
            Self::PaddingTooLarge {
                padding,
                width,
                height,
            } => write!(
                f,
                "padding {padding} leaves no visible area on a {width}x{height} screen"
            ),
            Self::NonFiniteCenter => f.write_str("viewport center is not finite"),
        }
    }
}

impl core::error::Error for ConstrainError {}
