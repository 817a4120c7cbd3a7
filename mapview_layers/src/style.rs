// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and widths used by the preview layers.

use kurbo::Vec2;
use peniko::Color;

use crate::palette::Palette;

/// Unit of a [`LineWidth`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidthUnits {
    /// Screen pixels, independent of zoom.
    Pixels,
    /// Ground meters, scaling with zoom.
    Meters,
}

/// A stroke width with its unit and pixel clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineWidth {
    /// Width in `units`.
    pub value: f64,
    /// Unit of `value`.
    pub units: WidthUnits,
    /// Smallest on-screen width in pixels.
    pub min_pixels: f64,
    /// Largest on-screen width in pixels.
    pub max_pixels: f64,
}

impl LineWidth {
    /// A fixed width in pixels.
    #[must_use]
    pub const fn pixels(value: f64) -> Self {
        Self {
            value,
            units: WidthUnits::Pixels,
            min_pixels: 0.0,
            max_pixels: f64::INFINITY,
        }
    }

    /// A ground width in meters, unclamped.
    #[must_use]
    pub const fn meters(value: f64) -> Self {
        Self {
            value,
            units: WidthUnits::Meters,
            min_pixels: 0.0,
            max_pixels: f64::INFINITY,
        }
    }

    /// Clamps the on-screen width to `min..=max` pixels.
    #[must_use]
    pub const fn clamped(self, min_pixels: f64, max_pixels: f64) -> Self {
        Self {
            min_pixels,
            max_pixels,
            ..self
        }
    }

    /// On-screen width in pixels at a ground resolution of
    /// `meters_per_pixel`.
    #[must_use]
    pub fn to_pixels(&self, meters_per_pixel: f64) -> f64 {
        let raw = match self.units {
            WidthUnits::Pixels => self.value,
            WidthUnits::Meters => self.value / meters_per_pixel,
        };
        raw.max(self.min_pixels).min(self.max_pixels)
    }
}

/// Styling of the city label layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Feature property holding the label text.
    pub text_property: String,
    /// Text size in pixels.
    pub text_size: f64,
    /// Pixel offset of the text from its point.
    pub text_offset: Vec2,
    /// Multiplier applied to point radii.
    pub point_radius_scale: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text_property: "NAME".to_owned(),
            text_size: 12.0,
            text_offset: Vec2::new(0.0, 8.0),
            point_radius_scale: 5.0,
        }
    }
}

/// Everything the layer builder paints with.
///
/// [`PreviewStyle::default`] is the stock look of the preview.
#[derive(Clone, Debug)]
pub struct PreviewStyle {
    /// Outline of the national border.
    pub country_line: Color,
    /// Width of the national border.
    pub country_line_width: LineWidth,
    /// Outline between cantons.
    pub canton_line: Color,
    /// Width of canton outlines.
    pub canton_line_width: LineWidth,
    /// Canton fill while no color index is available.
    pub canton_fill: Color,
    /// Canton fill for every index when the scheme name is unknown.
    pub unknown_scheme_fill: Color,
    /// Thin outline shared by municipalities and lakes.
    pub line_color: Color,
    /// Width of municipality outlines.
    pub municipality_line_width: LineWidth,
    /// Lake fill.
    pub lake_fill: Color,
    /// Width of lake outlines.
    pub lake_line_width: LineWidth,
    /// Outline of the city points.
    pub city_line: Color,
    /// Width of the city point outlines.
    pub city_line_width: LineWidth,
    /// City label layout.
    pub labels: LabelStyle,
    /// Color of the highlight layer.
    pub highlight: Color,
    /// Width of a stroked highlight.
    pub highlight_line_width: LineWidth,
}

impl PreviewStyle {
    /// Default [`PreviewStyle::line_color`]: translucent white.
    pub const LINE_COLOR: Color = Color::from_rgba8(255, 255, 255, 100);
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            country_line: Color::BLACK,
            country_line_width: LineWidth::pixels(1.0),
            canton_line: Color::from_rgb8(120, 120, 120),
            canton_line_width: LineWidth::meters(200.0).clamped(1.2, 3.6),
            canton_fill: Color::from_rgb8(230, 230, 230),
            unknown_scheme_fill: Palette::UNKNOWN_SCHEME_FILL,
            line_color: Self::LINE_COLOR,
            municipality_line_width: LineWidth::meters(200.0).clamped(0.5, 1.0),
            lake_fill: Color::from_rgb8(102, 175, 233),
            lake_line_width: LineWidth::meters(100.0).clamped(0.5, 1.0),
            city_line: Color::BLACK,
            city_line_width: LineWidth::pixels(1.0),
            labels: LabelStyle::default(),
            highlight: Color::from_rgb8(107, 61, 125),
            highlight_line_width: LineWidth::pixels(2.0),
        }
    }
}
