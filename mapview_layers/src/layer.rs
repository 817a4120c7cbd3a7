// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer descriptors and the preview layer stack.

use core::fmt;

use mapview_coloring::ColorIndexAssignment;
use mapview_topology::{FeatureCollection, GeoFeatures, ShapeKind};
use peniko::Color;

use crate::options::PreviewOptions;
use crate::palette::Palette;
use crate::style::{LabelStyle, LineWidth, PreviewStyle};

/// Identifier of a preview layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerId {
    /// National border.
    Country,
    /// Colored cantons.
    Cantons,
    /// Municipality outlines.
    Municipalities,
    /// Filled lakes.
    Lakes,
    /// City points and labels.
    City,
    /// Highlighted shape, drawn last.
    Highlight,
}

impl LayerId {
    /// Stable string identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Cantons => "cantons",
            Self::Municipalities => "municipalities",
            Self::Lakes => "lakes",
            Self::City => "city",
            Self::Highlight => "highlight",
        }
    }

    fn for_shape(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Country => Self::Country,
            ShapeKind::Cantons => Self::Cantons,
            ShapeKind::Municipalities => Self::Municipalities,
            ShapeKind::Lakes => Self::Lakes,
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outline of every feature in a layer.
#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    /// Line color.
    pub color: Color,
    /// Line width.
    pub width: LineWidth,
}

/// Interior paint of a layer.
#[derive(Clone, Debug)]
pub enum Fill {
    /// One color for every feature.
    Uniform(Color),
    /// One color per feature, in feature order.
    PerFeature(Vec<Color>),
}

impl Fill {
    /// Fill of feature `index`, if any.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Option<Color> {
        match self {
            Self::Uniform(color) => Some(*color),
            Self::PerFeature(colors) => colors.get(index).copied(),
        }
    }
}

/// One drawable layer borrowing its features.
#[derive(Clone, Debug)]
pub struct Layer<'a> {
    /// Layer identifier.
    pub id: LayerId,
    /// Features to draw.
    pub data: &'a FeatureCollection,
    /// Outline, if the layer is stroked.
    pub stroke: Option<Stroke>,
    /// Interior, if the layer is filled.
    pub fill: Option<Fill>,
    /// Point labels, for point layers drawn as circle plus text.
    pub labels: Option<LabelStyle>,
}

impl Layer<'_> {
    /// Returns `true` if features are outlined.
    #[must_use]
    pub fn stroked(&self) -> bool {
        self.stroke.is_some()
    }

    /// Returns `true` if features are filled.
    #[must_use]
    pub fn filled(&self) -> bool {
        self.fill.is_some()
    }

    /// Number of features drawn.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.data.len()
    }
}

/// Data the layer stack draws from.
#[derive(Clone, Copy, Debug)]
pub struct LayerSources<'a> {
    /// Collections derived from the shape topology.
    pub features: &'a GeoFeatures,
    /// City label points.
    pub city: Option<&'a FeatureCollection>,
    /// Color index per canton, once computed.
    pub color_index: Option<&'a ColorIndexAssignment>,
}

/// Fill colors for `count` cantons.
///
/// Without a color index every canton gets `uncolored`. Cantons past the
/// end of the index are also `uncolored`.
#[must_use]
pub fn canton_fills(
    count: usize,
    color_index: Option<&ColorIndexAssignment>,
    palette: &Palette,
    uncolored: Color,
) -> Vec<Color> {
    match color_index {
        Some(index) => (0..count)
            .map(|i| index.get(i).map_or(uncolored, |c| palette.color(c)))
            .collect(),
        None => vec![uncolored; count],
    }
}

fn stroke(color: Color, width: LineWidth) -> Option<Stroke> {
    Some(Stroke { color, width })
}

fn shape_layer<'a>(
    kind: ShapeKind,
    data: &'a FeatureCollection,
    sources: &LayerSources<'a>,
    options: &PreviewOptions,
    style: &PreviewStyle,
) -> Layer<'a> {
    let (stroke, fill) = match kind {
        ShapeKind::Country => (stroke(style.country_line, style.country_line_width), None),
        ShapeKind::Cantons => {
            let palette = Palette::named(&options.color).with_fallback(style.unknown_scheme_fill);
            let fills = canton_fills(data.len(), sources.color_index, &palette, style.canton_fill);
            (
                stroke(style.canton_line, style.canton_line_width),
                Some(Fill::PerFeature(fills)),
            )
        }
        ShapeKind::Municipalities => (
            stroke(style.line_color, style.municipality_line_width),
            None,
        ),
        ShapeKind::Lakes => (
            stroke(style.line_color, style.lake_line_width),
            Some(Fill::Uniform(style.lake_fill)),
        ),
    };
    Layer {
        id: LayerId::for_shape(kind),
        data,
        stroke,
        fill,
        labels: None,
    }
}

fn highlight_layer<'a>(
    kind: ShapeKind,
    data: &'a FeatureCollection,
    style: &PreviewStyle,
) -> Layer<'a> {
    let (stroke, fill) = match kind {
        ShapeKind::Lakes => (None, Some(Fill::Uniform(style.highlight))),
        _ => (stroke(style.highlight, style.highlight_line_width), None),
    };
    Layer {
        id: LayerId::Highlight,
        data,
        stroke,
        fill,
        labels: None,
    }
}

/// Builds the preview layers, bottom to top.
///
/// A shape layer is present only when its shape is selected and its data
/// was derived. The city layer needs `with_name` and label data. The
/// highlight layer needs its shape to be selected as well.
#[must_use]
pub fn build_layers<'a>(
    sources: LayerSources<'a>,
    options: &PreviewOptions,
    style: &PreviewStyle,
) -> Vec<Layer<'a>> {
    let mut layers: Vec<Layer<'a>> = ShapeKind::ALL
        .into_iter()
        .filter(|&kind| options.shows(kind))
        .filter_map(|kind| {
            let data = sources.features.get(kind)?;
            Some(shape_layer(kind, data, &sources, options, style))
        })
        .collect();

    if options.with_name
        && let Some(city) = sources.city
    {
        layers.push(Layer {
            id: LayerId::City,
            data: city,
            stroke: stroke(style.city_line, style.city_line_width),
            fill: None,
            labels: Some(style.labels.clone()),
        });
    }

    if let Some(kind) = options.highlighted
        && options.shows(kind)
        && let Some(data) = sources.features.get(kind)
    {
        layers.push(highlight_layer(kind, data, style));
    }

    layers
}
