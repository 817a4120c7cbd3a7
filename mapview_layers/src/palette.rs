// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical color schemes for region fills.

use core::fmt;

use peniko::Color;
use serde::Deserialize;

const CATEGORY10: &[u32] = &[
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22,
    0x17becf,
];
const ACCENT: &[u32] = &[
    0x7fc97f, 0xbeaed4, 0xfdc086, 0xffff99, 0x386cb0, 0xf0027f, 0xbf5b17, 0x666666,
];
const DARK2: &[u32] = &[
    0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e, 0xe6ab02, 0xa6761d, 0x666666,
];
const PAIRED: &[u32] = &[
    0xa6cee3, 0x1f78b4, 0xb2df8a, 0x33a02c, 0xfb9a99, 0xe31a1c, 0xfdbf6f, 0xff7f00, 0xcab2d6,
    0x6a3d9a, 0xffff99, 0xb15928,
];
const PASTEL1: &[u32] = &[
    0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6, 0xffffcc, 0xe5d8bd, 0xfddaec, 0xf2f2f2,
];
const PASTEL2: &[u32] = &[
    0xb3e2cd, 0xfdcdac, 0xcbd5e8, 0xf4cae4, 0xe6f5c9, 0xfff2ae, 0xf1e2cc, 0xcccccc,
];
const SET1: &[u32] = &[
    0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00, 0xffff33, 0xa65628, 0xf781bf, 0x999999,
];
const SET2: &[u32] = &[
    0x66c2a5, 0xfc8d62, 0x8da0cb, 0xe78ac3, 0xa6d854, 0xffd92f, 0xe5c494, 0xb3b3b3,
];
const SET3: &[u32] = &[
    0x8dd3c7, 0xffffb3, 0xbebada, 0xfb8072, 0x80b1d3, 0xfdb462, 0xb3de69, 0xfccde5, 0xd9d9d9,
    0xbc80bd, 0xccebc5, 0xffed6f,
];
const TABLEAU10: &[u32] = &[
    0x4e79a7, 0xf28e2c, 0xe15759, 0x76b7b2, 0x59a14f, 0xedc949, 0xaf7aa1, 0xff9da7, 0x9c755f,
    0xbab0ab,
];

#[expect(
    clippy::cast_possible_truncation,
    reason = "each channel is masked to eight bits"
)]
fn hex_color(rgb: u32) -> Color {
    Color::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// A named categorical color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Ten hues, the classic categorical default.
    Category10,
    /// Eight hues.
    Accent,
    /// Eight dark hues.
    Dark2,
    /// Six light/dark pairs.
    Paired,
    /// Nine pastel hues.
    Pastel1,
    /// Eight pastel hues.
    Pastel2,
    /// Nine saturated hues.
    Set1,
    /// Eight muted hues.
    Set2,
    /// Twelve light hues.
    Set3,
    /// Ten hues.
    Tableau10,
}

impl ColorScheme {
    /// Every scheme.
    pub const ALL: [Self; 10] = [
        Self::Category10,
        Self::Accent,
        Self::Dark2,
        Self::Paired,
        Self::Pastel1,
        Self::Pastel2,
        Self::Set1,
        Self::Set2,
        Self::Set3,
        Self::Tableau10,
    ];

    /// Lowercase scheme name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Category10 => "category10",
            Self::Accent => "accent",
            Self::Dark2 => "dark2",
            Self::Paired => "paired",
            Self::Pastel1 => "pastel1",
            Self::Pastel2 => "pastel2",
            Self::Set1 => "set1",
            Self::Set2 => "set2",
            Self::Set3 => "set3",
            Self::Tableau10 => "tableau10",
        }
    }

    /// Looks a scheme up by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(name))
    }

    fn rgb(self) -> &'static [u32] {
        match self {
            Self::Category10 => CATEGORY10,
            Self::Accent => ACCENT,
            Self::Dark2 => DARK2,
            Self::Paired => PAIRED,
            Self::Pastel1 => PASTEL1,
            Self::Pastel2 => PASTEL2,
            Self::Set1 => SET1,
            Self::Set2 => SET2,
            Self::Set3 => SET3,
            Self::Tableau10 => TABLEAU10,
        }
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(self) -> usize {
        self.rgb().len()
    }

    /// Color for a region color index; indices wrap around.
    #[must_use]
    pub fn color(self, index: u32) -> Color {
        let rgb = self.rgb();
        hex_color(rgb[index as usize % rgb.len()])
    }

    /// All colors, in order.
    pub fn colors(self) -> impl Iterator<Item = Color> {
        self.rgb().iter().map(|&rgb| hex_color(rgb))
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves color indices to fills.
///
/// A palette built from an unrecognized name paints every index with its
/// fallback color.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    scheme: Option<ColorScheme>,
    fallback: Color,
}

impl Palette {
    /// Fill used for every index when the scheme name is unknown (`#eeeeee`).
    pub const UNKNOWN_SCHEME_FILL: Color = Color::from_rgb8(0xee, 0xee, 0xee);

    /// Palette for a known scheme.
    #[must_use]
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: Some(scheme),
            fallback: Self::UNKNOWN_SCHEME_FILL,
        }
    }

    /// Palette for a scheme name, falling back to a flat fill if the name
    /// is unknown.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            scheme: ColorScheme::from_name(name),
            fallback: Self::UNKNOWN_SCHEME_FILL,
        }
    }

    /// Replaces the flat fill used when no scheme is known.
    #[must_use]
    pub fn with_fallback(self, fallback: Color) -> Self {
        Self { fallback, ..self }
    }

    /// The resolved scheme, if the name was recognized.
    #[must_use]
    pub fn scheme(&self) -> Option<ColorScheme> {
        self.scheme
    }

    /// Fill for a region color index.
    #[must_use]
    pub fn color(&self, index: u32) -> Color {
        match self.scheme {
            Some(scheme) => scheme.color(index),
            None => self.fallback,
        }
    }
}

/// `#rrggbb` form of a color, ignoring alpha.
#[must_use]
pub fn to_hex(color: Color) -> String {
    let c = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}
