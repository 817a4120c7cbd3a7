// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapview Layers: renderer-agnostic layer descriptors for the map preview.
//!
//! Given the collections derived from a topology, the canton color index,
//! and the user's [`PreviewOptions`], [`build_layers`] produces the stack of
//! [`Layer`]s to draw, bottom to top. Each layer borrows its features and
//! carries resolved [`peniko::Color`]s and [`LineWidth`]s taken from a
//! [`PreviewStyle`].
//!
//! Canton fills come from a named categorical [`ColorScheme`]: a color index
//! `i` maps to `scheme[i % len]`.
//!
//! ```rust
//! use mapview_layers::{ColorScheme, Palette, to_hex};
//!
//! let palette = Palette::new(ColorScheme::Category10);
//! assert_eq!(to_hex(palette.color(0)), "#1f77b4");
//! assert_eq!(to_hex(palette.color(10)), "#1f77b4");
//! assert_eq!(to_hex(Palette::named("nope").color(3)), "#eeeeee");
//! ```

mod layer;
mod options;
mod palette;
mod style;

pub use layer::{Fill, Layer, LayerId, LayerSources, Stroke, build_layers, canton_fills};
pub use options::PreviewOptions;
pub use palette::{ColorScheme, Palette, to_hex};
pub use style::{LabelStyle, LineWidth, PreviewStyle, WidthUnits};
