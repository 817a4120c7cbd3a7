// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the user asked the preview to show.

use std::collections::BTreeSet;

use mapview_topology::ShapeKind;
use serde::Deserialize;

use crate::palette::ColorScheme;

/// User-facing preview selections.
///
/// Deserializes from camel-cased JSON; missing fields take their
/// [`Default`] values.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewOptions {
    /// Shapes to draw.
    pub shapes: BTreeSet<ShapeKind>,
    /// Color scheme name for canton fills.
    ///
    /// Kept as a string so that an unknown name can still be rendered
    /// (with a flat fill).
    pub color: String,
    /// Whether to draw city labels.
    pub with_name: bool,
    /// Shape to draw on top in the highlight color.
    pub highlighted: Option<ShapeKind>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            shapes: [ShapeKind::Country, ShapeKind::Cantons, ShapeKind::Lakes].into(),
            color: ColorScheme::Tableau10.name().to_owned(),
            with_name: false,
            highlighted: None,
        }
    }
}

impl PreviewOptions {
    /// Returns `true` if `kind` is selected.
    #[must_use]
    pub fn shows(&self, kind: ShapeKind) -> bool {
        self.shapes.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use mapview_topology::ShapeKind;

    use super::PreviewOptions;

    #[test]
    fn partial_json_fills_defaults() {
        let options: PreviewOptions = serde_json::from_str(
            r#"{"shapes": ["cantons", "municipalities"], "withName": true}"#,
        )
        .unwrap();
        assert!(options.shows(ShapeKind::Municipalities));
        assert!(!options.shows(ShapeKind::Country));
        assert!(options.with_name);
        assert_eq!(options.color, "tableau10");
        assert_eq!(options.highlighted, None);
    }

    #[test]
    fn default_shows_country_cantons_and_lakes() {
        let options = PreviewOptions::default();
        let shown: Vec<_> = ShapeKind::ALL
            .into_iter()
            .filter(|&k| options.shows(k))
            .collect();
        assert_eq!(shown, [ShapeKind::Country, ShapeKind::Cantons, ShapeKind::Lakes]);
    }

    #[test]
    fn highlight_parses_a_shape_name() {
        let options: PreviewOptions =
            serde_json::from_str(r#"{"highlighted": "lakes", "color": "set3"}"#).unwrap();
        assert_eq!(options.highlighted, Some(ShapeKind::Lakes));
        assert_eq!(options.color, "set3");
    }
}
