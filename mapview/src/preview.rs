// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use mapview_coloring::{ColorIndexAssignment, GreedyRule, assign_colors_with};
use mapview_layers::{Layer, LayerSources, PreviewOptions, PreviewStyle, build_layers};
use mapview_topology::{
    FeatureCollection, GeoFeatures, Topology, TopologyError, derive_city_labels,
    derive_geo_features,
};
use mapview_viewport::{BoundsConstraint, GeoBounds, Viewport};
use tracing::{debug, warn};

/// One map preview: the camera, the data derived from the last loaded
/// topology, and the canton color index.
///
/// The camera is kept inside the bounds of interest: every resize and every
/// settled interaction goes through the [`BoundsConstraint`].
#[derive(Clone, Debug)]
pub struct MapPreview {
    viewport: Viewport,
    constraint: BoundsConstraint,
    rule: GreedyRule,
    features: GeoFeatures,
    city: Option<FeatureCollection>,
    color_index: Option<ColorIndexAssignment>,
}

impl Default for MapPreview {
    fn default() -> Self {
        Self::new(GeoBounds::SWITZERLAND)
    }
}

impl MapPreview {
    /// Creates a preview constrained to `bounds`, starting from
    /// [`Viewport::SWISS_INITIAL`] with no data.
    #[must_use]
    pub fn new(bounds: GeoBounds) -> Self {
        Self {
            viewport: Viewport::SWISS_INITIAL,
            constraint: BoundsConstraint::new(bounds),
            rule: GreedyRule::default(),
            features: GeoFeatures::default(),
            city: None,
            color_index: None,
        }
    }

    /// Sets the pixel margin kept around the bounds.
    #[must_use]
    pub fn with_padding(self, padding: f64) -> Self {
        Self {
            constraint: self.constraint.with_padding(padding),
            ..self
        }
    }

    /// Sets the greedy rule used for the next color index computation.
    #[must_use]
    pub fn with_rule(self, rule: GreedyRule) -> Self {
        Self { rule, ..self }
    }

    /// Current camera.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The constraint applied to the camera.
    #[must_use]
    pub fn constraint(&self) -> &BoundsConstraint {
        &self.constraint
    }

    /// Collections derived from the last loaded topology.
    #[must_use]
    pub fn features(&self) -> &GeoFeatures {
        &self.features
    }

    /// City label points, once loaded.
    #[must_use]
    pub fn city(&self) -> Option<&FeatureCollection> {
        self.city.as_ref()
    }

    /// Canton color index, present once a topology with cantons has been
    /// loaded.
    #[must_use]
    pub fn color_index(&self) -> Option<&ColorIndexAssignment> {
        self.color_index.as_ref()
    }

    /// Replaces the derived data with what `topology` provides.
    ///
    /// The color index is recomputed once here and reused by every later
    /// [`MapPreview::layers`] call. On error nothing changes.
    pub fn load_topology(&mut self, topology: &Topology) -> Result<(), TopologyError> {
        let features = derive_geo_features(topology).inspect_err(|e| {
            warn!("topology derivation failed: {e}");
        })?;

        let color_index = match (&features.cantons, &features.neighbors) {
            (Some(cantons), Some(neighbors)) => {
                Some(assign_colors_with(neighbors, cantons.len(), self.rule))
            }
            _ => None,
        };
        debug!(
            cantons = features.cantons.as_ref().map_or(0, FeatureCollection::len),
            colors = color_index.as_ref().map_or(0, ColorIndexAssignment::color_count),
            "derived preview features"
        );

        self.features = features;
        self.color_index = color_index;
        Ok(())
    }

    /// Parses `json` and loads it with [`MapPreview::load_topology`].
    pub fn load_topology_json(&mut self, json: &str) -> Result<(), TopologyError> {
        let topology = Topology::from_json(json).inspect_err(|e| {
            warn!("topology parse failed: {e}");
        })?;
        self.load_topology(&topology)
    }

    /// Loads city label points from their own topology.
    ///
    /// A topology without city labels clears them. On error nothing
    /// changes.
    pub fn load_city_labels(&mut self, topology: &Topology) -> Result<(), TopologyError> {
        let city = derive_city_labels(topology).inspect_err(|e| {
            warn!("city label derivation failed: {e}");
        })?;
        debug!(
            cities = city.as_ref().map_or(0, FeatureCollection::len),
            "loaded city labels"
        );
        self.city = city;
        Ok(())
    }

    /// Applies a new screen size and re-constrains the camera.
    ///
    /// Sizes with a zero (or negative) dimension are ignored.
    pub fn resize(&mut self, size: Size) -> &Viewport {
        if !(size.width > 0.0 && size.height > 0.0) {
            debug!(width = size.width, height = size.height, "ignoring empty resize");
            return &self.viewport;
        }
        self.settle(self.viewport.with_size(size))
    }

    /// Accepts a camera reported by the interaction layer.
    ///
    /// While a transition is running the camera is taken as is; once it
    /// settles it is constrained.
    pub fn view_state_changed(&mut self, viewport: Viewport, in_transition: bool) -> &Viewport {
        if in_transition {
            self.viewport = viewport;
            return &self.viewport;
        }
        self.settle(viewport)
    }

    fn settle(&mut self, viewport: Viewport) -> &Viewport {
        self.viewport = match self.constraint.try_apply(&viewport) {
            Ok(constrained) => {
                debug!(
                    zoom = constrained.zoom,
                    longitude = constrained.longitude,
                    latitude = constrained.latitude,
                    "constrained viewport"
                );
                constrained
            }
            Err(e) => {
                debug!("viewport left unconstrained: {e}");
                viewport
            }
        };
        &self.viewport
    }

    /// Builds the layer stack for the current data.
    #[must_use]
    pub fn layers(&self, options: &PreviewOptions, style: &PreviewStyle) -> Vec<Layer<'_>> {
        let sources = LayerSources {
            features: &self.features,
            city: self.city.as_ref(),
            color_index: self.color_index.as_ref(),
        };
        build_layers(sources, options, style)
    }
}
