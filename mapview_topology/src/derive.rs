// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview feature derivation from a fetched topology.

use core::fmt;

use mapview_coloring::RegionAdjacency;
use serde::Deserialize;

use crate::decode::Decoder;
use crate::document::Topology;
use crate::error::TopologyError;
use crate::feature::FeatureCollection;
use crate::neighbors::shared_arc_neighbors;

/// Object holding the bundled city labels.
pub const CITY_OBJECT: &str = "swiss-city";

/// Geometry collections a preview can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// National border.
    Country,
    /// Canton polygons; the colored layer.
    Cantons,
    /// Municipality polygons.
    Municipalities,
    /// Lake polygons.
    Lakes,
}

impl ShapeKind {
    /// Every kind, in draw order.
    pub const ALL: [Self; 4] = [Self::Country, Self::Cantons, Self::Municipalities, Self::Lakes];

    /// Name of the topology object holding this kind.
    #[must_use]
    pub fn object_name(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Cantons => "cantons",
            Self::Municipalities => "municipalities",
            Self::Lakes => "lakes",
        }
    }

    /// Parses an object name.
    #[must_use]
    pub fn from_object_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.object_name() == name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_name())
    }
}

/// Everything a preview derives from one topology document.
///
/// Each collection is `None` when the document has no such object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeatures {
    /// National border.
    pub country: Option<FeatureCollection>,
    /// Canton polygons.
    pub cantons: Option<FeatureCollection>,
    /// Shared-border table over `cantons`, feature `i` being region `i`.
    pub neighbors: Option<RegionAdjacency>,
    /// Municipality polygons.
    pub municipalities: Option<FeatureCollection>,
    /// Lake polygons.
    pub lakes: Option<FeatureCollection>,
}

impl GeoFeatures {
    /// Collection for `kind`, if present.
    #[must_use]
    pub fn get(&self, kind: ShapeKind) -> Option<&FeatureCollection> {
        match kind {
            ShapeKind::Country => self.country.as_ref(),
            ShapeKind::Cantons => self.cantons.as_ref(),
            ShapeKind::Municipalities => self.municipalities.as_ref(),
            ShapeKind::Lakes => self.lakes.as_ref(),
        }
    }

    /// Returns `true` if no collection was derived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ShapeKind::ALL.into_iter().all(|kind| self.get(kind).is_none())
    }
}

/// Derives the preview collections (and the canton neighbor table) from a
/// topology.
///
/// Missing objects are not an error; malformed ones are.
pub fn derive_geo_features(topology: &Topology) -> Result<GeoFeatures, TopologyError> {
    let decoder = Decoder::new(topology)?;
    let collection = |kind: ShapeKind| {
        topology
            .object(kind.object_name())
            .map(|object| decoder.collection(object))
            .transpose()
    };

    Ok(GeoFeatures {
        country: collection(ShapeKind::Country)?,
        cantons: collection(ShapeKind::Cantons)?,
        neighbors: topology
            .object(ShapeKind::Cantons.object_name())
            .map(|object| shared_arc_neighbors(object.members())),
        municipalities: collection(ShapeKind::Municipalities)?,
        lakes: collection(ShapeKind::Lakes)?,
    })
}

/// Derives city label points from the bundled city topology.
///
/// Returns `Ok(None)` when the topology has no [`CITY_OBJECT`].
pub fn derive_city_labels(topology: &Topology) -> Result<Option<FeatureCollection>, TopologyError> {
    match topology.object(CITY_OBJECT) {
        Some(object) => Decoder::new(topology)?.collection(object).map(Some),
        None => Ok(None),
    }
}
