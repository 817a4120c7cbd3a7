// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serde model of a TopoJSON document.

use std::collections::BTreeMap;

use kurbo::Point;
use mapview_viewport::GeoBounds;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::TopologyError;

/// Quantization transform: `position = quantized * scale + translate`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Transform {
    /// Per-axis scale.
    pub scale: [f64; 2],
    /// Per-axis offset.
    pub translate: [f64; 2],
}

impl Transform {
    /// Applies the transform to one quantized position.
    #[must_use]
    pub fn apply(&self, x: f64, y: f64) -> Point {
        Point::new(
            x * self.scale[0] + self.translate[0],
            y * self.scale[1] + self.translate[1],
        )
    }
}

/// Geometry kinds, with the fields each one carries.
///
/// Arc references are indices into [`Topology`]'s arc list; a negative
/// reference `!i` means arc `i` traversed backwards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// `"type": null`: a member without geometry.
    #[serde(skip_deserializing)]
    Null,
    /// One position.
    Point {
        /// Position, quantized if the topology has a transform.
        coordinates: Vec<f64>,
    },
    /// Several positions.
    MultiPoint {
        /// Positions, quantized if the topology has a transform.
        coordinates: Vec<Vec<f64>>,
    },
    /// One line made of consecutive arcs.
    LineString {
        /// Arc references.
        arcs: Vec<i64>,
    },
    /// Several lines.
    MultiLineString {
        /// Arc references per line.
        arcs: Vec<Vec<i64>>,
    },
    /// Outer ring followed by holes.
    Polygon {
        /// Arc references per ring.
        arcs: Vec<Vec<i64>>,
    },
    /// Several polygons.
    MultiPolygon {
        /// Arc references per ring, per polygon.
        arcs: Vec<Vec<Vec<i64>>>,
    },
    /// Nested geometries.
    GeometryCollection {
        /// Member geometries.
        geometries: Vec<GeometryObject>,
    },
}

/// A geometry with its optional identifier and properties.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawObject")]
pub struct GeometryObject {
    /// Kind and payload.
    pub shape: Shape,
    /// Optional identifier.
    pub id: Option<Value>,
    /// Optional properties.
    pub properties: Option<Map<String, Value>>,
}

/// Wire form of [`GeometryObject`], with the `type` tag kept aside so a
/// null tag can become [`Shape::Null`].
#[derive(Deserialize)]
struct RawObject {
    #[serde(rename = "type")]
    kind: Value,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl TryFrom<RawObject> for GeometryObject {
    type Error = serde_json::Error;

    fn try_from(raw: RawObject) -> Result<Self, Self::Error> {
        let shape = if raw.kind.is_null() {
            Shape::Null
        } else {
            let mut payload = raw.payload;
            payload.insert("type".to_owned(), raw.kind);
            serde_json::from_value(Value::Object(payload))?
        };
        Ok(Self {
            shape,
            id: raw.id,
            properties: raw.properties,
        })
    }
}

impl GeometryObject {
    /// Members of a collection, or the object itself otherwise.
    #[must_use]
    pub fn members(&self) -> &[Self] {
        match &self.shape {
            Shape::GeometryCollection { geometries } => geometries,
            _ => core::slice::from_ref(self),
        }
    }
}

/// A parsed TopoJSON `Topology`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Topology {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    transform: Option<Transform>,
    #[serde(default)]
    bbox: Option<Vec<f64>>,
    #[serde(default)]
    arcs: Vec<Vec<Vec<f64>>>,
    objects: BTreeMap<String, GeometryObject>,
}

impl Topology {
    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TopologyError> {
        Self::checked(serde_json::from_str(json)?)
    }

    /// Parses a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TopologyError> {
        Self::checked(serde_json::from_slice(bytes)?)
    }

    /// Converts an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, TopologyError> {
        Self::checked(serde_json::from_value(value)?)
    }

    fn checked(topology: Self) -> Result<Self, TopologyError> {
        if topology.kind != "Topology" {
            return Err(TopologyError::NotATopology(topology.kind));
        }
        Ok(topology)
    }

    /// Quantization transform, if the document is quantized.
    #[must_use]
    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    /// Bounding box declared by the document, if present and valid.
    #[must_use]
    pub fn bbox(&self) -> Option<GeoBounds> {
        match self.bbox.as_deref() {
            Some(&[x0, y0, x1, y1]) => GeoBounds::from_corners([[x0, y0], [x1, y1]]).ok(),
            _ => None,
        }
    }

    /// Raw (possibly quantized, delta-encoded) arcs.
    #[must_use]
    pub fn raw_arcs(&self) -> &[Vec<Vec<f64>>] {
        &self.arcs
    }

    /// Named object lookup.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&GeometryObject> {
        self.objects.get(name)
    }

    /// Names of all objects, sorted.
    pub fn object_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.objects.keys().map(String::as_str)
    }
}
