// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc decoding and conversion of topology objects into features.

use kurbo::Point;
use serde_json::Map;

use crate::document::{GeometryObject, Shape, Topology, Transform};
use crate::error::TopologyError;
use crate::feature::{Feature, FeatureCollection, Geometry};

fn position(raw: &[f64]) -> Result<(f64, f64), TopologyError> {
    match raw {
        [x, y, ..] => Ok((*x, *y)),
        _ => Err(TopologyError::InvalidPosition { len: raw.len() }),
    }
}

/// Splits an arc reference into `(index, reversed)`.
pub(crate) fn arc_index(arc: i64) -> (i64, bool) {
    if arc < 0 { (!arc, true) } else { (arc, false) }
}

/// Decoded arcs plus the transform for standalone positions.
///
/// Decoding arcs is the expensive part, so one decoder is shared when
/// several objects of the same topology are converted.
pub(crate) struct Decoder<'a> {
    arcs: Vec<Vec<Point>>,
    transform: Option<&'a Transform>,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(topology: &'a Topology) -> Result<Self, TopologyError> {
        Ok(Self {
            arcs: topology.decode_arcs()?,
            transform: topology.transform(),
        })
    }

    fn point(&self, raw: &[f64]) -> Result<Point, TopologyError> {
        let (x, y) = position(raw)?;
        Ok(match self.transform {
            Some(t) => t.apply(x, y),
            None => Point::new(x, y),
        })
    }

    fn arc(&self, arc: i64) -> Result<(&[Point], bool), TopologyError> {
        let (index, reversed) = arc_index(arc);
        usize::try_from(index)
            .ok()
            .and_then(|i| self.arcs.get(i))
            .map(|points| (points.as_slice(), reversed))
            .ok_or_else(|| TopologyError::ArcOutOfRange {
                arc,
                arc_count: self.arcs.len(),
            })
    }

    /// Stitches consecutive arcs, sharing each junction position once.
    fn line(&self, arcs: &[i64]) -> Result<Vec<Point>, TopologyError> {
        let mut points: Vec<Point> = Vec::new();
        for &arc in arcs {
            let (arc_points, reversed) = self.arc(arc)?;
            points.pop();
            if reversed {
                points.extend(arc_points.iter().rev().copied());
            } else {
                points.extend_from_slice(arc_points);
            }
        }
        if points.len() == 1 {
            points.push(points[0]);
        }
        Ok(points)
    }

    fn ring(&self, arcs: &[i64]) -> Result<Vec<Point>, TopologyError> {
        let mut points = self.line(arcs)?;
        if let Some(&first) = points.first() {
            while points.len() < 4 {
                points.push(first);
            }
        }
        Ok(points)
    }

    fn rings(&self, rings: &[Vec<i64>]) -> Result<Vec<Vec<Point>>, TopologyError> {
        rings.iter().map(|r| self.ring(r)).collect()
    }

    /// `None` for a null shape.
    fn geometry(&self, shape: &Shape) -> Result<Option<Geometry>, TopologyError> {
        Ok(Some(match shape {
            Shape::Null => return Ok(None),
            Shape::Point { coordinates } => Geometry::Point(self.point(coordinates)?),
            Shape::MultiPoint { coordinates } => Geometry::MultiPoint(
                coordinates
                    .iter()
                    .map(|c| self.point(c))
                    .collect::<Result<_, _>>()?,
            ),
            Shape::LineString { arcs } => Geometry::LineString(self.line(arcs)?),
            Shape::MultiLineString { arcs } => Geometry::MultiLineString(
                arcs.iter().map(|l| self.line(l)).collect::<Result<_, _>>()?,
            ),
            Shape::Polygon { arcs } => Geometry::Polygon(self.rings(arcs)?),
            Shape::MultiPolygon { arcs } => Geometry::MultiPolygon(
                arcs.iter().map(|p| self.rings(p)).collect::<Result<_, _>>()?,
            ),
            Shape::GeometryCollection { geometries } => Geometry::GeometryCollection(
                geometries
                    .iter()
                    .filter_map(|g| self.geometry(&g.shape).transpose())
                    .collect::<Result<_, _>>()?,
            ),
        }))
    }

    fn feature(&self, object: &GeometryObject) -> Result<Feature, TopologyError> {
        Ok(Feature {
            id: object.id.clone(),
            properties: object.properties.clone().unwrap_or_else(Map::new),
            geometry: self.geometry(&object.shape)?,
        })
    }

    pub(crate) fn collection(&self, object: &GeometryObject) -> Result<FeatureCollection, TopologyError> {
        let features = object
            .members()
            .iter()
            .map(|member| self.feature(member))
            .collect::<Result<_, _>>()?;
        Ok(FeatureCollection { features })
    }
}

impl Topology {
    /// Decodes every arc into absolute positions.
    ///
    /// With a transform, arcs are delta-encoded: each position is the
    /// running sum of the quantized offsets, then scaled and translated.
    pub fn decode_arcs(&self) -> Result<Vec<Vec<Point>>, TopologyError> {
        self.raw_arcs()
            .iter()
            .map(|arc| match self.transform() {
                Some(t) => {
                    let (mut x, mut y) = (0.0, 0.0);
                    arc.iter()
                        .map(|raw| {
                            let (dx, dy) = position(raw)?;
                            x += dx;
                            y += dy;
                            Ok(t.apply(x, y))
                        })
                        .collect::<Result<Vec<Point>, TopologyError>>()
                }
                None => arc
                    .iter()
                    .map(|raw| position(raw).map(|(x, y)| Point::new(x, y)))
                    .collect::<Result<Vec<Point>, TopologyError>>(),
            })
            .collect()
    }

    /// Converts the object `name` into features.
    ///
    /// A geometry collection yields one feature per member, in order; any
    /// other object yields a single feature.
    pub fn feature(&self, name: &str) -> Result<FeatureCollection, TopologyError> {
        let object = self
            .object(name)
            .ok_or_else(|| TopologyError::UnknownObject(name.to_owned()))?;
        Decoder::new(self)?.collection(object)
    }
}
