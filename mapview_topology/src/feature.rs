// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded geographic features.

use kurbo::{Point, Rect};
use mapview_viewport::GeoBounds;
use serde_json::{Map, Value};

/// Geometry in degrees (`x` = longitude, `y` = latitude).
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// One position.
    Point(Point),
    /// Several positions.
    MultiPoint(Vec<Point>),
    /// A polyline.
    LineString(Vec<Point>),
    /// Several polylines.
    MultiLineString(Vec<Vec<Point>>),
    /// Closed rings; the first is the exterior, the rest are holes.
    Polygon(Vec<Vec<Point>>),
    /// Several polygons.
    MultiPolygon(Vec<Vec<Vec<Point>>>),
    /// Nested geometries.
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Calls `f` for every position, in storage order.
    pub fn for_each_point(&self, f: &mut impl FnMut(Point)) {
        match self {
            Self::Point(p) => f(*p),
            Self::MultiPoint(points) | Self::LineString(points) => points.iter().copied().for_each(f),
            Self::MultiLineString(lines) | Self::Polygon(lines) => {
                lines.iter().flatten().copied().for_each(f);
            }
            Self::MultiPolygon(polygons) => polygons.iter().flatten().flatten().copied().for_each(f),
            Self::GeometryCollection(members) => {
                for member in members {
                    member.for_each_point(f);
                }
            }
        }
    }

    /// Smallest rectangle covering every position, if there are any.
    #[must_use]
    pub fn extent(&self) -> Option<Rect> {
        let mut extent: Option<Rect> = None;
        self.for_each_point(&mut |p| {
            extent = Some(match extent {
                Some(r) => r.union_pt(p),
                None => Rect::from_points(p, p),
            });
        });
        extent
    }
}

/// A geometry with its identifier and properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    /// Identifier carried over from the topology, if any.
    pub id: Option<Value>,
    /// Properties carried over from the topology (empty if none).
    pub properties: Map<String, Value>,
    /// Decoded geometry; `None` for a null topology member.
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// String property lookup.
    #[must_use]
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

/// Ordered features derived from one topology object.
///
/// Feature `i` corresponds to region `i` of the object's neighbor table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
    /// Features in object order.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if there are no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates the features.
    pub fn iter(&self) -> core::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Smallest rectangle covering every feature, if there are any
    /// positions.
    #[must_use]
    pub fn extent(&self) -> Option<Rect> {
        self.features
            .iter()
            .filter_map(|f| f.geometry.as_ref()?.extent())
            .reduce(|a, b| a.union(b))
    }

    /// Geographic bounds of all features.
    ///
    /// `None` if there are no positions or they span no area.
    #[must_use]
    pub fn bounds(&self) -> Option<GeoBounds> {
        let r = self.extent()?;
        GeoBounds::new(Point::new(r.x0, r.y0), Point::new(r.x1, r.y1)).ok()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = core::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use serde_json::Map;

    use super::{Feature, FeatureCollection, Geometry};

    fn feature(geometry: Geometry) -> Feature {
        Feature {
            id: None,
            properties: Map::new(),
            geometry: Some(geometry),
        }
    }

    #[test]
    fn extent_covers_nested_geometry() {
        let g = Geometry::GeometryCollection(vec![
            Geometry::Point(Point::new(1.0, 5.0)),
            Geometry::Polygon(vec![vec![
                Point::new(-2.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(3.0, 2.0),
                Point::new(-2.0, 0.0),
            ]]),
        ]);
        assert_eq!(g.extent(), Some(Rect::new(-2.0, 0.0, 3.0, 5.0)));
    }

    #[test]
    fn single_point_has_extent_but_no_bounds() {
        let fc = FeatureCollection {
            features: vec![feature(Geometry::Point(Point::new(8.0, 47.0)))],
        };
        assert_eq!(fc.extent(), Some(Rect::new(8.0, 47.0, 8.0, 47.0)));
        assert!(fc.bounds().is_none());
    }

    #[test]
    fn collection_bounds_union_features() {
        let fc = FeatureCollection {
            features: vec![
                feature(Geometry::LineString(vec![Point::new(6.0, 46.0), Point::new(7.0, 46.5)])),
                feature(Geometry::MultiPoint(vec![Point::new(10.0, 48.0)])),
            ],
        };
        let b = fc.bounds().unwrap();
        assert_eq!(b.to_corners(), [[6.0, 46.0], [10.0, 48.0]]);
        assert!(FeatureCollection::default().bounds().is_none());

        let with_null = FeatureCollection {
            features: vec![
                Feature {
                    geometry: None,
                    ..feature(Geometry::Point(Point::ORIGIN))
                },
                fc.features[0].clone(),
            ],
        };
        assert_eq!(with_null.extent(), Some(Rect::new(6.0, 46.0, 7.0, 46.5)));
    }
}
