// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapview Topology: TopoJSON documents as preview features.
//!
//! A TopoJSON [`Topology`] stores shared borders once, as *arcs*, and
//! builds every polygon from references to them. This crate:
//! - parses the document ([`Topology::from_json`]);
//! - decodes quantized, delta-encoded arcs into degrees;
//! - converts named objects into [`FeatureCollection`]s
//!   ([`Topology::feature`]);
//! - derives which members of an object border each other
//!   ([`Topology::neighbors`]), the input to automatic map coloring.
//!
//! [`derive_geo_features`] bundles the collections a preview shows into one
//! immutable [`GeoFeatures`] record. Callers keep the latest successful
//! record and replace it wholesale on the next load.
//!
//! ```rust
//! use mapview_topology::{Topology, derive_geo_features};
//!
//! let topo = Topology::from_json(r#"{
//!     "type": "Topology",
//!     "arcs": [[[0, 0], [1, 0]], [[1, 0], [1, 1], [0, 1], [0, 0]], [[1, 0], [2, 0], [2, 1], [1, 1], [1, 0]]],
//!     "objects": {
//!         "cantons": {"type": "GeometryCollection", "geometries": [
//!             {"type": "Polygon", "arcs": [[0, 1]]},
//!             {"type": "Polygon", "arcs": [[2]]}
//!         ]}
//!     }
//! }"#).unwrap();
//!
//! let features = derive_geo_features(&topo).unwrap();
//! assert_eq!(features.cantons.as_ref().unwrap().len(), 2);
//! assert!(features.country.is_none());
//! ```

mod decode;
mod derive;
mod document;
mod error;
mod feature;
mod neighbors;

pub use derive::{CITY_OBJECT, GeoFeatures, ShapeKind, derive_city_labels, derive_geo_features};
pub use document::{GeometryObject, Shape, Topology, Transform};
pub use error::TopologyError;
pub use feature::{Feature, FeatureCollection, Geometry};
pub use neighbors::shared_arc_neighbors;
