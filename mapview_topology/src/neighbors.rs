// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region adjacency from shared arcs.

use hashbrown::HashMap;
use mapview_coloring::RegionAdjacency;
use smallvec::SmallVec;

use crate::decode::arc_index;
use crate::document::{GeometryObject, Shape, Topology};
use crate::error::TopologyError;

fn collect_arcs(shape: &Shape, out: &mut Vec<i64>) {
    match shape {
        Shape::Null | Shape::Point { .. } | Shape::MultiPoint { .. } => {}
        Shape::LineString { arcs } => out.extend(arcs.iter().map(|&a| arc_index(a).0)),
        Shape::MultiLineString { arcs } | Shape::Polygon { arcs } => {
            out.extend(arcs.iter().flatten().map(|&a| arc_index(a).0));
        }
        Shape::MultiPolygon { arcs } => {
            out.extend(arcs.iter().flatten().flatten().map(|&a| arc_index(a).0));
        }
        Shape::GeometryCollection { geometries } => {
            for g in geometries {
                collect_arcs(&g.shape, out);
            }
        }
    }
}

/// Adjacency between `members`: two members are neighbors iff they share at
/// least one arc, in either direction.
///
/// Lists are sorted ascending without duplicates and never contain the
/// member itself.
#[must_use]
pub fn shared_arc_neighbors(members: &[GeometryObject]) -> RegionAdjacency {
    let mut users: HashMap<i64, SmallVec<[usize; 2]>> = HashMap::new();
    let mut arcs = Vec::new();
    for (member, object) in members.iter().enumerate() {
        arcs.clear();
        collect_arcs(&object.shape, &mut arcs);
        for &arc in &arcs {
            let entry = users.entry(arc).or_default();
            if entry.last() != Some(&member) {
                entry.push(member);
            }
        }
    }

    let pairs = users.values().flat_map(|sharing| {
        sharing
            .iter()
            .enumerate()
            .flat_map(move |(k, &a)| sharing[k + 1..].iter().map(move |&b| (a, b)))
    });
    RegionAdjacency::from_pairs(members.len(), pairs)
}

impl Topology {
    /// Neighbor table for the members of object `name`.
    ///
    /// Region `i` is member `i`, matching feature `i` of
    /// [`Topology::feature`].
    pub fn neighbors(&self, name: &str) -> Result<RegionAdjacency, TopologyError> {
        let object = self
            .object(name)
            .ok_or_else(|| TopologyError::UnknownObject(name.to_owned()))?;
        Ok(shared_arc_neighbors(object.members()))
    }
}

#[cfg(test)]
mod tests {
    use crate::Topology;

    // Three cells in a row plus an island:
    //   arc 0 is shared by cells 0 and 1, arc 1 by cells 1 and 2.
    const ROW: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[1, 0], [1, 1]],
            [[2, 0], [2, 1]],
            [[1, 1], [0, 1], [0, 0], [1, 0]],
            [[1, 0], [2, 0]],
            [[2, 1], [1, 1]],
            [[2, 0], [3, 0], [3, 1], [2, 1]],
            [[9, 9], [9, 8], [8, 8], [9, 9]]
        ],
        "objects": {
            "cells": {"type": "GeometryCollection", "geometries": [
                {"type": "Polygon", "arcs": [[0, 2]]},
                {"type": "Polygon", "arcs": [[-1, 3, 1, 4]]},
                {"type": "MultiPolygon", "arcs": [[[-2, 5]]]},
                {"type": "Polygon", "arcs": [[6]]},
                {"type": "Point", "coordinates": [0, 0]}
            ]},
            "single": {"type": "Polygon", "arcs": [[6, 6]]}
        }
    }"#;

    #[test]
    fn shared_arcs_make_neighbors() {
        let topo = Topology::from_json(ROW).unwrap();
        let adj = topo.neighbors("cells").unwrap();
        assert_eq!(adj.region_count(), 5);
        assert_eq!(adj.neighbors(0), &[1]);
        assert_eq!(adj.neighbors(1), &[0, 2]);
        assert_eq!(adj.neighbors(2), &[1]);
        assert!(adj.neighbors(3).is_empty());
        assert!(adj.neighbors(4).is_empty());
        assert!(adj.is_symmetric());
    }

    #[test]
    fn reused_arc_is_not_a_self_neighbor() {
        let topo = Topology::from_json(ROW).unwrap();
        let adj = topo.neighbors("single").unwrap();
        assert_eq!(adj.region_count(), 1);
        assert!(adj.neighbors(0).is_empty());
    }

    #[test]
    fn unknown_object() {
        let topo = Topology::from_json(ROW).unwrap();
        assert!(topo.neighbors("lakes").is_err());
    }
}
