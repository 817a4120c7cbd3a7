// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy sequential color indexing.

use core::ops::Index;

use smallvec::SmallVec;

use crate::adjacency::RegionAdjacency;

/// How a region picks its index from the indices of its earlier neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GreedyRule {
    /// Smallest non-negative index not used by any earlier neighbor.
    ///
    /// Keeps palettes short: a chain of regions alternates between `0`
    /// and `1`.
    #[default]
    FirstFit,
    /// One more than the largest index among earlier neighbors, or `0` if
    /// there are none.
    ///
    /// Indices grow along chains of neighbors, so the rendering layer
    /// usually wraps them onto its palette.
    MaxPlusOne,
}

/// One color index per region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorIndexAssignment {
    indices: Vec<u32>,
}

impl ColorIndexAssignment {
    /// Indices in region order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    /// Index of `region`, if it was colored.
    #[must_use]
    pub fn get(&self, region: usize) -> Option<u32> {
        self.indices.get(region).copied()
    }

    /// Number of colored regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no region was colored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of distinct palette slots needed: the largest index plus one.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.indices.iter().max().map_or(0, |&max| max as usize + 1)
    }

    /// Pairs `(i, j)` with `i < j` that border each other (either one lists
    /// the other) yet share an index.
    ///
    /// Always empty for a symmetric adjacency; see the crate docs.
    #[must_use]
    pub fn conflicts(&self, adjacency: &RegionAdjacency) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = adjacency
            .entries()
            .filter(|&(i, j)| i != j)
            .filter_map(|(i, j)| {
                let same = self.get(i)? == self.get(j)?;
                same.then_some((i.min(j), i.max(j)))
            })
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Consumes the assignment, returning the raw indices.
    #[must_use]
    pub fn into_vec(self) -> Vec<u32> {
        self.indices
    }
}

impl Index<usize> for ColorIndexAssignment {
    type Output = u32;

    fn index(&self, region: usize) -> &u32 {
        &self.indices[region]
    }
}

/// Colors regions `0..region_count` with [`GreedyRule::FirstFit`].
///
/// Region `i` only looks at listed neighbors `j < i`; later neighbors are
/// not yet colored and impose no constraint. Regions past the end of
/// `adjacency` have no neighbors and get `0`.
#[must_use]
pub fn assign_colors(adjacency: &RegionAdjacency, region_count: usize) -> ColorIndexAssignment {
    assign_colors_with(adjacency, region_count, GreedyRule::FirstFit)
}

/// Colors regions `0..region_count` with an explicit [`GreedyRule`].
#[must_use]
pub fn assign_colors_with(
    adjacency: &RegionAdjacency,
    region_count: usize,
    rule: GreedyRule,
) -> ColorIndexAssignment {
    let mut indices: Vec<u32> = Vec::with_capacity(region_count);
    let mut earlier: SmallVec<[u32; 16]> = SmallVec::new();
    for region in 0..region_count {
        earlier.clear();
        earlier.extend(
            adjacency
                .neighbors(region)
                .iter()
                .filter(|&&j| j < region)
                .map(|&j| indices[j]),
        );
        let color = match rule {
            GreedyRule::FirstFit => first_free(&mut earlier),
            GreedyRule::MaxPlusOne => earlier.iter().max().map_or(0, |&max| max + 1),
        };
        indices.push(color);
    }
    ColorIndexAssignment { indices }
}

/// Smallest value missing from `used`. Reorders `used`.
fn first_free(used: &mut SmallVec<[u32; 16]>) -> u32 {
    used.sort_unstable();
    used.dedup();
    let mut candidate = 0;
    for &c in used.iter() {
        if c != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}
