// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only neighbor table over regions.

use core::fmt;

/// Error returned by [`RegionAdjacency::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjacencyError {
    /// The table covers a different number of regions than expected.
    RegionCountMismatch {
        /// Regions present in the table.
        adjacency: usize,
        /// Regions the caller is about to color.
        expected: usize,
    },
    /// A neighbor index points past the last region.
    NeighborOutOfRange {
        /// Region whose list holds the bad entry.
        region: usize,
        /// Offending neighbor index.
        neighbor: usize,
    },
}

impl fmt::Display for AdjacencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionCountMismatch {
                adjacency,
                expected,
            } => write!(
                f,
                "adjacency covers {adjacency} regions but {expected} were expected"
            ),
            Self::NeighborOutOfRange { region, neighbor } => {
                write!(f, "region {region} lists neighbor {neighbor}, which is out of range")
            }
        }
    }
}

impl core::error::Error for AdjacencyError {}

/// Ensures `vec` has at least `idx + 1` elements, filling with defaults.
#[inline]
fn grow<T: Default + Clone>(vec: &mut Vec<T>, idx: usize) {
    if vec.len() <= idx {
        vec.resize(idx + 1, T::default());
    }
}

/// Compressed (CSR) neighbor lists.
///
/// `offsets[i]..offsets[i + 1]` indexes into `neighbors` to give the list
/// of regions adjacent to region `i`, in the order they were supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionAdjacency {
    /// Row offsets; length is `region_count + 1`.
    offsets: Vec<usize>,
    /// Flattened neighbor lists.
    neighbors: Vec<usize>,
}

impl Default for RegionAdjacency {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionAdjacency {
    /// Creates a table with no regions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offsets: vec![0],
            neighbors: Vec::new(),
        }
    }

    /// Builds a table from one neighbor list per region.
    ///
    /// Lists are stored as given: no sorting, de-duplication or symmetry is
    /// imposed.
    pub fn from_lists<I, L>(lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = usize>,
    {
        let mut offsets = vec![0];
        let mut neighbors = Vec::new();
        for list in lists {
            neighbors.extend(list);
            offsets.push(neighbors.len());
        }
        Self { offsets, neighbors }
    }

    /// Builds a symmetric table over `region_count` regions from undirected
    /// `(a, b)` pairs.
    ///
    /// Each list comes out sorted ascending without duplicates; self pairs
    /// are dropped. Pairs that mention a region `>= region_count` grow the
    /// table to include it.
    pub fn from_pairs<I>(region_count: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut lists: Vec<Vec<usize>> = vec![Vec::new(); region_count];
        for (a, b) in pairs {
            if a == b {
                continue;
            }
            grow(&mut lists, a.max(b));
            lists[a].push(b);
            lists[b].push(a);
        }
        for list in &mut lists {
            list.sort_unstable();
            list.dedup();
        }
        Self::from_lists(lists)
    }

    /// Number of regions covered.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Returns `true` if there are no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.region_count() == 0
    }

    /// Neighbors of `region`, or an empty slice if it is not covered.
    #[must_use]
    pub fn neighbors(&self, region: usize) -> &[usize] {
        match (self.offsets.get(region), self.offsets.get(region + 1)) {
            (Some(&start), Some(&end)) => &self.neighbors[start..end],
            _ => &[],
        }
    }

    /// Returns `true` if `region` lists `other`.
    #[must_use]
    pub fn lists(&self, region: usize, other: usize) -> bool {
        self.neighbors(region).contains(&other)
    }

    /// Total number of stored (directed) entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Iterates `(region, neighbor)` for every stored entry.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.region_count())
            .flat_map(move |region| self.neighbors(region).iter().map(move |&n| (region, n)))
    }

    /// Returns `true` if every entry `i -> j` has a matching `j -> i`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.entries().all(|(i, j)| self.lists(j, i))
    }

    /// Checks that the table covers exactly `region_count` regions and that
    /// every neighbor index is in range.
    pub fn validate(&self, region_count: usize) -> Result<(), AdjacencyError> {
        if self.region_count() != region_count {
            return Err(AdjacencyError::RegionCountMismatch {
                adjacency: self.region_count(),
                expected: region_count,
            });
        }
        match self.entries().find(|&(_, n)| n >= region_count) {
            Some((region, neighbor)) => Err(AdjacencyError::NeighborOutOfRange { region, neighbor }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AdjacencyError, RegionAdjacency};

    #[test]
    fn from_lists_keeps_order() {
        let adj = RegionAdjacency::from_lists([vec![2, 1], vec![], vec![0]]);
        assert_eq!(adj.region_count(), 3);
        assert_eq!(adj.neighbors(0), &[2, 1]);
        assert!(adj.neighbors(1).is_empty());
        assert_eq!(adj.neighbors(2), &[0]);
        assert!(adj.neighbors(7).is_empty());
        assert_eq!(adj.entry_count(), 3);
    }

    #[test]
    fn from_pairs_is_sorted_symmetric_and_deduplicated() {
        let adj = RegionAdjacency::from_pairs(4, [(2, 0), (0, 1), (1, 0), (3, 3), (2, 1)]);
        assert_eq!(adj.region_count(), 4);
        assert_eq!(adj.neighbors(0), &[1, 2]);
        assert_eq!(adj.neighbors(1), &[0, 2]);
        assert_eq!(adj.neighbors(2), &[0, 1]);
        assert!(adj.neighbors(3).is_empty());
        assert!(adj.is_symmetric());
    }

    #[test]
    fn from_pairs_grows_to_fit() {
        let adj = RegionAdjacency::from_pairs(1, [(0, 4)]);
        assert_eq!(adj.region_count(), 5);
        assert_eq!(adj.neighbors(4), &[0]);
    }

    #[test]
    fn empty_tables() {
        assert!(RegionAdjacency::new().is_empty());
        assert!(RegionAdjacency::default().is_empty());
        assert_eq!(RegionAdjacency::default().region_count(), 0);
        assert!(RegionAdjacency::new().validate(0).is_ok());
    }

    #[test]
    fn symmetry_detection() {
        let one_sided = RegionAdjacency::from_lists([vec![1], vec![]]);
        assert!(!one_sided.is_symmetric());
    }

    #[test]
    fn validate_reports_first_problem() {
        let adj = RegionAdjacency::from_lists([vec![1], vec![0, 5]]);
        assert_eq!(
            adj.validate(3),
            Err(AdjacencyError::RegionCountMismatch {
                adjacency: 2,
                expected: 3
            })
        );
        assert_eq!(
            adj.validate(2),
            Err(AdjacencyError::NeighborOutOfRange {
                region: 1,
                neighbor: 5
            })
        );
    }
}
