// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapview Coloring: automatic map coloring for choropleth previews.
//!
//! Regions are indexed `0..N`. A [`RegionAdjacency`] stores, for each
//! region, the regions it borders. [`assign_colors`] walks regions in index
//! order and gives each one a small color index that differs from every
//! *earlier* neighbor. The rendering layer maps the index onto a finite
//! palette.
//!
//! ```rust
//! use mapview_coloring::{RegionAdjacency, assign_colors};
//!
//! // A - B - C in a row: A and C do not touch.
//! let adjacency = RegionAdjacency::from_lists([vec![1], vec![0, 2], vec![1]]);
//! let colors = assign_colors(&adjacency, 3);
//! assert_eq!(colors.as_slice(), &[0, 1, 0]);
//! ```
//!
//! ## Known limitation
//!
//! The pass is greedy and single-sided: when region `i` is colored, only
//! neighbors `j < i` are consulted. With a symmetric adjacency this still
//! yields a proper coloring, but an asymmetric table (where `j` lists `i`
//! and `i` does not list `j`) can leave two bordering regions with the same
//! index. [`ColorIndexAssignment::conflicts`] lists such pairs; nothing
//! recolors them.

mod adjacency;
mod assign;

pub use adjacency::{AdjacencyError, RegionAdjacency};
pub use assign::{ColorIndexAssignment, GreedyRule, assign_colors, assign_colors_with};
