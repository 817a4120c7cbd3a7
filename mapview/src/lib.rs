// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapview: an interactive preview of administrative boundaries.
//!
//! [`MapPreview`] ties the pieces together:
//! - A camera kept inside the bounds of interest
//!   ([`mapview_viewport::constrain`]).
//! - Collections derived from a fetched TopoJSON document
//!   ([`mapview_topology::derive_geo_features`]).
//! - A canton color index so neighbors differ
//!   ([`mapview_coloring::assign_colors`]).
//! - The layer stack to draw ([`mapview_layers::build_layers`]).
//!
//! It does not fetch, render, or handle input. The host feeds it loaded
//! documents, screen sizes, and camera updates, then draws the layers it
//! returns.
//!
//! ```rust
//! use kurbo::Size;
//! use mapview::MapPreview;
//!
//! let mut preview = MapPreview::default();
//! let before = preview.viewport().zoom;
//! preview.resize(Size::new(800.0, 600.0));
//! assert!(preview.viewport().zoom > before);
//! ```
//!
//! Log events are emitted with `tracing` at `debug` for derivations and
//! corrections, and at `warn` for failed loads.

mod preview;

pub use preview::MapPreview;

pub use mapview_coloring as coloring;
pub use mapview_layers as layers;
pub use mapview_topology as topology;
pub use mapview_viewport as viewport;
