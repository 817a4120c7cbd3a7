// Copyright 2026 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors produced while reading or decoding a topology document.
#[derive(Debug)]
pub enum TopologyError {
    /// The document is not valid JSON or does not match the TopoJSON shape.
    Json(serde_json::Error),
    /// The top-level `type` is not `"Topology"`.
    NotATopology(String),
    /// A geometry references an arc that does not exist.
    ArcOutOfRange {
        /// Arc reference as written (negative means reversed).
        arc: i64,
        /// Number of arcs in the document.
        arc_count: usize,
    },
    /// A position has fewer than two coordinates.
    InvalidPosition {
        /// Number of coordinates found.
        len: usize,
    },
    /// No object with this name exists in the document.
    UnknownObject(String),
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed topology document: {err}"),
            Self::NotATopology(kind) => write!(f, "expected type \"Topology\", found {kind:?}"),
            Self::ArcOutOfRange { arc, arc_count } => {
                write!(f, "arc reference {arc} is out of range ({arc_count} arcs)")
            }
            Self::InvalidPosition { len } => {
                write!(f, "position has {len} coordinates, expected at least 2")
            }
            Self::UnknownObject(name) => write!(f, "topology has no object named {name:?}"),
        }
    }
}

impl core::error::Error for TopologyError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TopologyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
