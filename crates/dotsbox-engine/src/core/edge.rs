use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseEdgeKindError;

/// Orientation of an edge.
///
/// `Row` edges are horizontal and live in an `(R+1) x C` grid; `Col` edges are
/// vertical and live in an `R x (C+1)` grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Row,
    Col,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 2] = [EdgeKind::Row, EdgeKind::Col];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Row => "row",
            EdgeKind::Col => "col",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeKind {
    type Err = ParseEdgeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(EdgeKind::Row),
            "col" => Ok(EdgeKind::Col),
            _ => Err(ParseEdgeKindError {
                input: s.to_owned(),
            }),
        }
    }
}

/// A single line segment that can be drawn exactly once.
///
/// `x` is the column and `y` the row inside the grid of the edge's [`EdgeKind`].
/// This is also the action an agent returns.
///
/// Edges order by kind first, then row-major (`y` before `x`), which is the order
/// moves are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub kind: EdgeKind,
    pub y: usize,
    pub x: usize,
}

impl Edge {
    #[must_use]
    pub const fn new(kind: EdgeKind, x: usize, y: usize) -> Self {
        Self { kind, y, x }
    }

    #[must_use]
    pub const fn row(x: usize, y: usize) -> Self {
        Self::new(EdgeKind::Row, x, y)
    }

    #[must_use]
    pub const fn col(x: usize, y: usize) -> Self {
        Self::new(EdgeKind::Col, x, y)
    }

    /// Returns the `(x, y)` position of the edge inside its grid.
    #[must_use]
    pub const fn position(self) -> (usize, usize) {
        (self.x, self.y)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.kind, self.x, self.y)
    }
}
