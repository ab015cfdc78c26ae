//! Board model and game driver for Dots-and-Boxes.
//!
//! - [`core`] - Edges, players and the [`BoardState`] snapshot with its drawing and scoring rules
//! - [`engine`] - Whole-game bookkeeping ([`Game`]) and series statistics ([`MatchStats`])

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ApplyMoveError {
    #[display("{edge} is outside of a {rows}x{cols} board")]
    OutOfBounds { edge: Edge, rows: usize, cols: usize },
    #[display("{edge} is already drawn")]
    AlreadyDrawn { edge: Edge },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid edge kind {input:?} (expected \"row\" or \"col\")")]
pub struct ParseEdgeKindError {
    input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardShapeError {
    #[display("board must have at least one box, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },
    #[display("{grid} grid must be {expected_width}x{expected_height}, got {width}x{height}")]
    GridSize {
        grid: &'static str,
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
    #[display("box ({x}, {y}) has mark {mark} but {drawn} of its edges are drawn")]
    MarkMismatch {
        x: usize,
        y: usize,
        mark: i8,
        drawn: usize,
    },
}
