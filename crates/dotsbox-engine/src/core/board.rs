use std::{fmt, sync::Arc};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{ApplyMoveError, BoardShapeError};

use super::{
    edge::{Edge, EdgeKind},
    grid::Grid,
    player::Player,
};

/// Magnitude of a box mark once all four of its edges are drawn.
pub const CLOSED_MARK: i8 = 4;

/// Snapshot of a Dots-and-Boxes position.
///
/// Holds the drawn flags of every edge, one mark per box and the player to move.
///
/// # Box marks
///
/// The magnitude of a mark counts the drawn edges around the box (0..=4). Its sign is
/// the [`Player::sign`] of whoever drew the most recent of those edges, so a closed box
/// (`|mark| == 4`) is credited to the player that drew its fourth edge.
///
/// # Cloning
///
/// Edge and mark grids are shared between clones and copied on the first write,
/// so cloning a board for every search branch is cheap while each clone still
/// behaves as an independent value.
///
/// # Example
///
/// ```
/// use dotsbox_engine::{BoardState, Edge, Player};
///
/// let mut board = BoardState::new(1, 1).unwrap();
/// board.apply_move(Edge::row(0, 0), Player::One).unwrap();
/// board.apply_move(Edge::row(0, 1), Player::Two).unwrap();
/// board.apply_move(Edge::col(0, 0), Player::One).unwrap();
/// let closed = board.apply_move(Edge::col(1, 0), Player::Two).unwrap();
///
/// assert_eq!(closed, 1);
/// assert_eq!(board.box_mark(0, 0), Some(4));
/// assert!(board.is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardDocument", into = "BoardDocument")]
pub struct BoardState {
    rows: usize,
    cols: usize,
    row_edges: Arc<Grid<bool>>,
    col_edges: Arc<Grid<bool>>,
    marks: Arc<Grid<i8>>,
    to_move: Player,
}

impl BoardState {
    /// Creates an empty `rows x cols` board with [`Player::One`] to move.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardShapeError> {
        if rows == 0 || cols == 0 {
            return Err(BoardShapeError::Empty { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            row_edges: Arc::new(Grid::filled(cols, rows + 1, false)),
            col_edges: Arc::new(Grid::filled(cols + 1, rows, false)),
            marks: Arc::new(Grid::filled(cols, rows, 0)),
            to_move: Player::One,
        })
    }

    /// Builds a mid-game board from its raw grids.
    ///
    /// `row_edges` must be `(rows + 1) x cols`, `col_edges` `rows x (cols + 1)` and
    /// `marks` `rows x cols` (outer vectors are rows). Every mark magnitude must match
    /// the number of drawn edges around its box.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        row_edges: &[Vec<bool>],
        col_edges: &[Vec<bool>],
        marks: &[Vec<i8>],
        to_move: Player,
    ) -> Result<Self, BoardShapeError> {
        if rows == 0 || cols == 0 {
            return Err(BoardShapeError::Empty { rows, cols });
        }
        let grid = |name: &'static str, rows_of: &[Vec<bool>], width: usize, height: usize| {
            Grid::from_rows(rows_of, width, height).map_err(|(w, h)| BoardShapeError::GridSize {
                grid: name,
                expected_width: width,
                expected_height: height,
                width: w,
                height: h,
            })
        };
        let board = Self {
            rows,
            cols,
            row_edges: Arc::new(grid("row edge", row_edges, cols, rows + 1)?),
            col_edges: Arc::new(grid("col edge", col_edges, cols + 1, rows)?),
            marks: Arc::new(
                Grid::from_rows(marks, cols, rows).map_err(|(w, h)| BoardShapeError::GridSize {
                    grid: "mark",
                    expected_width: cols,
                    expected_height: rows,
                    width: w,
                    height: h,
                })?,
            ),
            to_move,
        };

        for y in 0..rows {
            for x in 0..cols {
                let mark = board.marks.get(x, y).unwrap_or_default();
                let drawn = board.drawn_edges_around(x, y);
                if usize::from(mark.unsigned_abs()) != drawn {
                    return Err(BoardShapeError::MarkMismatch { x, y, mark, drawn });
                }
            }
        }

        Ok(board)
    }

    /// Number of box rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of box columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn box_count(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        (self.rows + 1) * self.cols + self.rows * (self.cols + 1)
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn set_to_move(&mut self, player: Player) {
        self.to_move = player;
    }

    /// Returns whether `edge` is drawn, or `None` if it lies outside the board.
    #[must_use]
    pub fn is_drawn(&self, edge: Edge) -> Option<bool> {
        match edge.kind {
            EdgeKind::Row => self.row_edges.get(edge.x, edge.y),
            EdgeKind::Col => self.col_edges.get(edge.x, edge.y),
        }
    }

    /// Returns the mark of box `(x, y)`, or `None` if it lies outside the board.
    #[must_use]
    pub fn box_mark(&self, x: usize, y: usize) -> Option<i8> {
        self.marks.get(x, y)
    }

    /// Iterates over all box marks in row-major order.
    pub fn box_marks(&self) -> impl Iterator<Item = i8> + '_ {
        self.marks.cells()
    }

    /// Number of boxes credited to `player`.
    #[must_use]
    pub fn closed_boxes(&self, player: Player) -> usize {
        let closed = CLOSED_MARK * player.sign();
        self.marks.cells().filter(|mark| *mark == closed).count()
    }

    /// A board is terminal once every edge is drawn.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.row_edges.cells().all(|drawn| drawn) && self.col_edges.cells().all(|drawn| drawn)
    }

    /// Iterates over undrawn edges: row edges first, then col edges, each in row-major order.
    pub fn undrawn_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let rows = (0..=self.rows)
            .flat_map(move |y| (0..self.cols).map(move |x| Edge::row(x, y)));
        let cols = (0..self.rows)
            .flat_map(move |y| (0..=self.cols).map(move |x| Edge::col(x, y)));
        rows.chain(cols)
            .filter(|edge| self.is_drawn(*edge) == Some(false))
    }

    /// Boxes bordered by `edge`: one for edges on the outline, two for interior edges.
    #[must_use]
    pub fn adjacent_boxes(&self, edge: Edge) -> ArrayVec<(usize, usize), 2> {
        let mut boxes = ArrayVec::new();
        match edge.kind {
            EdgeKind::Row => {
                if edge.y > 0 {
                    boxes.push((edge.x, edge.y - 1));
                }
                if edge.y < self.rows {
                    boxes.push((edge.x, edge.y));
                }
            }
            EdgeKind::Col => {
                if edge.x > 0 {
                    boxes.push((edge.x - 1, edge.y));
                }
                if edge.x < self.cols {
                    boxes.push((edge.x, edge.y));
                }
            }
        }
        boxes
    }

    /// Draws `edge` on behalf of `mover` and returns how many boxes it closed.
    ///
    /// Each adjacent box mark becomes `sign * |mark| + sign`: its magnitude grows by one
    /// and its sign is re-stamped to the mover. A single edge closes two boxes when both
    /// neighbours already had three edges drawn.
    ///
    /// The player to move is left untouched; see [`Self::play`] for the turn rule.
    pub fn apply_move(&mut self, edge: Edge, mover: Player) -> Result<u8, ApplyMoveError> {
        match self.is_drawn(edge) {
            None => {
                return Err(ApplyMoveError::OutOfBounds {
                    edge,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            Some(true) => return Err(ApplyMoveError::AlreadyDrawn { edge }),
            Some(false) => {}
        }

        match edge.kind {
            EdgeKind::Row => Arc::make_mut(&mut self.row_edges).set(edge.x, edge.y, true),
            EdgeKind::Col => Arc::make_mut(&mut self.col_edges).set(edge.x, edge.y, true),
        }

        let sign = mover.sign();
        let boxes = self.adjacent_boxes(edge);
        let marks = Arc::make_mut(&mut self.marks);
        let mut closed = 0;
        for (x, y) in boxes {
            let mark = marks.get(x, y).unwrap_or_default();
            let updated = sign * mark.abs() + sign;
            debug_assert!(updated.abs() <= CLOSED_MARK, "box ({x}, {y}) over-drawn");
            marks.set(x, y, updated);
            if updated.abs() == CLOSED_MARK {
                closed += 1;
            }
        }
        Ok(closed)
    }

    /// Draws `edge` for the player to move, then passes the turn unless a box was closed.
    pub fn play(&mut self, edge: Edge) -> Result<u8, ApplyMoveError> {
        let closed = self.apply_move(edge, self.to_move)?;
        if closed == 0 {
            self.to_move = self.to_move.opponent();
        }
        Ok(closed)
    }

    fn drawn_edges_around(&self, x: usize, y: usize) -> usize {
        [
            self.row_edges.get(x, y),
            self.row_edges.get(x, y + 1),
            self.col_edges.get(x, y),
            self.col_edges.get(x + 1, y),
        ]
        .into_iter()
        .filter(|drawn| *drawn == Some(true))
        .count()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..=self.rows {
            for x in 0..self.cols {
                let edge = if self.row_edges.get(x, y) == Some(true) {
                    "---"
                } else {
                    "   "
                };
                write!(f, "+{edge}")?;
            }
            writeln!(f, "+")?;

            if y == self.rows {
                break;
            }
            for x in 0..=self.cols {
                let edge = if self.col_edges.get(x, y) == Some(true) {
                    '|'
                } else {
                    ' '
                };
                write!(f, "{edge}")?;
                if x == self.cols {
                    break;
                }
                match self.marks.get(x, y) {
                    Some(CLOSED_MARK) => write!(f, " 2 ")?,
                    Some(mark) if mark == -CLOSED_MARK => write!(f, " 1 ")?,
                    _ => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized form of [`BoardState`], validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardDocument {
    rows: usize,
    cols: usize,
    row_edges: Vec<Vec<bool>>,
    col_edges: Vec<Vec<bool>>,
    marks: Vec<Vec<i8>>,
    to_move: Player,
}

impl TryFrom<BoardDocument> for BoardState {
    type Error = BoardShapeError;

    fn try_from(doc: BoardDocument) -> Result<Self, Self::Error> {
        BoardState::from_parts(
            doc.rows,
            doc.cols,
            &doc.row_edges,
            &doc.col_edges,
            &doc.marks,
            doc.to_move,
        )
    }
}

impl From<BoardState> for BoardDocument {
    fn from(board: BoardState) -> Self {
        Self {
            rows: board.rows,
            cols: board.cols,
            row_edges: board.row_edges.to_rows(),
            col_edges: board.col_edges.to_rows(),
            marks: board.marks.to_rows(),
            to_move: board.to_move,
        }
    }
}
