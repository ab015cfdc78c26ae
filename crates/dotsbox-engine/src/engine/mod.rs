//! Whole-game bookkeeping on top of [`BoardState`](crate::BoardState).
//!
//! - [`Game`] - Plays one game from the empty board, applying the extra-turn rule and
//!   recording every move
//! - [`MatchStats`] - Win/draw tallies and score margins over a series of games
//!
//! # Example
//!
//! ```
//! use dotsbox_engine::{Game, Outcome};
//!
//! let mut game = Game::new(1, 1).unwrap();
//! loop {
//!     let Some(edge) = game.board().undrawn_edges().next() else {
//!         break;
//!     };
//!     game.play(edge).unwrap();
//! }
//!
//! assert!(game.is_over());
//! assert!(matches!(game.outcome(), Some(Outcome::WonBy(_))));
//! ```

pub use self::{game::*, match_stats::*};

mod game;
mod match_stats;
