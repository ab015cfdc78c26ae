//! Search and move selection for Dots-and-Boxes.
//!
//! This crate turns a [`BoardState`](dotsbox_engine::BoardState) into a chosen edge.
//!
//! # Architecture
//!
//! ```text
//! Agents (minimax, hill-climbing, random)
//!     ↓ use
//! Root search / one-ply scoring   +   Sacrifice filter (tie-break)
//!     ↓ use
//! Successor generation + extra-turn rule
//!     ↓ use
//! Objective (net closed boxes)
//! ```
//!
//! - [`objective`] - Exact score of a position: boxes closed by player 2 minus boxes
//!   closed by player 1
//! - [`successor`] - One child per undrawn edge, and the rule deciding who moves next
//! - [`search`] - Depth-limited minimax with alpha-beta pruning, scalar and root forms
//! - [`sacrifice`] - Prefers moves that leave no box one edge from completion
//! - [`agent`] - The [`Agent`](agent::Agent) trait and its implementations
//!
//! # Sign Convention
//!
//! Player 2 maximizes and player 1 minimizes. Every value produced by this crate is
//! from player 2's point of view.
//!
//! # Example
//!
//! ```
//! use dotsbox_engine::BoardState;
//! use dotsbox_evaluator::agent::{AgentConfig, AgentKind};
//!
//! let board = BoardState::new(1, 2).unwrap();
//! let config = AgentConfig {
//!     seed: Some(1),
//!     ..AgentConfig::new(AgentKind::Minimax)
//! };
//! let mut agent = config.build();
//! let edge = agent.get_action(&board).unwrap();
//! assert_eq!(board.is_drawn(edge), Some(false));
//! ```

pub mod agent;
pub mod objective;
pub mod sacrifice;
pub mod search;
pub mod successor;
