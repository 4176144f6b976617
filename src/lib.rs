//! # othello-engine
//!
//! A rule engine for Othello/Reversi-family board games.
//!
//! ## Design Principles
//!
//! 1. **Opaque players**: Player ids are caller-supplied tokens. The
//!    engine never generates or interprets them.
//!
//! 2. **One write path**: Every occupancy change — moves and undo
//!    alike — flows through `Board::occupy`, whose change notification
//!    feeds the score tracker. Scores are never recomputed by
//!    rescanning.
//!
//! 3. **Shape is fixed**: Board factories decide the node set once.
//!    N-player orders, skipping, and scoring all work over whatever
//!    shape the factory produced.
//!
//! ## Architecture
//!
//! - **Synchronous, single-owner games**: Every operation is a plain
//!   call that returns or fails immediately. A `Game` belongs to one
//!   caller; independent games are independent values.
//!
//! - **Value-semantic history**: Undo snapshots are copies, so stored
//!   history can never alias into the live board.
//!
//! ## Modules
//!
//! - `core`: Player ids, error taxonomy, deterministic RNG
//! - `board`: Nodes, the board collection, shape factories
//! - `rules`: Capture algorithm, legality queries, the committing engine
//! - `score`: Incremental per-player score tracking
//! - `history`: Move records and stack-ordered undo storage
//! - `turn`: Turn rotation with skip reporting
//! - `strategy`: Move-selection policies for computer players
//! - `game`: The controller wiring it all together

pub mod board;
pub mod core;
pub mod game;
pub mod history;
pub mod rules;
pub mod score;
pub mod strategy;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameRngState, Player, PlayerId, PlayerKind, Result,
};

pub use crate::board::{factory, Board, Node, NodeChange, NodeId, Position};

pub use crate::rules::{MoveEngine, MoveOutcome, Rules};

pub use crate::score::{ScoreBoard, ScoreEntry};

pub use crate::history::{MoveHistory, MoveRecord, NodeSnapshot};

pub use crate::turn::TurnRotation;

pub use crate::strategy::{Greedy, Lowest, MoveStrategy, RandomChoice, TopLeft};

pub use crate::game::{Game, GameBuilder, GameEvent};
