//! Error taxonomy for the engine.
//!
//! All failures are local, synchronous, and recoverable by the caller:
//! nothing in the engine retries, and nothing is process-fatal.
//! Callers are expected to pre-check with `Rules::is_legal` /
//! `Rules::can_move` on the happy path; the mutating operations still
//! re-validate and fail loudly rather than silently doing nothing.

use thiserror::Error;

use crate::board::NodeId;
use crate::core::PlayerId;

/// Engine failure classes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A coordinate or node id outside the board's fixed shape.
    #[error("no node with id {0} on the board")]
    NodeNotFound(NodeId),

    /// A player id unknown to the component receiving it.
    #[error("unknown player id `{0}`")]
    PlayerNotFound(PlayerId),

    /// Destination occupied, no captures possible, or an otherwise
    /// invalid player/node combination.
    #[error("illegal move by `{player}` at {node}")]
    IllegalMove { player: PlayerId, node: NodeId },

    /// An operation that requires a player in turn was called without one,
    /// or the player in turn cannot perform the requested operation.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
