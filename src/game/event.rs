//! Game-level notifications for view layers.
//!
//! The engine has exactly one internal notification path (board →
//! score tracker); everything a rendering or animation layer needs is
//! surfaced here instead, as plain values collected by the `Game` and
//! drained by the caller after each operation. The event set is fixed,
//! so this is a closed enum rather than a subscription mechanism.

use serde::{Deserialize, Serialize};

use crate::board::NodeId;
use crate::core::PlayerId;

/// Something a view layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was committed; `touched` lists the destination first,
    /// then every flipped node.
    MoveCompleted {
        player: PlayerId,
        touched: Vec<NodeId>,
    },
    /// One or more players had no legal move and were passed over.
    TurnsSkipped { players: Vec<PlayerId> },
    /// These players' scores changed.
    ScoresChanged { players: Vec<PlayerId> },
    /// No player can move; the game is over.
    GameFinished,
}
