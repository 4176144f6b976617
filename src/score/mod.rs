//! Incremental score tracking.
//!
//! The score board never rescans the board: it is seeded from the
//! initial occupancy and from then on updated exclusively through the
//! `NodeChange` notifications produced by `Board::occupy`. The rules
//! engine routes every change here, including the ones replayed by
//! undo, which is what keeps scores consistent with the board at every
//! observable point.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, NodeChange};
use crate::core::PlayerId;

/// A player's current count of occupied nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: PlayerId,
    pub points: u32,
}

/// Per-player occupied-node counts.
///
/// Invariant: the sum of all counts equals the number of occupied
/// nodes on the tracked board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    points: FxHashMap<PlayerId, u32>,
}

impl ScoreBoard {
    /// Build a score board from the initial board occupancy.
    ///
    /// Every id in `players` gets an entry (zero if it occupies
    /// nothing); occupants already on the board are counted once.
    #[must_use]
    pub fn from_board(players: &[PlayerId], board: &Board) -> Self {
        let mut points: FxHashMap<PlayerId, u32> = FxHashMap::default();

        for player in players {
            points.insert(player.clone(), 0);
        }

        for node in board.nodes() {
            if let Some(occupant) = node.occupant() {
                *points.entry(occupant.clone()).or_insert(0) += 1;
            }
        }

        Self { points }
    }

    /// Current count for a player.
    ///
    /// Returns 0 for an id with no tracked entry; callers must not use
    /// this to validate ids.
    #[must_use]
    pub fn points_for(&self, player: &PlayerId) -> u32 {
        self.points.get(player).copied().unwrap_or(0)
    }

    /// All score entries, highest count first, ties by player id.
    #[must_use]
    pub fn scores(&self) -> Vec<ScoreEntry> {
        let mut entries: Vec<ScoreEntry> = self
            .points
            .iter()
            .map(|(player, &points)| ScoreEntry {
                player: player.clone(),
                points,
            })
            .collect();
        entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.player.cmp(&b.player)));
        entries
    }

    /// Sum of all counts; equals the tracked board's occupied-node count.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.points.values().sum()
    }

    /// Apply a node change notification.
    ///
    /// Increments the new occupant, decrements the previous one, and
    /// returns the ids whose counts changed (0, 1, or 2). A same-value
    /// notification is a no-op glitch and changes nothing.
    pub fn on_node_changed(&mut self, change: &NodeChange) -> SmallVec<[PlayerId; 2]> {
        let mut changed = SmallVec::new();

        if !change.is_effective() {
            return changed;
        }

        if let Some(current) = &change.current {
            *self.points.entry(current.clone()).or_insert(0) += 1;
            changed.push(current.clone());
        }

        if let Some(previous) = &change.previous {
            let entry = self.points.entry(previous.clone()).or_insert(0);
            *entry = entry.saturating_sub(1);
            changed.push(previous.clone());
        }

        changed
    }
}
