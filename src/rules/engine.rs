//! The committing rules engine.
//!
//! `MoveEngine` owns the board, the move history, and the score board,
//! and is the only place that mutates any of them. Every occupancy
//! write — committing a move or replaying an undo — goes through one
//! internal apply path that forwards the board's change notification
//! to the score tracker, which is what keeps the score-sum invariant
//! intact at every observable point.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::capture;
use super::Rules;
use crate::board::{Board, NodeId};
use crate::core::{GameError, PlayerId, Result};
use crate::history::{MoveHistory, MoveRecord, NodeSnapshot};
use crate::score::ScoreBoard;

/// Result of a committed move or an undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Nodes whose occupant was written, in write order. For a commit
    /// this is the destination first, then the captured nodes.
    pub touched: Vec<NodeId>,
    /// Players whose scores changed, in first-change order, deduplicated.
    pub scores_changed: Vec<PlayerId>,
}

/// Board mutation engine: validates, commits, and undoes moves.
///
/// One engine belongs to exactly one game and is driven synchronously
/// by its controller; it provides no internal locking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveEngine {
    board: Board,
    history: MoveHistory,
    score: ScoreBoard,
}

impl MoveEngine {
    /// Create an engine over a freshly built board.
    ///
    /// The score board is seeded from the board's initial occupancy,
    /// with an entry for every id in `players`.
    #[must_use]
    pub fn new(board: Board, players: &[PlayerId]) -> Self {
        let score = ScoreBoard::from_board(players, &board);
        Self {
            board,
            history: MoveHistory::new(),
            score,
        }
    }

    /// The board being played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The score tracker.
    #[must_use]
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Number of moves committed and not yet undone.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Commit a move: occupy `node` for `player` and flip every
    /// captured node.
    ///
    /// Validates first: an unknown node is `NodeNotFound`; an occupied
    /// destination or a captureless move is `IllegalMove`. On success
    /// the pre-move state of every touched node is recorded for undo,
    /// then the writes are applied destination first.
    pub fn commit(&mut self, player: &PlayerId, node: NodeId) -> Result<MoveOutcome> {
        let destination = self.board.node(node)?;

        let captured = capture::captured_by_move(&self.board, player, node);
        if destination.is_occupied() || captured.is_empty() {
            return Err(GameError::IllegalMove {
                player: player.clone(),
                node,
            });
        }

        // Snapshot before any mutation, destination first.
        let mut snapshots: SmallVec<[NodeSnapshot; 8]> = SmallVec::new();
        snapshots.push(NodeSnapshot {
            id: node,
            occupant: destination.occupant().cloned(),
        });
        for &id in &captured {
            snapshots.push(NodeSnapshot {
                id,
                occupant: self.board.node(id)?.occupant().cloned(),
            });
        }
        self.history.record(MoveRecord::new(snapshots));

        let mut touched = Vec::with_capacity(captured.len() + 1);
        touched.push(node);
        touched.extend(captured);

        let mut scores_changed = Vec::new();
        for &id in &touched {
            let changed = self.apply(id, Some(player.clone()))?;
            merge_changed(&mut scores_changed, changed);
        }

        debug!(player = %player, node = %node, flipped = touched.len() - 1, "move committed");

        Ok(MoveOutcome {
            touched,
            scores_changed,
        })
    }

    /// Undo the most recent move, if any.
    ///
    /// Restores each touched node's previous occupant in reverse of
    /// recording order, through the same notification path as a
    /// commit, so scores track the restored board. An empty history is
    /// a no-op, never an error.
    pub fn undo(&mut self) -> Option<MoveOutcome> {
        let record = self.history.pop()?;

        let mut touched = Vec::with_capacity(record.snapshots().len());
        let mut scores_changed = Vec::new();

        for snapshot in record.snapshots().iter().rev() {
            let changed = self
                .apply(snapshot.id, snapshot.occupant.clone())
                .expect("history only references nodes on the board");
            merge_changed(&mut scores_changed, changed);
            touched.push(snapshot.id);
        }

        debug!(restored = touched.len(), "move undone");

        Some(MoveOutcome {
            touched,
            scores_changed,
        })
    }

    /// Single write path: occupy the node and route the change
    /// notification to the score tracker.
    fn apply(&mut self, id: NodeId, occupant: Option<PlayerId>) -> Result<SmallVec<[PlayerId; 2]>> {
        let change = self.board.occupy(id, occupant)?;
        Ok(self.score.on_node_changed(&change))
    }
}

fn merge_changed(into: &mut Vec<PlayerId>, changed: SmallVec<[PlayerId; 2]>) {
    for player in changed {
        if !into.contains(&player) {
            into.push(player);
        }
    }
}

impl Rules for MoveEngine {
    fn legal_moves(&self, player: &PlayerId) -> Vec<NodeId> {
        capture::legal_moves(&self.board, player)
    }

    fn would_capture(&self, player: &PlayerId, node: NodeId) -> Result<Vec<NodeId>> {
        self.board.node(node)?;
        Ok(capture::captured_by_move(&self.board, player, node))
    }

    fn is_legal(&self, player: &PlayerId, node: NodeId) -> bool {
        capture::is_legal(&self.board, player, node)
    }
}
