//! Move history for stack-ordered undo.
//!
//! Every committed move pushes one `MoveRecord`: the occupancy of each
//! touched node *as it was immediately before* the move, destination
//! first, in the order the move touched them. Snapshots are plain
//! values copied out of the board, so later mutation cannot reach back
//! into stored history.
//!
//! The history itself only stores and pops records; applying a popped
//! record back onto the board is the rules engine's job, so that the
//! restoring writes flow through the same occupy/notification path as
//! ordinary moves.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::NodeId;
use crate::core::PlayerId;

/// Occupancy of one node at recording time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub occupant: Option<PlayerId>,
}

/// All nodes touched by one committed move, pre-move state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    snapshots: SmallVec<[NodeSnapshot; 8]>,
}

impl MoveRecord {
    /// Create a record from pre-move snapshots, destination first.
    ///
    /// A move always touches at least the destination node.
    #[must_use]
    pub fn new(snapshots: SmallVec<[NodeSnapshot; 8]>) -> Self {
        debug_assert!(!snapshots.is_empty(), "a move touches at least one node");
        Self { snapshots }
    }

    /// Snapshots in recording order (destination first).
    #[must_use]
    pub fn snapshots(&self) -> &[NodeSnapshot] {
        &self.snapshots
    }

    /// Ids of the touched nodes in recording order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.snapshots.iter().map(|s| s.id)
    }
}

/// LIFO store of move records; depth is unbounded and there is no redo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vector<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a committed move's record.
    pub fn record(&mut self, record: MoveRecord) {
        self.records.push_back(record);
    }

    /// Pop the most recent record, if any.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no moves are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
