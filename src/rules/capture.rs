//! The 8-direction sandwich capture algorithm.
//!
//! Pure computations over a borrowed board; nothing here mutates state.
//! The walk in each direction accumulates opposing occupants until it
//! hits one of the moving player's own nodes (closing the sandwich),
//! an empty node, or the edge of the board. Only a closed sandwich
//! contributes captures.

use smallvec::SmallVec;

use crate::board::{Board, NodeId};
use crate::core::PlayerId;

/// The eight direction vectors, `{-1, 0, 1}² \ {(0, 0)}`.
pub(crate) const DIRECTIONS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Nodes captured along one direction from `from`, exclusive of `from`.
///
/// Empty unless the ray ends at a node occupied by `player` with only
/// opposing occupants in between.
fn captures_in_direction(
    board: &Board,
    player: &PlayerId,
    from: NodeId,
    dx: i16,
    dy: i16,
) -> SmallVec<[NodeId; 4]> {
    let mut captured = SmallVec::new();
    let mut position = from.position().step(dx, dy);

    while let Ok(node) = board.node_at(position) {
        match node.occupant() {
            None => return SmallVec::new(),
            Some(occupant) if occupant == player => return captured,
            Some(_) => captured.push(node.id()),
        }

        let next = position.step(dx, dy);
        if next == position {
            // Coordinate boundary; treat like walking off the board.
            return SmallVec::new();
        }
        position = next;
    }

    // Walked off the board without closing the sandwich.
    SmallVec::new()
}

/// All nodes a move by `player` at `node` would capture.
///
/// The destination itself is not included. Directions are disjoint
/// rays, so the union never contains duplicates. The destination's own
/// occupancy is not examined here; legality additionally requires it
/// to be empty.
pub(crate) fn captured_by_move(board: &Board, player: &PlayerId, node: NodeId) -> Vec<NodeId> {
    let mut captured = Vec::new();
    for &(dx, dy) in &DIRECTIONS {
        captured.extend(captures_in_direction(board, player, node, dx, dy));
    }
    captured
}

/// Whether `player` may move at `node`: it exists, is empty, and the
/// move captures at least one node.
pub(crate) fn is_legal(board: &Board, player: &PlayerId, node: NodeId) -> bool {
    match board.node(node) {
        Ok(n) if !n.is_occupied() => {
            DIRECTIONS
                .iter()
                .any(|&(dx, dy)| !captures_in_direction(board, player, node, dx, dy).is_empty())
        }
        _ => false,
    }
}

/// All nodes where `player` may legally move, in board order.
pub(crate) fn legal_moves(board: &Board, player: &PlayerId) -> Vec<NodeId> {
    board
        .nodes()
        .filter(|node| is_legal(board, player, node.id()))
        .map(|node| node.id())
        .collect()
}
