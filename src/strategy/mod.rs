//! Move-selection policies for computer players.
//!
//! Policies are trait-based and consume only the `Rules` query
//! surface; they never mutate the board. Dispatch is static strategy
//! injection per player (installed via the game builder), not a class
//! hierarchy.

use crate::board::NodeId;
use crate::core::{GameRng, PlayerId};
use crate::rules::Rules;

/// Policy for choosing a move among the legal ones.
pub trait MoveStrategy {
    /// Human-readable policy name (for display and logs).
    fn name(&self) -> &str;

    /// Choose a node to move to, or `None` when the player has no
    /// legal move.
    fn choose(&mut self, player: &PlayerId, rules: &dyn Rules) -> Option<NodeId>;
}

// =============================================================================
// Greedy: most captures
// =============================================================================

/// Picks the move that captures the most nodes.
///
/// Ties go to the first candidate in board order.
#[derive(Clone, Debug, Default)]
pub struct Greedy;

impl MoveStrategy for Greedy {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose(&mut self, player: &PlayerId, rules: &dyn Rules) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        let mut best_captures = 0;

        for node in rules.legal_moves(player) {
            let captures = rules.capture_count(player, node).unwrap_or(0);
            if captures > best_captures {
                best_captures = captures;
                best = Some(node);
            }
        }

        best
    }
}

// =============================================================================
// Lowest: fewest captures
// =============================================================================

/// Picks the move that captures the fewest nodes.
///
/// Ties go to the first candidate in board order.
#[derive(Clone, Debug, Default)]
pub struct Lowest;

impl MoveStrategy for Lowest {
    fn name(&self) -> &str {
        "Lowest"
    }

    fn choose(&mut self, player: &PlayerId, rules: &dyn Rules) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        let mut best_captures = usize::MAX;

        for node in rules.legal_moves(player) {
            let captures = rules.capture_count(player, node).unwrap_or(0);
            if captures < best_captures {
                best_captures = captures;
                best = Some(node);
            }
        }

        best
    }
}

// =============================================================================
// RandomChoice: uniform among legal moves
// =============================================================================

/// Picks uniformly at random among the legal moves.
///
/// Draws from a seeded `GameRng`, so games replay identically from the
/// same seed.
#[derive(Clone, Debug)]
pub struct RandomChoice {
    rng: GameRng,
}

impl RandomChoice {
    /// Create a random policy with its own RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveStrategy for RandomChoice {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose(&mut self, player: &PlayerId, rules: &dyn Rules) -> Option<NodeId> {
        let moves = rules.legal_moves(player);
        self.rng.choose(&moves).copied()
    }
}

// =============================================================================
// TopLeft: smallest coordinate
// =============================================================================

/// Picks the legal move with the lexicographically smallest position.
#[derive(Clone, Debug, Default)]
pub struct TopLeft;

impl MoveStrategy for TopLeft {
    fn name(&self) -> &str {
        "TopLeft"
    }

    fn choose(&mut self, player: &PlayerId, rules: &dyn Rules) -> Option<NodeId> {
        rules
            .legal_moves(player)
            .into_iter()
            .min_by_key(|node| node.position())
    }
}
