//! Turn rotation over a fixed player order.
//!
//! The rotation owns its index explicitly; there is no ambient "whose
//! turn is it" state anywhere else. `advance` is the only operation
//! that moves the index, and it consults the rules so that players
//! without a legal move are skipped (and reported) rather than left
//! stuck in turn.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, PlayerId, Result};
use crate::rules::Rules;

/// Tracks which player is in turn over a fixed, externally supplied
/// order.
///
/// The state is either "no player in turn" (before `set_first_player`,
/// or after the game ends) or an index into the order. The order never
/// changes and is never re-sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRotation {
    players: Vec<PlayerId>,
    current: Option<usize>,
}

impl TurnRotation {
    /// Create a rotation over the given player order with no player in
    /// turn.
    #[must_use]
    pub fn new(players: Vec<PlayerId>) -> Self {
        Self {
            players,
            current: None,
        }
    }

    /// The fixed player order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Put the given player in turn.
    ///
    /// Fails with `PlayerNotFound` (leaving the state untouched) if
    /// the id is not in the order.
    pub fn set_first_player(&mut self, player: &PlayerId) -> Result<()> {
        let index = self
            .players
            .iter()
            .position(|p| p == player)
            .ok_or_else(|| GameError::PlayerNotFound(player.clone()))?;
        self.current = Some(index);
        Ok(())
    }

    /// The player currently in turn, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.current.map(|i| &self.players[i])
    }

    /// The full order rotated so the player in turn comes first.
    ///
    /// Empty when no player is in turn.
    #[must_use]
    pub fn players_from_current(&self) -> Vec<PlayerId> {
        match self.current {
            None => Vec::new(),
            Some(index) => {
                let mut rotated = Vec::with_capacity(self.players.len());
                rotated.extend_from_slice(&self.players[index..]);
                rotated.extend_from_slice(&self.players[..index]);
                rotated
            }
        }
    }

    /// Advance to the next player able to move.
    ///
    /// Scans circularly from the slot after the current player; the
    /// first player with a legal move becomes current, and every
    /// player visited before that is returned, in visit order, as
    /// skipped. If no other player can move and the current player
    /// cannot move either, the rotation clears to no-player-in-turn —
    /// it never leaves a stale current player once the game is over.
    ///
    /// Fails with `IllegalState` when no player is in turn.
    pub fn advance(&mut self, rules: &dyn Rules) -> Result<Vec<PlayerId>> {
        let current = self
            .current
            .ok_or(GameError::IllegalState("no player is in turn"))?;

        let count = self.players.len();
        let mut skipped = Vec::new();

        let mut index = (current + 1) % count;
        while index != current {
            let candidate = &self.players[index];
            if rules.can_move(candidate) {
                self.current = Some(index);
                return Ok(skipped);
            }
            skipped.push(candidate.clone());
            index = (index + 1) % count;
        }

        if !rules.can_move(&self.players[current]) {
            debug!("no player can move, clearing turn state");
            self.current = None;
        }

        Ok(skipped)
    }
}
