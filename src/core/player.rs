//! Player identification and player records.
//!
//! ## PlayerId
//!
//! Opaque, caller-supplied token. The engine never inspects its
//! structure and never generates one: callers must supply ids for all
//! players before any game operation.
//!
//! ## Player
//!
//! A player record pairs an id with a display name and a kind. Computer
//! players additionally carry a move strategy (installed by the game
//! builder, see `game::GameBuilder`).

use serde::{Deserialize, Serialize};

/// Opaque player identifier.
///
/// Two players are the same iff their ids compare equal. The engine
/// treats the token as a black box.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a player id from a caller-supplied token.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of participant behind a player id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves are submitted externally via `Game::move_to`.
    Human,
    /// Moves are chosen by an installed `MoveStrategy` via `Game::move_auto`.
    Computer,
}

/// A participant in a game: id, display name, and kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    kind: PlayerKind,
}

impl Player {
    /// Create a human player.
    #[must_use]
    pub fn human(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    /// Create a computer player.
    #[must_use]
    pub fn computer(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: PlayerKind::Computer,
        }
    }

    /// The player's id.
    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's kind.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_equality() {
        assert_eq!(PlayerId::new("p1"), PlayerId::from("p1"));
        assert_ne!(PlayerId::new("p1"), PlayerId::new("p2"));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new("white")), "white");
    }

    #[test]
    fn test_player_record() {
        let p = Player::computer("p2", "Deep Flip");
        assert_eq!(p.id().as_str(), "p2");
        assert_eq!(p.name(), "Deep Flip");
        assert_eq!(p.kind(), PlayerKind::Computer);
    }

    #[test]
    fn test_player_id_serialization() {
        let id = PlayerId::new("p1");
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
