//! Board cells: positions, derived node ids, occupancy.
//!
//! ## ID Layout
//!
//! A `NodeId` is the node's coordinate bit-packed into a `u32`: the x
//! coordinate in the high 16 bits, y in the low 16, both two's
//! complement. The packing is a total injective function of `(x, y)`
//! and decodes back via `NodeId::position`, so id and coordinate
//! determine each other uniquely.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Immutable 2D integer coordinate of a node.
///
/// The derived `Ord` is lexicographic (x, then y), which is the
/// deterministic iteration order the board exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    /// Create a position from coordinates.
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The position one step away in the given direction.
    ///
    /// Saturates at the i16 boundary, so a step there returns the same
    /// position; walkers treat that as leaving the board.
    #[must_use]
    pub fn step(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unique identifier of a node, derived from its coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Derive the id for a coordinate.
    #[must_use]
    pub const fn from_position(position: Position) -> Self {
        Self(((position.x as u16 as u32) << 16) | (position.y as u16 as u32))
    }

    /// Decode the coordinate this id was derived from.
    #[must_use]
    pub const fn position(self) -> Position {
        Position {
            x: (self.0 >> 16) as u16 as i16,
            y: self.0 as u16 as i16,
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<Position> for NodeId {
    fn from(position: Position) -> Self {
        Self::from_position(position)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.position())
    }
}

/// A board cell: coordinate plus current occupant.
///
/// Nodes are plain values. History snapshots copy them, so later board
/// mutation cannot alias into stored history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    position: Position,
    occupant: Option<PlayerId>,
}

impl Node {
    /// Create an empty node at the given coordinate.
    #[must_use]
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            occupant: None,
        }
    }

    /// Create a node occupied by the given player.
    #[must_use]
    pub fn occupied(position: Position, player: PlayerId) -> Self {
        Self {
            position,
            occupant: Some(player),
        }
    }

    /// The node's id, derived from its coordinate.
    #[must_use]
    pub fn id(&self) -> NodeId {
        NodeId::from_position(self.position)
    }

    /// The node's coordinate.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The occupying player, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<&PlayerId> {
        self.occupant.as_ref()
    }

    /// Whether any player occupies this node.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Whether the given player occupies this node.
    #[must_use]
    pub fn is_occupied_by(&self, player: &PlayerId) -> bool {
        self.occupant.as_ref() == Some(player)
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<PlayerId>) {
        self.occupant = occupant;
    }
}

/// Change notification emitted by `Board::occupy`.
///
/// Carries the previous occupant so the score tracker can update
/// incrementally without rescanning the board. The board does not
/// suppress same-value notifications; consumers must treat
/// `previous == current` as a no-op.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeChange {
    /// The node whose occupant was set.
    pub id: NodeId,
    /// Occupant before the call.
    pub previous: Option<PlayerId>,
    /// Occupant after the call.
    pub current: Option<PlayerId>,
}

impl NodeChange {
    /// Whether the occupant actually changed.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.previous != self.current
    }
}
