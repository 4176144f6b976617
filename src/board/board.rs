//! The board: a fixed collection of uniquely-positioned nodes.
//!
//! The node set is decided once, at construction, by a board factory;
//! no nodes are added or removed afterwards. The only mutation is
//! `occupy`, which sets a node's occupant and returns the change
//! notification that the rules engine routes to the score tracker.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::node::{Node, NodeChange, NodeId, Position};
use crate::core::{GameError, PlayerId, Result};

/// A fixed set of nodes addressed by coordinate or derived id.
///
/// Iteration via [`Board::nodes`] is deterministic: lexicographic by
/// (x, then y).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    nodes: FxHashMap<NodeId, Node>,
    /// Ids sorted by position, fixed at construction.
    ordered: Vec<NodeId>,
}

impl Board {
    /// Create a board from its full node set.
    ///
    /// Panics if two nodes share a coordinate; factories are expected
    /// to produce well-formed shapes.
    #[must_use]
    pub fn new(node_list: Vec<Node>) -> Self {
        let mut nodes = FxHashMap::default();
        let mut ordered = Vec::with_capacity(node_list.len());

        for node in node_list {
            let id = node.id();
            ordered.push(id);
            if nodes.insert(id, node).is_some() {
                panic!("duplicate node at {}", id.position());
            }
        }

        ordered.sort_unstable_by_key(|id| id.position());

        Self { nodes, ordered }
    }

    /// The number of nodes on the board.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of currently occupied nodes.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_occupied()).count()
    }

    /// Look up a node by coordinate.
    pub fn node_at(&self, position: Position) -> Result<&Node> {
        self.node(NodeId::from_position(position))
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(GameError::NodeNotFound(id))
    }

    /// Whether the board has a node at the given coordinate.
    #[must_use]
    pub fn has_position(&self, position: Position) -> bool {
        self.nodes.contains_key(&NodeId::from_position(position))
    }

    /// Whether the board has a node with the given id.
    #[must_use]
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All nodes in lexicographic position order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.ordered.iter().map(|id| &self.nodes[id])
    }

    /// Set the occupant of a node.
    ///
    /// Returns the change notification carrying the previous occupant.
    /// A same-value call still produces (and returns) a notification;
    /// the score tracker is responsible for no-op handling.
    pub fn occupy(&mut self, id: NodeId, occupant: Option<PlayerId>) -> Result<NodeChange> {
        let node = self.nodes.get_mut(&id).ok_or(GameError::NodeNotFound(id))?;

        let previous = node.occupant().cloned();
        node.set_occupant(occupant.clone());

        Ok(NodeChange {
            id,
            previous,
            current: occupant,
        })
    }
}
