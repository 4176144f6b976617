//! Board representation: nodes, lookups, occupancy mutation.
//!
//! ## Key Types
//!
//! - `Position`: immutable 2D coordinate, lexicographically ordered
//! - `NodeId`: identifier derived bijectively from the coordinate
//! - `Node`: a cell with its current occupant
//! - `NodeChange`: change notification emitted by `Board::occupy`
//! - `Board`: the fixed node collection
//!
//! Board shapes are produced by the `factory` submodule; the shape
//! never changes after construction.

pub mod board;
pub mod factory;
pub mod node;

pub use board::Board;
pub use node::{Node, NodeChange, NodeId, Position};
