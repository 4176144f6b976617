//! Board factories: square shapes and the classic start position.
//!
//! Factories decide the board shape once; the engine never changes it
//! afterwards. The classic layout pre-occupies the four central nodes
//! in the alternating pattern the game rules require, two per player.

use super::board::Board;
use super::node::{Node, Position};
use crate::core::PlayerId;

/// Side length of the classic board.
pub const CLASSIC_WIDTH: i16 = 8;

/// Create an empty square board of the given side length.
///
/// Panics if `width` is not positive.
#[must_use]
pub fn square(width: i16) -> Board {
    assert!(width > 0, "Board width must be positive");

    let mut nodes = Vec::with_capacity((width as usize) * (width as usize));
    for x in 0..width {
        for y in 0..width {
            nodes.push(Node::empty(Position::new(x, y)));
        }
    }
    Board::new(nodes)
}

/// Create a square board with the four central nodes pre-occupied.
///
/// `first` receives the lower-left/upper-right pair, `second` the other
/// diagonal, so on the classic board `first` occupies (3, 4) and (4, 3)
/// while `second` occupies (3, 3) and (4, 4).
///
/// Panics unless `width` is even and at least 4.
#[must_use]
pub fn square_with_start(width: i16, first: &PlayerId, second: &PlayerId) -> Board {
    assert!(width >= 4, "Starting positions need a width of at least 4");
    assert!(width % 2 == 0, "Starting positions need an even width");

    let mid = width / 2 - 1;
    let mut nodes = Vec::with_capacity((width as usize) * (width as usize));

    for x in 0..width {
        for y in 0..width {
            let position = Position::new(x, y);
            let node = if position == Position::new(mid, mid)
                || position == Position::new(mid + 1, mid + 1)
            {
                Node::occupied(position, second.clone())
            } else if position == Position::new(mid, mid + 1)
                || position == Position::new(mid + 1, mid)
            {
                Node::occupied(position, first.clone())
            } else {
                Node::empty(position)
            };
            nodes.push(node);
        }
    }

    Board::new(nodes)
}

/// The classic 8×8 board with the standard opening position.
#[must_use]
pub fn classic(first: &PlayerId, second: &PlayerId) -> Board {
    square_with_start(CLASSIC_WIDTH, first, second)
}
