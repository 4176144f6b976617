//! Core engine types: players, errors, RNG.
//!
//! This module contains the fundamental building blocks shared by every
//! other subsystem. Player ids are opaque caller-supplied tokens; the
//! engine never generates or interprets them.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerKind};
pub use rng::{GameRng, GameRngState};
