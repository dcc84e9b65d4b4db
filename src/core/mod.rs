//! Core engine types: colors, players, phases, actions, errors, RNG,
//! configuration.
//!
//! Everything here is independent of the board graph and of the turn
//! state machine.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;

pub use action::{Action, ActionKind};
pub use config::{
    GameConfig, PlayerKind, JUMP_THRESHOLD, POSITION_COUNT, TOKENS_PER_PLAYER, TRIPLE_COUNT,
};
pub use entity::{PositionId, TripleId};
pub use error::RuleError;
pub use phase::Phase;
pub use player::{Color, ColorMap, Player};
pub use rng::GameRng;
