//! # morris-rules
//!
//! Rules engine for Nine Men's Morris.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No rendering, no input mapping, no timers. A host
//!    resolves clicks to positions and calls into a `GameSession`.
//!
//! 2. **Seat-Agnostic**: Interactive and autonomous seats share one
//!    `Strategy` contract, so the state machine never asks who is playing.
//!
//! 3. **Deterministic**: Position numbering is fixed by the topology
//!    builder and computer seats draw from a seeded ChaCha8 stream, so any
//!    game can be replayed.
//!
//! ## Modules
//!
//! - `core`: Colors, players, phases, actions, errors, RNG, configuration
//! - `board`: The 24-position graph, selection and mill detection
//! - `rules`: Set/Move/Jump/Remove commands and legal-move generation
//! - `players`: Interactive and autonomous strategies
//! - `session`: The turn state machine, status messages, observers, layouts

pub mod board;
pub mod core;
pub mod players;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, Color, ColorMap, GameConfig, GameRng, Phase, Player, PlayerKind,
    PositionId, RuleError, TripleId,
};

pub use crate::board::{Board, Position, Triple};

pub use crate::players::{Autonomous, Interactive, Strategy};

pub use crate::rules::CommandContext;

pub use crate::session::{
    ActionOutcome, ActionStatus, ActorChoice, GameSession, Layout, ObserverId, StatusMessage,
};
