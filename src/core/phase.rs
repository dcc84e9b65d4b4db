//! Turn phases.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Phase of the game, held by the session.
///
/// There is no `End` phase: the end of the game is reported through the
/// session's winner.
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Phase {
    /// Players place their tokens.
    #[default]
    Set,
    /// Tokens slide along board lines.
    Move,
    /// The player to act has exactly three tokens and may jump.
    Jump,
    /// A mill was just formed; an opponent token must go.
    Remove,
}

impl Phase {
    /// Check whether this phase relocates tokens already on the board.
    #[must_use]
    pub const fn is_movement(self) -> bool {
        matches!(self, Phase::Move | Phase::Jump)
    }
}
