//! Status line shown to the host after every interaction.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::{Color, Phase};

/// Human-readable phase-transition message.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusMessage {
    #[display("{_0} to set.")]
    ToSet(Color),
    #[display("{_0}'s turn to move.")]
    ToMove(Color),
    #[display("{_0}'s turn to jump.")]
    ToJump(Color),
    #[display("{_0}'s turn to remove.")]
    ToRemove(Color),
    /// A mill formed but every opponent token was protected.
    #[display("All tokens are in mill, remove not available. {_0}'s turn now.")]
    RemoveSkipped(Color),
    #[display("{_0} wins!")]
    Wins(Color),
}

impl StatusMessage {
    /// The prompt for `color` to act in `phase`.
    #[must_use]
    pub const fn for_phase(phase: Phase, color: Color) -> Self {
        match phase {
            Phase::Set => StatusMessage::ToSet(color),
            Phase::Move => StatusMessage::ToMove(color),
            Phase::Jump => StatusMessage::ToJump(color),
            Phase::Remove => StatusMessage::ToRemove(color),
        }
    }
}
