//! Rule errors.
//!
//! Every user-facing failure is recoverable: the action is refused and the
//! board is left as it was. `EmptyCandidateSet` is the exception; it means
//! an autonomous seat was asked to act with nothing legal to do, which the
//! turn state machine never allows.

use derive_more::Display;

use super::action::ActionKind;
use super::entity::PositionId;
use super::phase::Phase;
use super::player::Color;

/// Why an action was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RuleError {
    /// The position cannot be used for this action.
    #[display("Illegal target {position}: {reason}")]
    IllegalTarget {
        position: PositionId,
        reason: &'static str,
    },

    /// Set attempted with no tokens left in hand.
    #[display("{color} has no tokens left to set")]
    NoTokensRemaining { color: Color },

    /// The action does not belong to the current phase.
    #[display("Cannot {action} during the {phase} phase")]
    WrongPhaseAction { phase: Phase, action: ActionKind },

    /// An autonomous seat found no legal choice.
    #[display("No legal candidates for {action}")]
    EmptyCandidateSet { action: ActionKind },

    /// The game already has a winner.
    #[display("Game is already over: {winner} won")]
    GameOver { winner: Color },

    /// The choice does not match the kind of seat that is to act.
    #[display("Choice does not match the seat of {color}")]
    UnexpectedChoice { color: Color },

    /// A fixed layout broke a board or counter invariant.
    #[display("Invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

impl RuleError {
    pub(crate) const fn illegal(position: PositionId, reason: &'static str) -> Self {
        RuleError::IllegalTarget { position, reason }
    }

    /// Check whether this error reports a broken engine invariant rather
    /// than a refused user action.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, RuleError::EmptyCandidateSet { .. })
    }
}

impl std::error::Error for RuleError {}
