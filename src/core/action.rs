//! Action representation.
//!
//! An `Action` is one fully resolved command: the verb plus the positions
//! it touches. `ActionKind` is the bare verb, used where only the type of
//! action matters (phase checks, error reports).

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::entity::PositionId;
use super::phase::Phase;

/// The four verbs of the game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ActionKind {
    /// Place a token from hand.
    Set,
    /// Slide a token to an adjacent empty position.
    Move,
    /// Relocate a token to any empty position.
    Jump,
    /// Take an opponent token off the board.
    Remove,
}

impl ActionKind {
    /// The action a phase calls for.
    #[must_use]
    pub const fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Set => ActionKind::Set,
            Phase::Move => ActionKind::Move,
            Phase::Jump => ActionKind::Jump,
            Phase::Remove => ActionKind::Remove,
        }
    }
}

/// A complete, resolved action.
///
/// ```
/// use morris_rules::core::{Action, ActionKind, PositionId};
///
/// let step = Action::Move { from: PositionId::new(1), to: PositionId::new(9) };
/// assert_eq!(step.kind(), ActionKind::Move);
/// assert_eq!(step.target(), PositionId::new(9));
/// ```
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a token on an empty position.
    #[display("set {_0}")]
    Set(PositionId),
    /// Slide a token between adjacent positions.
    #[display("move {from} -> {to}")]
    Move { from: PositionId, to: PositionId },
    /// Relocate a token anywhere.
    #[display("jump {from} -> {to}")]
    Jump { from: PositionId, to: PositionId },
    /// Remove an opponent token.
    #[display("remove {_0}")]
    Remove(PositionId),
}

impl Action {
    /// The verb of this action.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Set(_) => ActionKind::Set,
            Action::Move { .. } => ActionKind::Move,
            Action::Jump { .. } => ActionKind::Jump,
            Action::Remove(_) => ActionKind::Remove,
        }
    }

    /// The position this action leaves changed last: the placed, moved-to,
    /// or removed position. Mill detection runs against it.
    #[must_use]
    pub const fn target(&self) -> PositionId {
        match *self {
            Action::Set(p) | Action::Remove(p) => p,
            Action::Move { to, .. } | Action::Jump { to, .. } => to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind() {
        let p = PositionId::new(3);
        let q = PositionId::new(4);

        assert_eq!(Action::Set(p).kind(), ActionKind::Set);
        assert_eq!(Action::Move { from: p, to: q }.kind(), ActionKind::Move);
        assert_eq!(Action::Jump { from: p, to: q }.kind(), ActionKind::Jump);
        assert_eq!(Action::Remove(p).kind(), ActionKind::Remove);
    }

    #[test]
    fn test_action_target() {
        let p = PositionId::new(3);
        let q = PositionId::new(4);

        assert_eq!(Action::Set(p).target(), p);
        assert_eq!(Action::Jump { from: p, to: q }.target(), q);
        assert_eq!(Action::Remove(q).target(), q);
    }

    #[test]
    fn test_kind_for_phase() {
        assert_eq!(ActionKind::for_phase(Phase::Set), ActionKind::Set);
        assert_eq!(ActionKind::for_phase(Phase::Move), ActionKind::Move);
        assert_eq!(ActionKind::for_phase(Phase::Jump), ActionKind::Jump);
        assert_eq!(ActionKind::for_phase(Phase::Remove), ActionKind::Remove);
    }

    #[test]
    fn test_action_display() {
        let action = Action::Move {
            from: PositionId::new(1),
            to: PositionId::new(9),
        };
        assert_eq!(format!("{}", action), "move #1 -> #9");
        assert_eq!(format!("{}", Action::Set(PositionId::new(0))), "set #0");
    }
}
