//! Seat driven by host-resolved positions.

use super::{run, Strategy};
use crate::core::{Action, PositionId, RuleError};
use crate::rules::CommandContext;

/// Acts on the position the host resolved from a click. Move and Jump
/// take their source from the board's selection.
#[derive(Clone, Debug, Default)]
pub struct Interactive {
    last_touched: Option<PositionId>,
}

impl Interactive {
    /// Create an interactive seat.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn require_target(
        ctx: &CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<PositionId, RuleError> {
        target.ok_or(RuleError::UnexpectedChoice { color: ctx.actor })
    }

    fn require_source(ctx: &CommandContext<'_>, to: PositionId) -> Result<PositionId, RuleError> {
        ctx.board
            .selected()
            .ok_or(RuleError::illegal(to, "no token selected"))
    }
}

impl Strategy for Interactive {
    fn set(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        let position = Self::require_target(ctx, target)?;
        run(ctx, Action::Set(position), &mut self.last_touched)
    }

    fn move_token(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        let to = Self::require_target(ctx, target)?;
        let from = Self::require_source(ctx, to)?;
        run(ctx, Action::Move { from, to }, &mut self.last_touched)
    }

    fn jump(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        let to = Self::require_target(ctx, target)?;
        let from = Self::require_source(ctx, to)?;
        run(ctx, Action::Jump { from, to }, &mut self.last_touched)
    }

    fn remove(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        let position = Self::require_target(ctx, target)?;
        run(ctx, Action::Remove(position), &mut self.last_touched)
    }

    fn is_autonomous(&self) -> bool {
        false
    }

    fn last_touched(&self) -> Option<PositionId> {
        self.last_touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{Color, ColorMap, Phase, Player, PlayerKind};

    fn p(i: u8) -> PositionId {
        PositionId::new(i)
    }

    fn setup() -> (Board, ColorMap<Player>) {
        let players = ColorMap::new(|c| Player::new(c, PlayerKind::Interactive));
        (Board::new(), players)
    }

    #[test]
    fn test_set_records_touched() {
        let (mut board, mut players) = setup();
        let mut seat = Interactive::new();
        let mut ctx = CommandContext::new(&mut board, &mut players, Color::White);

        let action = seat.set(&mut ctx, Some(p(4))).unwrap();

        assert_eq!(action, Action::Set(p(4)));
        assert_eq!(seat.last_touched(), Some(p(4)));
        assert!(!seat.is_autonomous());
    }

    #[test]
    fn test_failure_clears_touched() {
        let (mut board, mut players) = setup();
        let mut seat = Interactive::new();
        let mut ctx = CommandContext::new(&mut board, &mut players, Color::White);

        seat.set(&mut ctx, Some(p(4))).unwrap();
        assert!(seat.set(&mut ctx, Some(p(4))).is_err());
        assert_eq!(seat.last_touched(), None);
    }

    #[test]
    fn test_missing_target() {
        let (mut board, mut players) = setup();
        let mut seat = Interactive::new();
        let mut ctx = CommandContext::new(&mut board, &mut players, Color::Black);

        let err = seat.act(Phase::Set, &mut ctx, None).unwrap_err();
        assert_eq!(err, RuleError::UnexpectedChoice { color: Color::Black });
    }

    #[test]
    fn test_move_uses_selection() {
        let (mut board, mut players) = setup();
        let mut seat = Interactive::new();

        let mut ctx = CommandContext::new(&mut board, &mut players, Color::White);
        seat.set(&mut ctx, Some(p(9))).unwrap();

        // Without a selection there is no source
        assert!(seat.move_token(&mut ctx, Some(p(10))).is_err());

        ctx.board.select(p(9));
        let action = seat.act(Phase::Move, &mut ctx, Some(p(10))).unwrap();

        assert_eq!(action, Action::Move { from: p(9), to: p(10) });
        assert_eq!(seat.last_touched(), Some(p(10)));
        assert_eq!(board.selected(), None);
    }
}
