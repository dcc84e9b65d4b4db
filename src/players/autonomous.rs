//! Computer seat: uniform random choice among legal candidates.

use tracing::debug;

use super::{run, Strategy};
use crate::core::{Action, ActionKind, GameRng, PositionId, RuleError};
use crate::rules::{legal, CommandContext};

/// Samples every choice uniformly from the legal-move generator.
///
/// Move and Jump pick a source among the movable tokens first, then a
/// destination among that source's targets.
#[derive(Clone, Debug)]
pub struct Autonomous {
    rng: GameRng,
    last_touched: Option<PositionId>,
}

impl Autonomous {
    /// Create an autonomous seat drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            last_touched: None,
        }
    }

    fn pick(
        &mut self,
        candidates: &[PositionId],
        action: ActionKind,
    ) -> Result<PositionId, RuleError> {
        let chosen = self
            .rng
            .choose(candidates)
            .copied()
            .ok_or(RuleError::EmptyCandidateSet { action })?;
        debug!(%action, candidates = candidates.len(), %chosen, "Sampled candidate");
        Ok(chosen)
    }

    fn reject_target(
        &mut self,
        ctx: &CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<(), RuleError> {
        if target.is_some() {
            self.last_touched = None;
            return Err(RuleError::UnexpectedChoice { color: ctx.actor });
        }
        Ok(())
    }
}

impl Strategy for Autonomous {
    fn set(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        self.reject_target(ctx, target)?;
        let position = self.pick(&legal::for_set(ctx.board), ActionKind::Set)?;
        run(ctx, Action::Set(position), &mut self.last_touched)
    }

    fn move_token(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        self.reject_target(ctx, target)?;
        let from = self.pick(&legal::for_move(ctx.board, ctx.actor, None), ActionKind::Move)?;
        let to = self.pick(
            &legal::for_move(ctx.board, ctx.actor, Some(from)),
            ActionKind::Move,
        )?;
        run(ctx, Action::Move { from, to }, &mut self.last_touched)
    }

    fn jump(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        self.reject_target(ctx, target)?;
        let from = self.pick(&legal::for_jump(ctx.board, ctx.actor, None), ActionKind::Jump)?;
        let to = self.pick(
            &legal::for_jump(ctx.board, ctx.actor, Some(from)),
            ActionKind::Jump,
        )?;
        run(ctx, Action::Jump { from, to }, &mut self.last_touched)
    }

    fn remove(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        self.reject_target(ctx, target)?;
        let position = self.pick(&legal::for_remove(ctx.board, ctx.actor), ActionKind::Remove)?;
        run(ctx, Action::Remove(position), &mut self.last_touched)
    }

    fn is_autonomous(&self) -> bool {
        true
    }

    fn last_touched(&self) -> Option<PositionId> {
        self.last_touched
    }
}
