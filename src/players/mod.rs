//! Player strategies.
//!
//! A `Strategy` turns "it is your turn in this phase" into a concrete
//! `Action` and runs it through the command layer. Interactive seats act
//! on the position the host resolved from user input; autonomous seats
//! sample among the legal candidates.
//!
//! Every strategy reports the position its last successful action left
//! changed, so the session can run mill detection without knowing which
//! kind of seat acted.

mod autonomous;
mod interactive;

pub use autonomous::Autonomous;
pub use interactive::Interactive;

use crate::core::{Action, Phase, PlayerKind, PositionId, RuleError};
use crate::rules::CommandContext;

/// Capability set shared by every kind of seat.
///
/// `target` is the host-resolved position for interactive seats and must
/// be `None` for autonomous ones.
pub trait Strategy: std::fmt::Debug {
    /// Place a token.
    fn set(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError>;

    /// Slide a token to an adjacent empty position.
    fn move_token(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError>;

    /// Relocate a token to any empty position.
    fn jump(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError>;

    /// Remove an opponent token.
    fn remove(
        &mut self,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError>;

    /// Check whether this seat picks its own targets.
    fn is_autonomous(&self) -> bool;

    /// Position changed by the last successful action; `None` after a
    /// failure or before any action.
    fn last_touched(&self) -> Option<PositionId>;

    /// Run the action `phase` calls for.
    fn act(
        &mut self,
        phase: Phase,
        ctx: &mut CommandContext<'_>,
        target: Option<PositionId>,
    ) -> Result<Action, RuleError> {
        match phase {
            Phase::Set => self.set(ctx, target),
            Phase::Move => self.move_token(ctx, target),
            Phase::Jump => self.jump(ctx, target),
            Phase::Remove => self.remove(ctx, target),
        }
    }
}

/// Build the strategy for a seat. Autonomous seats draw from `rng`.
#[must_use]
pub fn for_kind(kind: PlayerKind, rng: crate::core::GameRng) -> Box<dyn Strategy> {
    match kind {
        PlayerKind::Interactive => Box::new(Interactive::new()),
        PlayerKind::Autonomous => Box::new(Autonomous::new(rng)),
    }
}

/// Execute `action` and record the touched position.
fn run(
    ctx: &mut CommandContext<'_>,
    action: Action,
    last_touched: &mut Option<PositionId>,
) -> Result<Action, RuleError> {
    *last_touched = None;
    ctx.execute(action)?;
    *last_touched = Some(action.target());
    Ok(action)
}
