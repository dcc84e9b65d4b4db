//! The command layer: Set, Move, Jump and Remove.
//!
//! Each command validates everything first and mutates only when every
//! precondition holds, so a refused command leaves board and counters
//! untouched.

use tracing::debug;

use crate::board::Board;
use crate::core::{Action, Color, ColorMap, Player, PositionId, RuleError, JUMP_THRESHOLD};

/// Mutable view of the state a command acts on.
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// The board.
    pub board: &'a mut Board,
    /// Both players' counters.
    pub players: &'a mut ColorMap<Player>,
    /// Color of the acting player.
    pub actor: Color,
}

impl<'a> CommandContext<'a> {
    /// Bundle the state a command needs.
    pub fn new(board: &'a mut Board, players: &'a mut ColorMap<Player>, actor: Color) -> Self {
        Self {
            board,
            players,
            actor,
        }
    }

    /// Apply a resolved action.
    pub fn execute(&mut self, action: Action) -> Result<(), RuleError> {
        let result = match action {
            Action::Set(position) => self.set(position),
            Action::Move { from, to } => self.move_token(from, to),
            Action::Jump { from, to } => self.jump(from, to),
            Action::Remove(position) => self.remove(position),
        };

        match &result {
            Ok(()) => debug!(actor = %self.actor, %action, "Command applied"),
            Err(err) => debug!(actor = %self.actor, %action, %err, "Command refused"),
        }
        result
    }

    /// Place a token from hand on an empty position.
    pub fn set(&mut self, position: PositionId) -> Result<(), RuleError> {
        let player = &self.players[self.actor];
        if player.tokens_to_set() == 0 {
            return Err(RuleError::NoTokensRemaining { color: self.actor });
        }
        self.require_empty(position)?;

        self.board.set_occupant(position, Some(self.actor));
        self.players[self.actor].record_set();
        Ok(())
    }

    /// Slide a token along a line to an adjacent empty position.
    pub fn move_token(&mut self, from: PositionId, to: PositionId) -> Result<(), RuleError> {
        self.require_own(from)?;
        self.require_empty(to)?;
        if !self.board.are_adjacent(from, to) {
            return Err(RuleError::illegal(to, "destination is not adjacent"));
        }

        self.relocate(from, to);
        Ok(())
    }

    /// Relocate a token to any empty position. Needs exactly
    /// `JUMP_THRESHOLD` tokens on board.
    pub fn jump(&mut self, from: PositionId, to: PositionId) -> Result<(), RuleError> {
        self.require_own(from)?;
        self.require_empty(to)?;
        if self.players[self.actor].tokens_on_board() != JUMP_THRESHOLD {
            return Err(RuleError::illegal(from, "jumping needs exactly three tokens on board"));
        }

        self.relocate(from, to);
        Ok(())
    }

    /// Take an unprotected opponent token off the board.
    pub fn remove(&mut self, position: PositionId) -> Result<(), RuleError> {
        let opponent = self.actor.opponent();
        match self.board.position(position).map(|p| p.occupant()) {
            None => return Err(RuleError::illegal(position, "no such position")),
            Some(None) => return Err(RuleError::illegal(position, "position is empty")),
            Some(Some(owner)) if owner != opponent => {
                return Err(RuleError::illegal(position, "token is not the opponent's"))
            }
            Some(Some(_)) => {}
        }
        if self.board.has_mill(position, opponent) {
            return Err(RuleError::illegal(position, "token is protected by a mill"));
        }

        self.board.set_occupant(position, None);
        self.players[opponent].record_removed();
        Ok(())
    }

    fn require_empty(&self, position: PositionId) -> Result<(), RuleError> {
        match self.board.position(position) {
            None => Err(RuleError::illegal(position, "no such position")),
            Some(p) if !p.is_empty() => Err(RuleError::illegal(position, "position is occupied")),
            Some(_) => Ok(()),
        }
    }

    fn require_own(&self, position: PositionId) -> Result<(), RuleError> {
        match self.board.position(position).map(|p| p.occupant()) {
            None => Err(RuleError::illegal(position, "no such position")),
            Some(None) => Err(RuleError::illegal(position, "source is empty")),
            Some(Some(owner)) if owner != self.actor => {
                Err(RuleError::illegal(position, "source belongs to the opponent"))
            }
            Some(Some(_)) => Ok(()),
        }
    }

    fn relocate(&mut self, from: PositionId, to: PositionId) {
        self.board.set_occupant(to, Some(self.actor));
        self.board.set_occupant(from, None);
        self.board.clear_selection();
    }
}
