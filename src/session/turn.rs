//! The turn state machine.
//!
//! `GameSession` owns the board, both players and their strategies. Each
//! host interaction goes through [`GameSession::apply_action`], which
//! resolves the command for the current phase, runs it, checks for a mill
//! at the touched position and moves the phase along.
//!
//! ## Phase flow
//!
//! ```text
//! Set ──(both hands empty)──> Move ──(3 tokens)──> Jump
//!  │                           │                    │
//!  └────────(mill)──> Remove ──┴──(token removed)───┘  back to the saved phase
//! ```
//!
//! After every completed turn the phase is re-derived from the counters,
//! so Move and Jump are per player: a player with three tokens jumps while
//! the opponent still slides.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, error, info, instrument, warn};

use super::layout::Layout;
use super::message::StatusMessage;
use super::observer::{ObserverId, Observers};
use crate::board::Board;
use crate::core::{
    Action, ActionKind, Color, ColorMap, GameConfig, GameRng, Phase, Player, PositionId,
    RuleError, JUMP_THRESHOLD,
};
use crate::players::{self, Strategy};
use crate::rules::{legal, CommandContext};

/// What the host offers the seat that is to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorChoice {
    /// A position resolved from user input, for interactive seats.
    Position(PositionId),
    /// Let an autonomous seat pick for itself.
    Autonomous,
}

/// Result of one interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionStatus {
    /// A command ran.
    Applied(Action),
    /// An own token was selected as the source of a move or jump.
    Selected(PositionId),
    /// The selection was dropped by clicking it again.
    Deselected(PositionId),
    /// Nothing changed except that any selection was cleared.
    Rejected(RuleError),
}

impl ActionStatus {
    /// Check whether a command ran.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionStatus::Applied(_))
    }
}

/// Everything the host needs after an interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub status: ActionStatus,
    /// Status line after the interaction.
    pub message: StatusMessage,
    /// Phase after the interaction.
    pub phase: Phase,
    /// Set once the game is over; the host should offer a restart.
    pub winner: Option<Color>,
    /// The removal resolved from the same choice after `status` formed a
    /// mill. Only autonomous seats produce one.
    pub follow_up: Option<Action>,
}

/// One game of Nine Men's Morris.
///
/// ## Example
///
/// ```
/// use morris_rules::core::{Color, GameConfig, Phase};
/// use morris_rules::session::{ActorChoice, GameSession};
///
/// let mut session = GameSession::new(GameConfig::default());
/// let corner = session.resolve_position(0).unwrap();
///
/// let outcome = session.apply_action(ActorChoice::Position(corner));
/// assert!(outcome.status.is_applied());
/// assert_eq!(outcome.message.to_string(), "Black to set.");
/// assert_eq!(session.current(), Color::Black);
/// assert_eq!(session.phase(), Phase::Set);
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    players: ColorMap<Player>,
    strategies: ColorMap<Box<dyn Strategy>>,
    phase: Phase,
    current: Color,
    /// Phase to return to once a Remove completes.
    saved_phase: Option<Phase>,
    winner: Option<Color>,
    status: StatusMessage,
    observers: Observers,
}

impl GameSession {
    /// Start a game: empty board, full hands, White to set.
    ///
    /// Each autonomous seat draws from its own stream forked from
    /// `config.seed`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let strategies = ColorMap::new(|color| players::for_kind(config.kind(color), rng.fork()));
        let players = ColorMap::new(|color| Player::new(color, config.kind(color)));

        info!(seed = config.seed, white = ?config.kind(Color::White), black = ?config.kind(Color::Black), "New game");

        Self {
            config,
            board: Board::new(),
            players,
            strategies,
            phase: Phase::Set,
            current: Color::White,
            saved_phase: None,
            winner: None,
            status: StatusMessage::ToSet(Color::White),
            observers: Observers::default(),
        }
    }

    // === Queries ===

    /// The configuration this session was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color]
    }

    #[must_use]
    pub fn players(&self) -> &ColorMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Color to act next. The winner once the game is over.
    #[must_use]
    pub fn current(&self) -> Color {
        self.current
    }

    /// Phase a pending Remove will return to.
    #[must_use]
    pub fn saved_phase(&self) -> Option<Phase> {
        self.saved_phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Current status line.
    #[must_use]
    pub fn status(&self) -> StatusMessage {
        self.status
    }

    /// Check whether the seat to act picks its own moves, i.e. the host
    /// should send `ActorChoice::Autonomous` next.
    #[must_use]
    pub fn is_autonomous_turn(&self) -> bool {
        !self.is_over() && self.strategies[self.current].is_autonomous()
    }

    /// Map a raw index from the host to a position.
    #[must_use]
    pub fn resolve_position(&self, index: usize) -> Option<PositionId> {
        PositionId::checked(index)
            .and_then(|id| self.board.position(id))
            .map(|p| p.id())
    }

    /// Legal candidates for the player to act in `phase`, taking the
    /// current selection into account. Used for hint highlighting.
    #[must_use]
    pub fn query_legal(&self, phase: Phase) -> Vec<PositionId> {
        legal::for_phase(&self.board, self.current, phase, self.board.selected())
    }

    // === Observers ===

    /// Subscribe to state changes.
    pub fn observe(&mut self, callback: Box<dyn FnMut()>) -> ObserverId {
        self.observers.subscribe(callback)
    }

    /// Drop a subscription. Returns false if `id` was not subscribed.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Interaction ===

    /// Handle one host interaction.
    ///
    /// When the interaction forms a mill and the phase becomes `Remove`,
    /// the same choice is resolved once more as the removal. For an
    /// autonomous seat this performs the removal, reported in
    /// `follow_up` while `status` keeps the action that formed the mill.
    /// An interactive click on the token just placed cannot remove it, so
    /// the host simply waits for the next click.
    #[instrument(skip(self), fields(phase = %self.phase, current = %self.current))]
    pub fn apply_action(&mut self, choice: ActorChoice) -> ActionOutcome {
        if let Some(winner) = self.winner {
            return self.outcome(ActionStatus::Rejected(RuleError::GameOver { winner }));
        }

        let first = self.step(choice);
        let mut follow_up = None;
        if first.is_applied() && self.phase == Phase::Remove {
            if let ActionStatus::Applied(removal) = self.step(choice) {
                follow_up = Some(removal);
            }
        }
        ActionOutcome {
            follow_up,
            ..self.outcome(first)
        }
    }

    /// Apply a fully resolved action for the player to act, bypassing the
    /// seat's strategy. Used for replays and scripted scenarios.
    #[instrument(skip(self), fields(phase = %self.phase, current = %self.current))]
    pub fn play(&mut self, action: Action) -> ActionOutcome {
        if let Some(winner) = self.winner {
            return self.outcome(ActionStatus::Rejected(RuleError::GameOver { winner }));
        }

        let expected = ActionKind::for_phase(self.phase);
        if action.kind() != expected {
            self.board.clear_selection();
            let err = RuleError::WrongPhaseAction {
                phase: self.phase,
                action: action.kind(),
            };
            return self.outcome(ActionStatus::Rejected(err));
        }

        let actor = self.current;
        let result =
            CommandContext::new(&mut self.board, &mut self.players, actor).execute(action);
        let status = match result {
            Ok(()) => self.settle(actor, action, Some(action.target())),
            Err(err) => {
                self.board.clear_selection();
                ActionStatus::Rejected(err)
            }
        };
        self.outcome(status)
    }

    /// Start over: empty board, full hands, White to set. Autonomous seats
    /// keep their random streams.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.phase = Phase::Set;
        self.current = Color::White;
        self.saved_phase = None;
        self.winner = None;
        self.status = StatusMessage::ToSet(Color::White);

        info!("Game restarted");
        self.observers.notify();
    }

    /// Replace the game state with a fixed layout, then re-derive the
    /// phase from the loaded counters. The session is unchanged when the
    /// layout is rejected.
    #[instrument(skip(self, layout), fields(phase = %layout.phase, to_move = %layout.to_move))]
    pub fn load_layout(&mut self, layout: &Layout) -> Result<(), RuleError> {
        if let Err(err) = layout.validate() {
            warn!(%err, "Rejected layout");
            return Err(err);
        }

        self.board.reset();
        for color in Color::iter() {
            for &position in &layout.tokens[color] {
                self.board.set_occupant(position, Some(color));
            }
            let on_board = u8::try_from(layout.tokens[color].len()).map_err(|_| {
                RuleError::InvalidLayout {
                    reason: format!("{color} has too many tokens"),
                }
            })?;
            self.players[color].set_counts(layout.to_set[color], on_board);
        }

        self.phase = layout.phase;
        self.current = layout.to_move;
        self.saved_phase = None;
        self.winner = None;
        self.status = StatusMessage::for_phase(self.phase, self.current);
        self.evaluate_phase();

        info!(phase = %self.phase, current = %self.current, "Layout loaded");
        self.observers.notify();
        Ok(())
    }

    // === State machine ===

    /// Resolve and run one choice for the player to act.
    fn step(&mut self, choice: ActorChoice) -> ActionStatus {
        let actor = self.current;
        let target = match (choice, self.strategies[actor].is_autonomous()) {
            (ActorChoice::Position(position), false) => Some(position),
            (ActorChoice::Autonomous, true) => None,
            _ => return ActionStatus::Rejected(RuleError::UnexpectedChoice { color: actor }),
        };

        if let Some(position) = target {
            if let Some(status) = self.toggle_selection(actor, position) {
                self.observers.notify();
                return status;
            }
        }

        let mut ctx = CommandContext::new(&mut self.board, &mut self.players, actor);
        let strategy = &mut self.strategies[actor];
        match strategy.act(self.phase, &mut ctx, target) {
            Ok(action) => {
                let touched = strategy.last_touched();
                self.settle(actor, action, touched)
            }
            Err(err) => {
                if err.is_invariant_violation() {
                    error!(%actor, phase = %self.phase, %err, "Autonomous seat had nothing to do");
                }
                debug_assert!(!err.is_invariant_violation(), "{err}");
                self.board.clear_selection();
                ActionStatus::Rejected(err)
            }
        }
    }

    /// Selection handling for interactive Move and Jump. Returns `None`
    /// when the click should be tried as a command instead.
    fn toggle_selection(&mut self, actor: Color, position: PositionId) -> Option<ActionStatus> {
        if !self.phase.is_movement() {
            return None;
        }
        match self.board.selected() {
            None if self.board.occupant(position) == Some(actor) => {
                self.board.select(position);
                debug!(%actor, %position, "Selected");
                Some(ActionStatus::Selected(position))
            }
            Some(selected) if selected == position => {
                self.board.clear_selection();
                debug!(%actor, %position, "Deselected");
                Some(ActionStatus::Deselected(position))
            }
            _ => None,
        }
    }

    /// Advance the turn after `actor` successfully applied `action`.
    fn settle(&mut self, actor: Color, action: Action, touched: Option<PositionId>) -> ActionStatus {
        self.observers.notify();

        let mill = touched.is_some_and(|position| self.board.has_mill(position, actor));
        if mill {
            if self.board.has_removable_token(actor) {
                info!(%actor, %action, "Mill formed");
                self.saved_phase = Some(self.phase);
                self.enter(Phase::Remove);
                self.status = StatusMessage::ToRemove(actor);
                return ActionStatus::Applied(action);
            }
            self.current = actor.opponent();
            self.status = StatusMessage::RemoveSkipped(self.current);
            info!(%actor, %action, "Mill formed, every opponent token is protected");
        } else {
            if let Some(saved) = self.saved_phase.take() {
                self.enter(saved);
            }
            self.current = actor.opponent();
            self.status = StatusMessage::for_phase(self.phase, self.current);
        }

        self.evaluate_phase();
        ActionStatus::Applied(action)
    }

    /// Re-derive the phase for the player now to act: Move once both
    /// hands are empty, Jump at three tokens, then end detection.
    fn evaluate_phase(&mut self) {
        if self.phase == Phase::Remove {
            return;
        }

        if self.players.iter().all(|(_, p)| p.tokens_to_set() == 0) {
            self.enter(Phase::Move);
            self.announce();
        }
        if self.phase != Phase::Set && self.players[self.current].tokens_on_board() == JUMP_THRESHOLD
        {
            self.enter(Phase::Jump);
            self.announce();
        }
        if self.phase != Phase::Set && self.is_stalemated() {
            self.finish();
        }
    }

    /// Either player is below three tokens, or the player to act cannot
    /// relocate anything.
    fn is_stalemated(&self) -> bool {
        let short = self
            .players
            .iter()
            .any(|(_, p)| p.tokens_on_board() < JUMP_THRESHOLD);
        short || legal::for_phase(&self.board, self.current, self.phase, None).is_empty()
    }

    fn finish(&mut self) {
        let short = |color: Color| self.players[color].tokens_on_board() < JUMP_THRESHOLD;
        let opponent = self.current.opponent();
        let loser = if short(opponent) && !short(self.current) {
            opponent
        } else {
            self.current
        };
        let winner = loser.opponent();

        self.board.clear_selection();
        self.current = winner;
        self.winner = Some(winner);
        self.status = StatusMessage::Wins(winner);
        info!(%winner, %loser, phase = %self.phase, "Game over");
    }

    fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            info!(from = %self.phase, to = %phase, "Phase transition");
            self.phase = phase;
        }
    }

    /// Prompt the player to act for the current phase. A removal-skipped
    /// notice stays visible for the turn it was issued in.
    fn announce(&mut self) {
        if !matches!(self.status, StatusMessage::RemoveSkipped(_)) {
            self.status = StatusMessage::for_phase(self.phase, self.current);
        }
    }

    fn outcome(&self, status: ActionStatus) -> ActionOutcome {
        if let ActionStatus::Rejected(err) = &status {
            debug!(%err, "Interaction rejected");
        }
        ActionOutcome {
            status,
            message: self.status,
            phase: self.phase,
            winner: self.winner,
            follow_up: None,
        }
    }
}
