//! Fixed board layouts.
//!
//! A layout is a complete starting point: which positions each color
//! holds, what is still in hand, who acts and in which phase. Scripted
//! scenarios and tests load one instead of playing up to it.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorMap, Phase, PositionId, RuleError, POSITION_COUNT, TOKENS_PER_PLAYER};

/// A board position to load into a session.
///
/// ## Example
///
/// ```
/// use morris_rules::core::{Color, Phase};
/// use morris_rules::session::Layout;
///
/// let layout = Layout::new()
///     .with_tokens(Color::White, [0, 1, 2])
///     .with_tokens(Color::Black, [8, 9, 10, 12])
///     .with_to_set(Color::White, 0)
///     .with_to_set(Color::Black, 0)
///     .with_phase(Phase::Move);
///
/// assert!(layout.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Occupied positions per color.
    pub tokens: ColorMap<Vec<PositionId>>,
    /// Tokens still in hand per color.
    pub to_set: ColorMap<u8>,
    /// Color to act.
    pub to_move: Color,
    /// Phase to resume in. Never `Remove`.
    pub phase: Phase,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            tokens: ColorMap::with_value(Vec::new()),
            to_set: ColorMap::with_value(TOKENS_PER_PLAYER),
            to_move: Color::White,
            phase: Phase::Set,
        }
    }
}

impl Layout {
    /// An empty board at the start of the Set phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the positions held by `color`.
    #[must_use]
    pub fn with_tokens(mut self, color: Color, positions: impl IntoIterator<Item = u8>) -> Self {
        self.tokens[color] = positions.into_iter().map(PositionId::new).collect();
        self
    }

    /// Set how many tokens `color` still has in hand.
    #[must_use]
    pub fn with_to_set(mut self, color: Color, count: u8) -> Self {
        self.to_set[color] = count;
        self
    }

    /// Set the color to act.
    #[must_use]
    pub fn with_to_move(mut self, color: Color) -> Self {
        self.to_move = color;
        self
    }

    /// Set the phase to resume in.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Check the layout against the board and counter invariants.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.phase == Phase::Remove {
            return Err(invalid("cannot resume in the Remove phase".to_string()));
        }

        let mut seen = [false; POSITION_COUNT];
        for (color, positions) in self.tokens.iter() {
            for &position in positions {
                let slot = seen
                    .get_mut(position.index())
                    .ok_or_else(|| invalid(format!("{position} is not on the board")))?;
                if *slot {
                    return Err(invalid(format!("{position} is listed twice")));
                }
                *slot = true;
            }

            let total = positions.len() + usize::from(self.to_set[color]);
            if total > usize::from(TOKENS_PER_PLAYER) {
                return Err(invalid(format!(
                    "{color} has {total} tokens, more than {TOKENS_PER_PLAYER}"
                )));
            }
        }

        let all_set = self.to_set.iter().all(|(_, &n)| n == 0);
        match self.phase {
            Phase::Move | Phase::Jump if !all_set => Err(invalid(
                "tokens are still in hand outside the Set phase".to_string(),
            )),
            Phase::Set if !all_set => self.check_set_turn(),
            _ => Ok(()),
        }
    }

    /// White sets first, so the hands are level when White is to set and
    /// Black holds one more when Black is.
    fn check_set_turn(&self) -> Result<(), RuleError> {
        let hand = self.to_set[self.to_move];
        if hand == 0 {
            return Err(invalid(format!("{} has nothing left to set", self.to_move)));
        }

        let other = self.to_set[self.to_move.opponent()];
        let expected = match self.to_move {
            Color::White => other,
            Color::Black => other + 1,
        };
        if hand != expected {
            return Err(invalid(format!(
                "{} to set with {hand} in hand, but turn order gives {expected}",
                self.to_move
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> RuleError {
    RuleError::InvalidLayout { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(white: &[u8], black: &[u8]) -> Layout {
        Layout::new()
            .with_tokens(Color::White, white.iter().copied())
            .with_tokens(Color::Black, black.iter().copied())
            .with_to_set(Color::White, 0)
            .with_to_set(Color::Black, 0)
            .with_phase(Phase::Move)
    }

    #[test]
    fn test_default_is_fresh_game() {
        let layout = Layout::default();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.to_set[Color::Black], TOKENS_PER_PLAYER);
        assert_eq!(layout.phase, Phase::Set);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = movement(&[0, 24], &[5]).validate().unwrap_err();
        assert!(matches!(err, RuleError::InvalidLayout { .. }));
    }

    #[test]
    fn test_rejects_overlap() {
        assert!(movement(&[0, 1], &[1]).validate().is_err());
        assert!(movement(&[3, 3], &[]).validate().is_err());
    }

    #[test]
    fn test_rejects_too_many_tokens() {
        let layout = Layout::new()
            .with_tokens(Color::White, [0, 1])
            .with_to_set(Color::White, 8);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_rejects_remove_phase() {
        assert!(movement(&[0], &[1]).with_phase(Phase::Remove).validate().is_err());
    }

    #[test]
    fn test_rejects_hand_outside_set() {
        let layout = movement(&[0, 1, 2], &[8, 9, 10]).with_to_set(Color::Black, 1);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_hand_to_set() {
        let layout = Layout::new()
            .with_to_set(Color::White, 0)
            .with_to_move(Color::White);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_rejects_hands_out_of_turn_order() {
        // White would come up to set with nothing in hand after Black's set
        let stranded = Layout::new()
            .with_tokens(Color::White, [0, 1, 2, 3, 4, 5, 6, 7, 8])
            .with_tokens(Color::Black, [9, 10, 11, 12, 13, 14, 15])
            .with_to_set(Color::White, 0)
            .with_to_set(Color::Black, 2)
            .with_to_move(Color::Black);
        let err = stranded.validate().unwrap_err();
        assert!(matches!(err, RuleError::InvalidLayout { .. }));

        let uneven = Layout::new()
            .with_to_set(Color::White, 7)
            .with_to_set(Color::Black, 6);
        assert!(uneven.validate().is_err());
    }

    #[test]
    fn test_accepts_hands_in_turn_order() {
        let white_turn = Layout::new()
            .with_tokens(Color::White, [0, 1])
            .with_tokens(Color::Black, [8, 9])
            .with_to_set(Color::White, 7)
            .with_to_set(Color::Black, 7);
        assert!(white_turn.validate().is_ok());

        let black_turn = white_turn
            .with_to_set(Color::White, 6)
            .with_to_move(Color::Black);
        assert!(black_turn.validate().is_ok());

        let last_set = Layout::new()
            .with_to_set(Color::White, 0)
            .with_to_set(Color::Black, 1)
            .with_to_move(Color::Black);
        assert!(last_set.validate().is_ok());
    }

    #[test]
    fn test_serde_roundtrip() {
        let layout = movement(&[0, 1, 2], &[9, 10, 11]).with_to_move(Color::Black);
        let json = serde_json::to_string(&layout).unwrap();
        let parsed: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, layout);
    }
}
