//! Mill detection.
//!
//! Pure queries over the current occupancy. A token is protected while it
//! sits in a mill of its own color.

use tracing::trace;

use super::topology::{Board, Triple};
use crate::core::{Color, PositionId};

impl Board {
    /// Color owning all three positions of `triple`, if any.
    #[must_use]
    pub fn mill_color(&self, triple: &Triple) -> Option<Color> {
        let [a, b, c] = triple.positions();
        let color = self.occupant(a)?;
        (self.occupant(b) == Some(color) && self.occupant(c) == Some(color)).then_some(color)
    }

    /// Check whether `position` is part of a mill of `color`.
    #[must_use]
    pub fn has_mill(&self, position: PositionId, color: Color) -> bool {
        let Some(pos) = self.position(position) else {
            return false;
        };
        pos.triples()
            .iter()
            .filter_map(|&t| self.triple(t))
            .any(|t| self.mill_color(t) == Some(color))
    }

    /// Check whether `color` has any mill anywhere on the board.
    #[must_use]
    pub fn is_mill_on_board(&self, color: Color) -> bool {
        self.triples()
            .iter()
            .any(|t| self.mill_color(t) == Some(color))
    }

    /// Check whether the token at `position` is shielded by a mill of its
    /// own color. Empty positions are never protected.
    #[must_use]
    pub fn is_protected(&self, position: PositionId) -> bool {
        self.occupant(position)
            .is_some_and(|owner| self.has_mill(position, owner))
    }

    /// Check whether the opponent of `actor` has a token outside its mills.
    #[must_use]
    pub fn has_removable_token(&self, actor: Color) -> bool {
        let opponent = actor.opponent();
        let removable = self
            .occupied_by(opponent)
            .any(|p| !self.has_mill(p, opponent));
        trace!(%actor, removable, "Checked for removable tokens");
        removable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TripleId;

    fn board_with(white: &[u8], black: &[u8]) -> Board {
        let mut board = Board::new();
        for &i in white {
            board.set_occupant(PositionId::new(i), Some(Color::White));
        }
        for &i in black {
            board.set_occupant(PositionId::new(i), Some(Color::Black));
        }
        board
    }

    #[test]
    fn test_mill_color() {
        let board = board_with(&[0, 1, 2], &[8, 9]);

        assert_eq!(board.mill_color(board.triple(TripleId::new(0)).unwrap()), Some(Color::White));
        assert_eq!(board.mill_color(board.triple(TripleId::new(4)).unwrap()), None);
        assert_eq!(board.mill_color(board.triple(TripleId::new(12)).unwrap()), None);
    }

    #[test]
    fn test_mixed_triple_is_not_a_mill() {
        let board = board_with(&[0, 2], &[1]);
        assert_eq!(board.mill_color(board.triple(TripleId::new(0)).unwrap()), None);
    }

    #[test]
    fn test_has_mill() {
        let board = board_with(&[1, 9, 17], &[]);

        assert!(board.has_mill(PositionId::new(9), Color::White));
        assert!(board.has_mill(PositionId::new(1), Color::White));
        assert!(!board.has_mill(PositionId::new(9), Color::Black));
        assert!(!board.has_mill(PositionId::new(0), Color::White));
        assert!(!board.has_mill(PositionId::new(77), Color::White));
    }

    #[test]
    fn test_is_mill_on_board() {
        let board = board_with(&[4, 5, 6], &[0, 1]);
        assert!(board.is_mill_on_board(Color::White));
        assert!(!board.is_mill_on_board(Color::Black));
    }

    #[test]
    fn test_is_protected() {
        let board = board_with(&[0, 1, 2, 10], &[]);
        assert!(board.is_protected(PositionId::new(1)));
        assert!(!board.is_protected(PositionId::new(10)));
        assert!(!board.is_protected(PositionId::new(3)));
    }

    #[test]
    fn test_has_removable_token() {
        // Black has a token outside its mill
        let board = board_with(&[20], &[0, 1, 2, 12]);
        assert!(board.has_removable_token(Color::White));

        // Every Black token is milled
        let board = board_with(&[20], &[0, 1, 2]);
        assert!(!board.has_removable_token(Color::White));

        // No tokens at all
        let board = board_with(&[20], &[]);
        assert!(!board.has_removable_token(Color::White));
    }
}
