//! Legal-move generation.
//!
//! Candidate positions for the current phase and selection state. The
//! host's hint highlighting and the autonomous strategy both read from
//! here; results are always in ascending index order.

use crate::board::Board;
use crate::core::{Color, Phase, PositionId};

/// Empty positions a token can be set on.
#[must_use]
pub fn for_set(board: &Board) -> Vec<PositionId> {
    board.empty_positions().collect()
}

/// Opponent tokens `actor` may remove: those not protected by a mill.
#[must_use]
pub fn for_remove(board: &Board, actor: Color) -> Vec<PositionId> {
    let opponent = actor.opponent();
    board
        .occupied_by(opponent)
        .filter(|&p| !board.has_mill(p, opponent))
        .collect()
}

/// Without a selection: `actor`'s tokens with at least one empty
/// neighbor. With a selection: the selected token's empty neighbors.
#[must_use]
pub fn for_move(board: &Board, actor: Color, selection: Option<PositionId>) -> Vec<PositionId> {
    match own_selection(board, actor, selection) {
        None => board
            .occupied_by(actor)
            .filter(|&p| board.neighbors(p).iter().any(|&n| board.is_empty(n)))
            .collect(),
        Some(source) => {
            let mut targets: Vec<_> = board
                .neighbors(source)
                .iter()
                .copied()
                .filter(|&n| board.is_empty(n))
                .collect();
            targets.sort();
            targets
        }
    }
}

/// Without a selection: all of `actor`'s tokens. With a selection: every
/// empty position.
#[must_use]
pub fn for_jump(board: &Board, actor: Color, selection: Option<PositionId>) -> Vec<PositionId> {
    match own_selection(board, actor, selection) {
        None => board.occupied_by(actor).collect(),
        Some(_) => board.empty_positions().collect(),
    }
}

/// Candidates for whatever `phase` calls for.
#[must_use]
pub fn for_phase(
    board: &Board,
    actor: Color,
    phase: Phase,
    selection: Option<PositionId>,
) -> Vec<PositionId> {
    match phase {
        Phase::Set => for_set(board),
        Phase::Move => for_move(board, actor, selection),
        Phase::Jump => for_jump(board, actor, selection),
        Phase::Remove => for_remove(board, actor),
    }
}

/// A selection only counts while it holds one of `actor`'s tokens.
fn own_selection(board: &Board, actor: Color, selection: Option<PositionId>) -> Option<PositionId> {
    selection.filter(|&s| board.occupant(s) == Some(actor))
}
