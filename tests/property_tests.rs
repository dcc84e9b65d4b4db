//! Property tests over random click sequences and seeded self-play.

use proptest::prelude::*;

use morris_rules::board::Board;
use morris_rules::core::{
    Color, GameConfig, Phase, PositionId, JUMP_THRESHOLD, TOKENS_PER_PLAYER,
};
use morris_rules::rules::legal;
use morris_rules::session::{ActorChoice, GameSession};

/// Indices include a couple past the board to exercise rejection.
fn click_sequences() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..26, 0..300)
}

fn assert_consistent(session: &GameSession) {
    let board = session.board();
    let mut occupied = 0;
    for color in [Color::White, Color::Black] {
        let player = session.player(color);
        assert_eq!(board.count(color), usize::from(player.tokens_on_board()));
        assert!(player.tokens_to_set() + player.tokens_on_board() <= TOKENS_PER_PLAYER);
        occupied += board.count(color);
    }
    assert_eq!(
        occupied,
        board.snapshot().iter().filter(|slot| slot.is_some()).count()
    );

    if let Some(selected) = board.selected() {
        assert_eq!(board.occupant(selected), Some(session.current()));
        assert!(session.phase().is_movement());
        let flagged: Vec<_> = board
            .positions()
            .iter()
            .filter(|position| position.is_selected())
            .map(|position| position.id())
            .collect();
        assert_eq!(flagged, vec![selected]);
    }

    match session.phase() {
        Phase::Remove => assert!(session.saved_phase().is_some()),
        phase => assert!(session.saved_phase().is_none(), "{phase} with a saved phase"),
    }

    if session.phase().is_movement() {
        for color in [Color::White, Color::Black] {
            assert_eq!(session.player(color).tokens_to_set(), 0);
        }
    }
    if session.phase() == Phase::Jump && !session.is_over() {
        assert_eq!(
            session.player(session.current()).tokens_on_board(),
            JUMP_THRESHOLD
        );
    }
}

fn assert_legal_sets(board: &Board, actor: Color) {
    for position in legal::for_set(board) {
        assert!(board.is_empty(position));
    }
    for position in legal::for_remove(board, actor) {
        assert_eq!(board.occupant(position), Some(actor.opponent()));
        assert!(!board.is_protected(position));
    }
    for source in legal::for_move(board, actor, None) {
        assert_eq!(board.occupant(source), Some(actor));
        let targets = legal::for_move(board, actor, Some(source));
        assert!(!targets.is_empty());
        for target in targets {
            assert!(board.is_empty(target));
            assert!(board.are_adjacent(source, target));
        }
    }
    for source in legal::for_jump(board, actor, None) {
        assert_eq!(board.occupant(source), Some(actor));
        for target in legal::for_jump(board, actor, Some(source)) {
            assert!(board.is_empty(target));
        }
    }
}

fn replay(session: &mut GameSession, clicks: &[u8]) {
    for &i in clicks {
        session.apply_action(ActorChoice::Position(PositionId::new(i)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Test that random clicks keep board and counters consistent.
    #[test]
    fn prop_random_clicks_keep_invariants(clicks in click_sequences()) {
        let mut session = GameSession::new(GameConfig::default());
        for &i in &clicks {
            session.apply_action(ActorChoice::Position(PositionId::new(i)));
            assert_consistent(&session);
            assert_legal_sets(session.board(), session.current());
        }
    }

    /// Test that hint queries do not change the answer.
    #[test]
    fn prop_query_legal_is_idempotent(clicks in click_sequences()) {
        let mut session = GameSession::new(GameConfig::default());
        replay(&mut session, &clicks);

        for phase in [Phase::Set, Phase::Move, Phase::Jump, Phase::Remove] {
            let first = session.query_legal(phase);
            let second = session.query_legal(phase);
            prop_assert_eq!(first, second);
        }
    }

    /// Test that a restarted game replays identically.
    #[test]
    fn prop_restart_then_replay_is_identical(clicks in click_sequences()) {
        let mut session = GameSession::new(GameConfig::default());
        replay(&mut session, &clicks);
        let snapshot = session.board().snapshot();
        let phase = session.phase();
        let current = session.current();

        session.restart();
        replay(&mut session, &clicks);

        prop_assert_eq!(session.board().snapshot(), snapshot);
        prop_assert_eq!(session.phase(), phase);
        prop_assert_eq!(session.current(), current);
    }

    /// Test that computer play never stalls and ends with a valid winner.
    #[test]
    fn prop_seeded_self_play(seed in any::<u64>()) {
        let mut session = GameSession::new(GameConfig::self_play().with_seed(seed));
        for _ in 0..300 {
            if session.is_over() {
                break;
            }
            let outcome = session.apply_action(ActorChoice::Autonomous);
            prop_assert!(outcome.status.is_applied(), "{:?}", outcome.status);
            prop_assert_ne!(session.phase(), Phase::Remove);
            assert_consistent(&session);
        }

        if let Some(winner) = session.winner() {
            prop_assert_eq!(session.current(), winner);
            let loser = session.player(winner.opponent());
            let stuck = legal::for_move(session.board(), winner.opponent(), None).is_empty();
            prop_assert!(loser.tokens_on_board() < JUMP_THRESHOLD || stuck);
        }
    }
}
