//! Round-by-round scenarios for the rules engine.

use crossmark_engine::{
    Cell, EngineError, GameSession, GameStatus, Player, Players, Position, RoundPolicy,
    RoundStatus,
};

fn play_all(session: &mut GameSession, moves: &[(usize, usize)]) -> Vec<RoundStatus> {
    moves
        .iter()
        .map(|&(row, col)| session.play_at(row, col).expect("Valid move"))
        .collect()
}

#[test]
fn test_top_row_win_for_first_player() {
    let mut session = GameSession::default();
    let statuses = play_all(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(statuses[0], RoundStatus::Continue { next: Player::O });
    assert_eq!(statuses[1], RoundStatus::Continue { next: Player::X });
    assert_eq!(statuses[4], RoundStatus::Won(Player::X));
    assert_eq!(session.status(), GameStatus::Won(Player::X));
    assert!(session.have_winner(Player::X));
    assert!(!session.have_winner(Player::O));
}

#[test]
fn test_no_mutation_after_win() {
    let mut session = GameSession::default();
    play_all(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let board = session.board().clone();
    let rounds = session.rounds();

    for pos in Position::ALL {
        assert_eq!(session.play_round(pos), Err(EngineError::GameOver));
    }

    assert_eq!(session.board(), &board);
    assert_eq!(session.rounds(), rounds);
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_full_board_tie_at_ninth_move() {
    // X O X / X O O / O X X
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
    let mut session = GameSession::default();
    let statuses = play_all(&mut session, &moves);

    for status in &statuses[..8] {
        assert!(!status.is_terminal(), "Ended early: {status:?}");
    }
    assert_eq!(statuses[8], RoundStatus::Tie);
    assert_eq!(session.status(), GameStatus::Tie);
    assert_eq!(session.rounds(), 9);
    assert_eq!(session.board().empty_count(), 0);
    assert_eq!(session.result_message().as_deref(), Some("Draw!"));
}

#[test]
fn test_ninth_move_win_beats_tie() {
    // X completes the diagonal with the last free cell.
    let moves = [(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (2, 0), (2, 1), (1, 0), (2, 2)];
    let mut session = GameSession::default();
    let statuses = play_all(&mut session, &moves);

    assert_eq!(statuses[8], RoundStatus::Won(Player::X));
}

#[test]
fn test_occupied_cell_keeps_turn() {
    let mut session = GameSession::default();
    session.play_at(0, 0).unwrap();

    let status = session.play_at(0, 0).unwrap();

    assert_eq!(status, RoundStatus::Occupied(Position::TopLeft));
    assert_eq!(session.board().get(Position::TopLeft), Cell::Occupied(Player::X));
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_repeated_rejections_do_not_force_tie() {
    let mut session = GameSession::default();
    session.play_at(1, 1).unwrap();
    for _ in 0..20 {
        assert_eq!(
            session.play_at(1, 1).unwrap(),
            RoundStatus::Occupied(Position::Center)
        );
    }
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.rounds(), 1);
}

#[test]
fn test_legacy_rejections_force_early_tie() {
    let mut session = GameSession::new(Players::default(), RoundPolicy::Legacy);
    session.play_at(1, 1).unwrap();
    for _ in 0..7 {
        session.play_at(1, 1).unwrap();
    }
    // Ninth attempt ends the game no matter the target.
    assert_eq!(session.play_at(0, 0).unwrap(), RoundStatus::Tie);
    assert_eq!(session.board().get(Position::TopLeft), Cell::Empty);
    assert_eq!(session.board().empty_count(), 8);
}

#[test]
fn test_legacy_ninth_attempt_is_tie_before_placement() {
    // Same sequence as the ninth-move win: under legacy rules the ninth
    // attempt is a tie and the final token is never placed.
    let moves = [(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (2, 0), (2, 1), (1, 0), (2, 2)];
    let mut session = GameSession::new(Players::default(), RoundPolicy::Legacy);
    let statuses = play_all(&mut session, &moves);

    assert_eq!(statuses[8], RoundStatus::Tie);
    assert_eq!(session.board().get(Position::BottomRight), Cell::Empty);
}

#[test]
fn test_out_of_range_rejected_under_legacy_without_counting() {
    let mut session = GameSession::new(Players::default(), RoundPolicy::Legacy);
    assert_eq!(
        session.play_at(5, 0),
        Err(EngineError::OutOfRange { row: 5, col: 0 })
    );
    assert_eq!(session.rounds(), 0);
}

#[test]
fn test_history_records_accepted_moves() {
    let mut session = GameSession::default();
    play_all(&mut session, &[(1, 1), (0, 0)]);
    session.play_at(1, 1).unwrap();

    let history: Vec<(Player, Position)> = session
        .history()
        .iter()
        .map(|mv| (mv.player, mv.position))
        .collect();
    assert_eq!(
        history,
        vec![(Player::X, Position::Center), (Player::O, Position::TopLeft)]
    );
}

#[test]
fn test_session_snapshot_serializes() {
    let mut session = GameSession::new(Players::new("Ada", "Bob"), RoundPolicy::Standard);
    session.play_at(0, 0).unwrap();

    let json = serde_json::to_value(&session).unwrap();

    assert_eq!(json["current_player"], "O");
    assert_eq!(json["rounds"], 1);
    assert_eq!(json["policy"], "standard");
    assert_eq!(json["players"]["x"], "Ada");
    assert_eq!(json["board"]["cells"][0]["Occupied"], "X");
}
