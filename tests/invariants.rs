use checkers::game::{Board, GameState, Player, Position, BOARD_SIZE};
use proptest::prelude::*;

/// Apply a click the way the terminal UI does: move if something is
/// selected, deselecting on failure; otherwise select.
fn click(state: &mut GameState, row: usize, col: usize) {
    if state.selected_piece().is_some() {
        if !state.move_piece(row, col) {
            state.clear_selection();
        }
    } else {
        state.select_piece(row, col);
    }
}

fn check_invariants(state: &GameState) {
    let board = state.board();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            if let Some(piece) = board.get(pos) {
                assert!(pos.is_dark(), "piece on light square {pos}");
                assert_eq!(piece.position(), pos);
            }
        }
    }
    assert_eq!(board.count(Player::First), 12);
    assert_eq!(board.count(Player::Second), 12);

    match state.selected_piece() {
        Some(piece) => {
            assert_eq!(piece.color(), state.turn());
            assert_eq!(state.valid_moves(), &state.compute_valid_moves(piece));
        }
        None => assert!(state.valid_moves().is_empty()),
    }
}

/// Starting layout with the sides swapped, so both have room to advance
/// through the middle band.
fn open_board() -> Board {
    let mut board = Board::new();
    for row in (0..3).chain(5..BOARD_SIZE) {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            if pos.is_dark() {
                let color = if row < 3 { Player::Second } else { Player::First };
                board.place(color, pos).unwrap();
            }
        }
    }
    board
}

proptest! {
    #[test]
    fn clicks_preserve_invariants(
        clicks in prop::collection::vec((0usize..BOARD_SIZE + 2, 0usize..BOARD_SIZE + 2), 0..200)
    ) {
        let mut state = GameState::new();
        check_invariants(&state);
        for (row, col) in clicks {
            click(&mut state, row, col);
            check_invariants(&state);
        }
    }

    #[test]
    fn turn_flips_exactly_on_successful_moves(
        clicks in prop::collection::vec((0usize..BOARD_SIZE, 0usize..BOARD_SIZE), 0..300)
    ) {
        let mut state = GameState::from_board(open_board(), Player::First);
        let mut kings = 0;
        for (row, col) in clicks {
            let turn = state.turn();
            let moved = state.selected_piece().is_some() && state.clone().move_piece(row, col);
            click(&mut state, row, col);
            if moved {
                prop_assert_eq!(state.turn(), turn.other());
                let piece = state.board().get(Position::new(row, col)).unwrap();
                prop_assert_eq!(piece.color(), turn);
            } else {
                prop_assert_eq!(state.turn(), turn);
            }

            let now = state.board().pieces().filter(|p| p.is_king()).count();
            prop_assert!(now >= kings);
            kings = now;
            for piece in state.board().pieces() {
                prop_assert!(piece.position().is_dark());
                prop_assert_eq!(state.board().get(piece.position()), Some(piece));
            }
        }
    }
}
