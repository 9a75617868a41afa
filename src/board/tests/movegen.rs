//! Simple move generation and the mandatory-capture filter.

use super::diagram;
use crate::board::{Board, BoardBuilder, Move, Player, Square};

#[test]
fn test_start_position_player_one_moves() {
    let board = Board::starting_position(0);
    let moves: Vec<Move> = board.legal_moves(Player::One).into_iter().collect();
    assert_eq!(
        moves,
        vec![
            Move::simple(Square(4, 1), Square(3, 0)),
            Move::simple(Square(4, 1), Square(3, 2)),
            Move::simple(Square(4, 3), Square(3, 2)),
            Move::simple(Square(4, 3), Square(3, 4)),
            Move::simple(Square(4, 5), Square(3, 4)),
        ]
    );
}

#[test]
fn test_start_position_player_two_moves() {
    let board = Board::starting_position(0);
    let moves = board.legal_moves(Player::Two);
    assert_eq!(moves.len(), 5);
    assert_eq!(moves[0], Move::simple(Square(1, 0), Square(2, 1)));
    assert!(moves.iter().all(|mv| mv.end().row() == 2));
}

#[test]
fn test_start_position_has_no_captures() {
    let board = Board::starting_position(0);
    assert!(board.capture_moves(Player::One).is_empty());
    assert!(board.capture_moves(Player::Two).is_empty());
    assert_eq!(board.playable_moves(Player::One), board.legal_moves(Player::One));
}

#[test]
fn test_obstacle_blocks_simple_moves() {
    let board = BoardBuilder::starting_position()
        .obstacle(Square(3, 2))
        .build();
    let moves = board.legal_moves(Player::One);
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|mv| mv.end() != Square(3, 2)));
}

#[test]
fn test_king_moves_in_all_directions() {
    let board = BoardBuilder::new().king(Square(2, 3), Player::One).build();
    let ends: Vec<Square> = board
        .legal_moves(Player::One)
        .iter()
        .map(Move::end)
        .collect();
    assert_eq!(
        ends,
        vec![Square(1, 2), Square(1, 4), Square(3, 2), Square(3, 4)]
    );
}

#[test]
fn test_men_never_move_backwards() {
    let board = BoardBuilder::new()
        .man(Square(2, 3), Player::One)
        .man(Square(3, 2), Player::Two)
        .build();
    for mv in &board.legal_moves(Player::One) {
        assert!(mv.end().row() < mv.start().row());
    }
    for mv in &board.legal_moves(Player::Two) {
        assert!(mv.end().row() > mv.start().row());
    }
}

#[test]
fn test_edge_piece_has_single_move() {
    let board = BoardBuilder::new().man(Square(3, 0), Player::One).build();
    let moves = board.legal_moves(Player::One);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0], Move::simple(Square(3, 0), Square(2, 1)));
}

#[test]
fn test_capture_is_mandatory() {
    let board = diagram(
        "
        . . . . . .
        . . . . . .
        . . . . . .
        . . b . . .
        . w . . . w
        . . . . . .
        ",
    );
    assert_eq!(board.legal_moves(Player::One).len(), 2);
    let playable = board.playable_moves(Player::One);
    assert_eq!(playable.len(), 1);
    assert!(playable.iter().all(Move::is_capture));
    assert_eq!(playable[0].end(), Square(2, 3));
}

#[test]
fn test_blocked_side_has_no_moves() {
    let board = diagram(
        "
        . . . . . .
        . . . . . .
        . . . . . .
        b . . . b .
        . b . b . .
        . . w . . .
        ",
    );
    // The man on (5,2) is boxed in by two men whose landing squares are taken.
    assert!(board.legal_moves(Player::One).is_empty());
    assert!(board.capture_moves(Player::One).is_empty());
    assert!(!board.has_moves(Player::One));
    assert!(board.has_moves(Player::Two));
}
