//! Full games driven through the `Game` orchestrator.

use rand::prelude::*;

use obstacle_checkers::board::{Bitboard, BoardBuilder, Square};
use obstacle_checkers::{Game, GameConfig, GameError, GameStatus, Player};

fn config(seed: u64, depth: u32) -> GameConfig {
    GameConfig {
        ai_depth: depth,
        seed: Some(seed),
        ..GameConfig::default()
    }
}

fn assert_obstacle_invariants(game: &Game) {
    let board = game.board();
    let free = Bitboard::DARK_SQUARES.and(board.occupied().not());
    assert!(board.obstacles().and(board.occupied()).is_empty());
    assert_eq!(
        board.obstacle_count(),
        board.target_obstacle_count().min(free.popcount() as usize)
    );
}

/// Random player one against the engine until someone runs out of moves.
#[test]
fn random_player_against_engine() {
    for seed in 0..4 {
        let mut game = Game::new(config(seed, 2));
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..300 {
            if game.status() != GameStatus::InProgress {
                break;
            }
            let mover = game.to_move();
            if game.is_engine_turn() {
                let result = game.play_engine().unwrap();
                assert!(result.best_move.is_some());
            } else {
                let moves = game.playable_moves();
                let mv = moves[rng.gen_range(0..moves.len())].clone();
                game.play(&mv).unwrap();
            }
            assert_eq!(game.to_move(), mover.opponent());
            assert_obstacle_invariants(&game);
        }

        if let GameStatus::Won(winner) = game.status() {
            assert!(!game.board().has_moves(winner.opponent()));
            assert_eq!(game.to_move(), winner.opponent());
        }
    }
}

#[test]
fn engine_self_play_is_reproducible() {
    let play = |seed| {
        let mut game = Game::new(config(seed, 2));
        let mut moves = Vec::new();
        for _ in 0..40 {
            if game.status() != GameStatus::InProgress {
                break;
            }
            let result = game.search_for(game.to_move());
            let mv = result.best_move.expect("side in progress has a move");
            game.play(&mv).unwrap();
            moves.push(mv);
        }
        (moves, game.board().clone())
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn capturing_the_last_piece_wins() {
    let board = BoardBuilder::new()
        .man(Square(2, 1), Player::One)
        .man(Square(1, 2), Player::Two)
        .build();
    let mut game = Game::from_position(config(12, 2), board, Player::One);
    assert_eq!(game.status(), GameStatus::InProgress);

    let moves = game.playable_moves();
    assert_eq!(moves.len(), 1);
    game.play(&moves[0].clone()).unwrap();

    assert_eq!(game.status(), GameStatus::Won(Player::One));
    assert_eq!(
        game.play_engine(),
        Err(GameError::GameOver {
            winner: Player::One
        })
    );
    assert!(!game.is_engine_turn());
}

#[test]
fn engine_can_take_player_one() {
    let mut game = Game::new(GameConfig {
        ai_player: Player::One,
        ..config(4, 2)
    });
    assert!(game.is_engine_turn());
    let result = game.play_engine().unwrap();
    assert!(result.best_move.is_some());
    assert_eq!(game.to_move(), Player::Two);
}
