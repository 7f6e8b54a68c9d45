//! Whole-game checks for the search and the session wrapper.

use flipside_othello::{Board, Game, Location, Move, Side};
use flipside_player::{
    best_move_minimax, best_move_one_ply, eval, Greedy, Minimax, PassRule, SearchConfig,
    Session, Strategy,
};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

fn at(x: usize, y: usize) -> Location {
    Location::from_coords(x, y)
}

/// Play `plies` random moves from the opening.
fn random_position(seed: u64, plies: usize) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::default();
    for _ in 0..plies {
        if game.is_finished() {
            break;
        }
        let mv = Move::from(game.legal_moves().choose(&mut rng));
        game = game.apply_move(mv).unwrap();
    }
    game
}

/// Let two sessions play each other, checking every reply against the rules.
fn play_out<B: Strategy, W: Strategy>(black: B, white: W) -> Game {
    let mut black = Session::new(Side::Black, black);
    let mut white = Session::new(Side::White, white);
    let mut game = Game::default();
    let mut last = Move::Pass;

    while !game.is_finished() {
        let reply = match game.active_side {
            Side::Black => black.play(last, None),
            Side::White => white.play(last, None),
        };
        game = game
            .apply_move(reply)
            .unwrap_or_else(|err| panic!("{}\n{}", err, game));
        last = reply;
    }

    game
}

#[test]
fn corner_capture_beats_equal_middle_capture() {
    // Both Black moves flip one disc; only H8 takes a corner.
    let board: Board = "
        ........
        ........
        ........
        ...wb...
        ........
        ........
        ........
        .....bw.
    "
    .parse()
    .unwrap();

    let middle = board.with_move(Move::Piece(at(2, 3)), Side::Black);
    let corner = board.with_move(Move::Piece(at(7, 7)), Side::Black);
    assert_eq!(
        eval::simple_score(&middle, Side::Black),
        eval::simple_score(&corner, Side::Black)
    );
    assert!(
        eval::heuristic_score(&corner, Side::Black, at(7, 7))
            > eval::heuristic_score(&middle, Side::Black, at(2, 3))
    );
    assert_eq!(best_move_one_ply(&board, Side::Black), Some(at(7, 7)));
}

#[test]
fn search_is_deterministic() {
    for seed in 0..8 {
        let game = random_position(seed, 12);
        let side = game.active_side;
        let first = best_move_minimax(&game.board, side, 3);
        let second = best_move_minimax(&game.board, side, 3);
        assert_eq!(first, second);
    }
}

#[test]
fn chosen_moves_are_legal() {
    for seed in 0..16 {
        let game = random_position(seed, 30);
        let side = game.active_side;
        for look_ahead in 1..=3 {
            match best_move_minimax(&game.board, side, look_ahead) {
                Some(loc) => assert!(game.board.is_legal(Move::Piece(loc), side)),
                None => assert!(game.board.legal_moves(side).is_empty()),
            }
        }
    }
}

#[test]
fn minimax_plays_a_full_game_against_greedy() {
    let game = play_out(Minimax::default(), Greedy);
    assert!(game.board.is_done());
    assert!(game.board.is_consistent());
}

#[test]
fn pass_rules_both_finish_games() {
    let dead_end = SearchConfig::default().with_look_ahead(2);
    let continued = dead_end.with_pass_rule(PassRule::Continue);

    let game = play_out(Minimax::new(dead_end), Minimax::new(continued));
    assert!(game.is_finished());
}

#[test]
fn greedy_self_play_is_reproducible() {
    let first = play_out(Greedy, Greedy);
    let second = play_out(Greedy, Greedy);
    assert_eq!(first, second);
}
