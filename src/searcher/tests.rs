use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::*;
use crate::board::piece::Cell;
use crate::board::square::Square;
use crate::difficulty::DifficultyConfig;
use crate::{checkers_move, checkers_position};

/// A random source whose first sample is always close to 1, so no error is
/// ever injected.
fn never_errs() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// A random source whose samples are all 0, so every level with a nonzero
/// error probability errs.
fn always_errs() -> StepRng {
    StepRng::new(0, 0)
}

fn searcher(algorithm: Algorithm, depth: u8) -> Searcher<HeuristicEvaluator, StepRng> {
    let config = SearchConfig::new(algorithm, DifficultyConfig::new()).with_depth(depth);
    Searcher::with_parts(config, HeuristicEvaluator::default(), never_errs())
}

fn beginner(depth: u8, rng: StepRng) -> Searcher<HeuristicEvaluator, StepRng> {
    let mut difficulty = DifficultyConfig::new();
    assert!(difficulty.set_level(1));
    let config = SearchConfig::new(Algorithm::AlphaBeta, difficulty).with_depth(depth);
    Searcher::with_parts(config, HeuristicEvaluator::default(), rng)
}

/// Positions reached by playing random legal moves from the start.
fn random_positions(seed: u64, count: usize, plies: usize) -> Vec<(Board, Color)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::new();

    for _ in 0..count {
        let mut board = Board::starting_position();
        let mut turn = Color::White;
        for _ in 0..plies {
            let next_move = match legal_moves(&board, turn).choose(&mut rng) {
                Some(next_move) => *next_move,
                None => break,
            };
            board = next_move.apply(&board);
            turn = turn.opposite();
        }
        if !is_terminal(&board, turn) {
            positions.push((board, turn));
        }
    }

    positions
}

fn forced_capture_board() -> Board {
    checkers_position! {
        .b......
        b.......
        ...b....
        ....w...
        ........
        ........
        ........
        ........
    }
}

#[test]
fn test_opening_best_move_is_a_slide() {
    let board = Board::starting_position();
    let candidates = legal_moves(&board, Color::White);
    assert_eq!(7, candidates.len());

    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mut searcher = searcher(algorithm, 1);
        let best_move = searcher.best_move(&board, Color::White);
        println!("{} chose {:?}", algorithm, best_move);

        let best_move = best_move.unwrap();
        assert!(candidates.contains(&best_move));
        assert!(!best_move.is_capture_on(&board));
    }
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let mut positions = vec![
        (Board::starting_position(), Color::White),
        (Board::starting_position(), Color::Black),
    ];
    positions.extend(random_positions(11, 6, 12));
    positions.extend(random_positions(23, 6, 30));

    for (board, turn) in positions {
        for depth in 1..=4 {
            let mut minimax = searcher(Algorithm::Minimax, depth);
            let mut alpha_beta = searcher(Algorithm::AlphaBeta, depth);
            let candidates = legal_moves(&board, turn);

            let expected = minimax.search_moves(&board, turn, &candidates).unwrap();
            let actual = alpha_beta.search_moves(&board, turn, &candidates).unwrap();

            assert_eq!(
                expected, actual,
                "depth {} {} to move on\n{}",
                depth, turn, board
            );
            assert!(alpha_beta.stats().positions_searched <= minimax.stats().positions_searched);
        }
    }
}

#[test]
fn test_alpha_beta_prunes() {
    let board = Board::starting_position();
    let mut minimax = searcher(Algorithm::Minimax, 4);
    let mut alpha_beta = searcher(Algorithm::AlphaBeta, 4);

    minimax.best_move(&board, Color::White);
    alpha_beta.best_move(&board, Color::White);
    println!("minimax stats: {:?}", minimax.stats());
    println!("alpha-beta stats: {:?}", alpha_beta.stats());

    assert_eq!(0, minimax.stats().cutoffs);
    assert!(alpha_beta.stats().cutoffs > 0);
    assert!(alpha_beta.stats().positions_searched < minimax.stats().positions_searched);
}

#[test]
fn test_repeated_searches_agree() {
    for (board, turn) in random_positions(5, 4, 16) {
        let mut searcher = searcher(Algorithm::AlphaBeta, 3);
        let first = searcher.best_move(&board, turn);
        assert!(first.is_some());
        for _ in 0..3 {
            assert_eq!(first, searcher.best_move(&board, turn));
        }
    }
}

#[test]
fn test_forced_capture_is_chosen() {
    let board = forced_capture_board();
    let mut searcher = searcher(Algorithm::AlphaBeta, 3);
    assert_eq!(
        Some(checkers_move!((2, 3), (4, 5))),
        searcher.best_move(&board, Color::Black)
    );
}

#[test]
fn test_takes_the_last_piece() {
    let board = checkers_position! {
        ........
        ........
        ........
        ........
        ........
        ..b.b...
        ...w....
        ........
    };
    println!("Testing board:\n{}", board);

    let mut searcher = searcher(Algorithm::Minimax, 2);
    let result = searcher
        .search_moves(&board, Color::Black, &legal_moves(&board, Color::Black))
        .unwrap();
    assert_eq!(-1000.0, result.score);
    assert_eq!(Some(-1000.0), searcher.stats().last_score);
}

#[test]
fn test_no_move_on_a_finished_game() {
    let board = checkers_position! {
        ........
        ........
        ........
        ........
        ........
        ........
        ........
        w.......
    };

    let mut searcher = searcher(Algorithm::AlphaBeta, 3);
    assert_eq!(None, searcher.best_move(&board, Color::White));
    assert_eq!(None, searcher.best_move(&board, Color::Black));
}

#[test]
fn test_depth_too_low() {
    let board = Board::starting_position();
    let mut searcher = searcher(Algorithm::AlphaBeta, 0);
    let candidates = legal_moves(&board, Color::White);

    assert_eq!(
        Err(SearchError::DepthTooLow),
        searcher.search_moves(&board, Color::White, &candidates)
    );
    assert_eq!(None, searcher.best_move(&board, Color::White));
}

#[test]
fn test_no_candidates() {
    let board = Board::starting_position();
    let mut searcher = searcher(Algorithm::Minimax, 2);
    assert_eq!(
        Err(SearchError::NoAvailableMoves),
        searcher.search_moves(&board, Color::White, &[])
    );
}

#[test]
fn test_search_is_limited_to_the_given_candidates() {
    let board = Board::starting_position();
    let candidates = vec![checkers_move!((5, 6), (4, 7))];

    let mut searcher = searcher(Algorithm::AlphaBeta, 3);
    let result = searcher
        .search_moves(&board, Color::White, &candidates)
        .unwrap();
    assert_eq!(candidates[0], result.best_move);
    assert_eq!(candidates[0], result.chosen_move);
}

#[test]
fn test_error_is_injected_when_the_sample_is_low() {
    let board = Board::starting_position();
    let candidates = legal_moves(&board, Color::White);

    let mut searcher = beginner(1, always_errs());
    let result = searcher
        .search_moves(&board, Color::White, &candidates)
        .unwrap();

    assert_ne!(result.best_move, result.chosen_move);
    assert!(candidates.contains(&result.chosen_move));
    assert!(searcher.stats().injected_error);
}

#[test]
fn test_no_error_when_the_sample_is_high() {
    let board = Board::starting_position();
    let candidates = legal_moves(&board, Color::White);

    let mut searcher = beginner(1, never_errs());
    let result = searcher
        .search_moves(&board, Color::White, &candidates)
        .unwrap();

    assert_eq!(result.best_move, result.chosen_move);
    assert!(!searcher.stats().injected_error);
}

#[test]
fn test_no_error_with_a_single_candidate() {
    let board = forced_capture_board();
    let mut searcher = beginner(1, always_errs());

    assert_eq!(
        Some(checkers_move!((2, 3), (4, 5))),
        searcher.best_move(&board, Color::Black)
    );
    assert!(!searcher.stats().injected_error);
}

#[test]
fn test_expert_never_errs() {
    let board = Board::starting_position();
    let config = SearchConfig::default().with_depth(1);
    let mut searcher =
        Searcher::with_parts(config, HeuristicEvaluator::default(), always_errs());

    let result = searcher
        .search_moves(&board, Color::White, &legal_moves(&board, Color::White))
        .unwrap();
    assert_eq!(result.best_move, result.chosen_move);
}

#[test]
fn test_custom_evaluator() {
    let material = |board: &Board, _to_move: Color| {
        board.count_pieces(Color::White) as f64 - board.count_pieces(Color::Black) as f64
    };
    let mut board = Board::starting_position();
    board.put(Square::new(4, 1), Cell::BlackMan).unwrap();

    let config = SearchConfig::default().with_depth(1);
    let mut searcher = Searcher::with_parts(config, material, never_errs());
    let best_move = searcher.best_move(&board, Color::White).unwrap();

    assert!(best_move.is_capture_on(&board));
    // twelve a side once the extra man is taken
    assert_eq!(Some(0.0), searcher.stats().last_score);
}
