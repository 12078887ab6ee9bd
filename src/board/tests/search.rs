//! Search algorithm tests.
//!
//! Tests for alpha-beta scoring, pruning equivalence and root move selection.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{
    alpha_beta, search_best_move, search_best_move_with_rng, Board, Color, Move, SearchContext,
    INFINITY, MATE_SCORE,
};

fn sq(name: &str) -> crate::board::Square {
    name.parse().expect("valid square")
}

/// Plain minimax with the same leaf and terminal conventions, no pruning.
fn minimax(board: &Board, depth: u32, maximizing: bool, root: Color, other: Color) -> i32 {
    if depth == 0 {
        return board.evaluate(root);
    }
    let to_move = if maximizing { root } else { other };
    let moves = board.legal_moves(to_move);
    if moves.is_empty() {
        if !board.is_king_attacked(to_move) {
            return 0;
        }
        return if maximizing { -MATE_SCORE } else { MATE_SCORE };
    }
    let scores = moves
        .iter()
        .map(|&mv| minimax(&board.apply_move(mv), depth - 1, !maximizing, root, other));
    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

#[test]
fn depth_zero_returns_root_evaluation() {
    let board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R");
    for maximizing in [true, false] {
        let mut ctx = SearchContext::new();
        let score = ctx.alpha_beta(&board, 0, -INFINITY, INFINITY, maximizing, Color::Dark, Color::Light);
        assert_eq!(score, board.evaluate(Color::Dark));
        assert_eq!(ctx.stats.nodes, 1, "no recursion at depth 0");
    }
}

#[test]
fn alpha_beta_matches_plain_minimax() {
    let positions = [
        ("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R", 2),
        ("6k1/5ppp/8/8/8/8/8/R5K1", 3),
        ("4k3/8/3q4/8/3P4/2N5/8/4K3", 3),
    ];
    for (fen, depth) in positions {
        let board = Board::from_fen(fen);
        for root in Color::BOTH {
            for maximizing in [true, false] {
                let other = root.opponent();
                let pruned = alpha_beta(&board, depth, -INFINITY, INFINITY, maximizing, root, other);
                let full = minimax(&board, depth, maximizing, root, other);
                assert_eq!(pruned, full, "{fen} depth {depth} root {root} max {maximizing}");
            }
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    let board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R");
    let mut ctx = SearchContext::new();
    ctx.alpha_beta(&board, 3, -INFINITY, INFINITY, true, Color::Light, Color::Dark);
    let full_tree: u64 = (0..=3).map(|d| board.perft(Color::Light, d)).sum();
    assert!(ctx.stats.cutoffs > 0);
    assert!(ctx.stats.nodes < full_tree);
}

#[test]
fn mate_scores_are_signed_by_side_to_move() {
    let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1");
    // Dark is mated: as the minimizing side it is good for the light root
    assert_eq!(alpha_beta(&mated, 2, -INFINITY, INFINITY, false, Color::Light, Color::Dark), MATE_SCORE);
    // As the maximizing root, dark sees its own loss
    assert_eq!(alpha_beta(&mated, 2, -INFINITY, INFINITY, true, Color::Dark, Color::Light), -MATE_SCORE);

    let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8");
    assert_eq!(alpha_beta(&stalemate, 3, -INFINITY, INFINITY, true, Color::Dark, Color::Light), 0);
}

#[test]
fn finds_back_rank_mate() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1");
    let mut rng = StdRng::seed_from_u64(1);
    let best = search_best_move_with_rng(&board, Color::Light, 2, &mut rng).unwrap();
    assert_eq!(best, Move::new(sq("a1"), sq("a8")));
}

#[test]
fn captures_hanging_rook_at_depth_one() {
    let board = Board::from_fen("7k/8/8/3r4/8/8/8/3QK3");
    let mut rng = StdRng::seed_from_u64(3);
    let best = search_best_move_with_rng(&board, Color::Light, 1, &mut rng).unwrap();
    assert_eq!(best, Move::new(sq("d1"), sq("d5")));
}

#[test]
fn single_legal_move_is_returned_at_any_depth() {
    let board = Board::from_fen("k7/8/1Q6/8/7p/8/8/2K5");
    assert_eq!(board.legal_moves(Color::Dark).len(), 1);
    let only = Move::new(sq("h4"), sq("h3"));
    for depth in 0..=3 {
        assert_eq!(search_best_move(&board, Color::Dark, depth), Some(only));
    }
}

#[test]
fn no_legal_moves_returns_none() {
    let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8");
    assert_eq!(search_best_move(&stalemate, Color::Dark, 2), None);

    let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1");
    assert_eq!(search_best_move(&mated, Color::Dark, 3), None);
}

#[test]
fn seeded_tie_break_is_reproducible() {
    let board = Board::new();
    let pick = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        search_best_move_with_rng(&board, Color::Dark, 1, &mut rng)
    };
    for seed in [0, 7, 42] {
        assert_eq!(pick(seed), pick(seed));
    }
}

#[test]
fn tie_break_spreads_over_equal_moves() {
    // Bare kings: every king step scores 0 at depth 1
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3");
    let legal = board.legal_moves(Color::Light);
    let chosen: HashSet<Move> = (0..64)
        .filter_map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            search_best_move_with_rng(&board, Color::Light, 1, &mut rng)
        })
        .collect();
    assert!(chosen.len() > 1);
    assert!(chosen.iter().all(|mv| legal.contains(mv)));
}

#[test]
fn root_score_is_recorded() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1");
    let mut ctx = SearchContext::new();
    let mut rng = StdRng::seed_from_u64(5);
    ctx.search_root(&board, Color::Light, 2, &mut rng);
    assert_eq!(ctx.stats.best_score, Some(MATE_SCORE));
}
