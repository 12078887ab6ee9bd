//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Leaf positions are always scored from the root mover's point of view,
//! and there is no move ordering or transposition caching.

use rand::Rng;

use super::constants::{INFINITY, MATE_SCORE};
use super::SearchStats;
use crate::board::{Board, Color, Move};

/// Per-call search state. Nothing survives between top-level searches.
#[derive(Debug, Default)]
pub struct SearchContext {
    pub stats: SearchStats,
}

impl SearchContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `board` with `depth` plies left.
    ///
    /// The side to move is `root` when `maximizing`, else `other`. At depth 0
    /// the board is evaluated for `root` regardless of the side to move.
    #[allow(clippy::too_many_arguments)]
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Color,
        other: Color,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return board.evaluate(root);
        }

        let to_move = if maximizing { root } else { other };
        let moves = board.legal_moves(to_move);

        if moves.is_empty() {
            return if !board.is_king_attacked(to_move) {
                0
            } else if maximizing {
                -MATE_SCORE
            } else {
                MATE_SCORE
            };
        }

        if maximizing {
            let mut best = -INFINITY;
            for &mv in &moves {
                let child = board.apply_move(mv);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, false, root, other);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for &mv in &moves {
                let child = board.apply_move(mv);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, true, root, other);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Pick `color`'s move by searching every legal root move `depth` plies.
    ///
    /// Each root move gets a fresh full window. Exact ties with the current
    /// best replace it when `rng` flips heads.
    pub fn search_root<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        color: Color,
        depth: u32,
        rng: &mut R,
    ) -> Option<Move> {
        let moves = board.legal_moves(color);
        let mut best_move = moves.first()?;
        let mut best_score = -INFINITY;
        let opponent = color.opponent();
        let child_depth = depth.saturating_sub(1);

        for &mv in &moves {
            let child = board.apply_move(mv);
            let score =
                self.alpha_beta(&child, child_depth, -INFINITY, INFINITY, false, color, opponent);

            #[cfg(feature = "logging")]
            log::debug!("root {mv} scored {score}");

            if score > best_score {
                best_score = score;
                best_move = mv;
            } else if score == best_score && rng.gen_bool(0.5) {
                #[cfg(feature = "logging")]
                log::trace!("tie at {score}: {mv} replaces {best_move}");
                best_move = mv;
            }
        }

        self.stats.best_score = Some(best_score);
        Some(best_move)
    }
}
