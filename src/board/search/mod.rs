//! Search module: minimax with alpha-beta pruning over legal moves.
//!
//! Features:
//! - Fixed-depth alpha-beta, scored from the root mover's perspective
//! - Difficulty levels mapped to search depth
//! - Randomized tie-break between equally scored root moves, driven by an
//!   injectable random source

mod constants;
mod level;
mod minimax;

use rand::Rng;

use super::{Board, Color, Move};

pub use constants::{INFINITY, MATE_SCORE};
pub use level::{Level, LevelError};
pub use minimax::SearchContext;

/// Statistics tracked during one search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `alpha_beta`, including the depth-0 leaves
    pub nodes: u64,
    /// Branches cut off by the alpha-beta window
    pub cutoffs: u64,
    /// Score of the chosen root move
    pub best_score: Option<i32>,
}

/// Score `board` with the alpha-beta recursion; see [`SearchContext::alpha_beta`].
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    root: Color,
    other: Color,
) -> i32 {
    SearchContext::new().alpha_beta(board, depth, alpha, beta, maximizing, root, other)
}

/// Best move for `color` at `depth` plies, ties broken by the thread RNG.
///
/// Returns `None` when `color` has no legal moves.
#[must_use]
pub fn search_best_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    search_best_move_with_rng(board, color, depth, &mut rand::thread_rng())
}

/// Best move for `color` at `depth` plies, ties broken by `rng`.
pub fn search_best_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    depth: u32,
    rng: &mut R,
) -> Option<Move> {
    let mut ctx = SearchContext::new();
    let best = ctx.search_root(board, color, depth, rng);

    #[cfg(feature = "logging")]
    log::debug!(
        "searched depth {depth} for {color}: {} nodes, {} cutoffs, best {:?}",
        ctx.stats.nodes,
        ctx.stats.cutoffs,
        best
    );

    best
}

/// The computer's move at difficulty `level`.
///
/// # Example
/// ```
/// use chess_duel::board::{get_best_move, Board, Color, Level};
///
/// let board = Board::new();
/// let mv = get_best_move(&board, Color::Dark, Level::MIN);
/// assert!(mv.is_some());
/// ```
#[must_use]
pub fn get_best_move(board: &Board, color: Color, level: Level) -> Option<Move> {
    search_best_move(board, color, level.depth())
}

/// The computer's move at difficulty `level`, ties broken by `rng`.
pub fn get_best_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    level: Level,
    rng: &mut R,
) -> Option<Move> {
    search_best_move_with_rng(board, color, level.depth(), rng)
}
