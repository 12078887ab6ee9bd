//! Board representation, rules and search.
//!
//! The board is a plain 8x8 grid of optional pieces. Every rule query takes
//! the board by shared reference and moves are applied functionally, so a
//! caller's board is never mutated by the engine.
//!
//! # Example
//! ```
//! use chess_duel::board::{Board, Color, GameState};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::Light);
//! assert_eq!(moves.len(), 20);
//! assert_eq!(board.game_state(Color::Light), GameState::Playing);
//! ```

mod builder;
mod check;
mod error;
mod eval;
mod fen;
mod movegen;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use check::GameState;
pub use error::{FenError, MoveParseError, SquareError};
pub use state::Board;
pub use types::{Color, Move, MoveList, Piece, PieceKind, Square};

pub use search::{
    alpha_beta, get_best_move, get_best_move_with_rng, search_best_move,
    search_best_move_with_rng, Level, LevelError, SearchContext, SearchStats, INFINITY,
    MATE_SCORE,
};

pub(crate) use types::PROMOTION_KINDS;

/// Legal moves for `color`; drives both the search and human move validation.
#[must_use]
pub fn get_valid_moves(board: &Board, color: Color) -> MoveList {
    board.legal_moves(color)
}
