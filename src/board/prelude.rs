//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_duel::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.legal_moves(Color::Light).len(), 20);
//! ```

pub use super::{
    get_best_move, get_valid_moves, search_best_move, Board, BoardBuilder, Color, FenError,
    GameState, Level, Move, MoveList, MoveParseError, Piece, PieceKind, Square, SquareError,
};
