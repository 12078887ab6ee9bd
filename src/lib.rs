pub mod board;
pub mod cli;
pub mod game;

pub use board::{get_best_move, get_valid_moves, Board, Color, GameState, Level, Move, Piece, PieceKind, Square};
pub use game::{Game, GameError, Outcome};
