//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `PieceKind`, `Color` and `Piece` - piece identity and ownership
//! - `Square` - (row, col) board coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;
