//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_duel::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::Light, PieceKind::King)
//!     .piece(Square(0, 4), Color::Dark, PieceKind::King)
//!     .piece(Square(6, 0), Color::Light, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.occupied().count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().occupied().collect(),
        }
    }

    /// Place an unmoved piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.placed(square, Piece::new(kind, color))
    }

    /// Place a piece that is flagged as having moved.
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        let mut piece = Piece::new(kind, color);
        piece.has_moved = true;
        self.placed(square, piece)
    }

    fn placed(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        board
    }
}
