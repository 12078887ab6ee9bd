use std::fmt;

use super::{Color, Move, Piece, PieceKind, Square};

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, row-major, row 0 = dark back rank.
///
/// Boards are treated as values: `apply_move` returns a new board and leaves
/// `self` untouched. Cells hold `Copy` pieces, so a clone never aliases.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting arrangement: dark on rows 0-1, light on rows 6-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (col, &kind) in BACK_ROW.iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(kind, color));
                board.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// A board with no pieces on it
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.0][sq.1] = Some(piece);
    }

    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1].take()
    }

    /// True if `sq` holds a piece of the opposite color to `color`
    #[inline]
    pub(crate) fn is_opponent(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color != color)
    }

    /// Iterate over occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterate over the pieces of one color in row-major order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    /// First king of `color` in row-major order
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Apply a move and return the resulting board.
    ///
    /// No legality check is performed. The moved piece is marked as moved
    /// and replaced by the promotion kind if one is set. An empty origin
    /// yields an unchanged copy.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let Some(mut piece) = next.remove_piece(mv.from) else {
            return next;
        };
        piece.has_moved = true;
        if let Some(kind) = mv.promotion {
            piece.kind = kind;
        }
        next.set_piece(mv.to, piece);
        next
    }

    /// Count of pieces per color, light first
    #[must_use]
    pub fn piece_counts(&self) -> (usize, usize) {
        self.occupied()
            .fold((0, 0), |(light, dark), (_, p)| match p.color {
                Color::Light => (light + 1, dark),
                Color::Dark => (light, dark + 1),
            })
    }
}

/// Plain text diagram, dark side at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
