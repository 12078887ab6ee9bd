use super::pst::{is_center, CENTER_BONUS, KNIGHT_TABLE, PAWN_TABLE};
use super::{Board, Color, Piece, PieceKind, Square};

/// Rows between `sq` and `color`'s own back row.
#[inline]
fn advance(color: Color, sq: Square) -> usize {
    match color {
        Color::Light => 7 - sq.row(),
        Color::Dark => sq.row(),
    }
}

/// Positional bonus for one piece on one square.
pub(crate) fn positional_bonus(piece: Piece, sq: Square) -> i32 {
    let col = sq.col();
    match piece.kind {
        PieceKind::Pawn => PAWN_TABLE[advance(piece.color, sq)][col],
        PieceKind::Knight => KNIGHT_TABLE[advance(piece.color, sq)][col],
        PieceKind::Queen | PieceKind::Bishop if is_center(sq.row(), col) => CENTER_BONUS,
        _ => 0,
    }
}

impl Board {
    /// Material plus positional score from `perspective`'s point of view.
    ///
    /// Each piece contributes its value plus its positional bonus, added for
    /// `perspective`'s pieces and subtracted for the opponent's.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.occupied()
            .map(|(sq, piece)| {
                let value = piece.kind.value() + positional_bonus(piece, sq);
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
