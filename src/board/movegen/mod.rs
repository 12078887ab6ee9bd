//! Pseudo-legal move generation and the legality filter.
//!
//! Generation order is row-major over the board and fixed per piece kind,
//! so the same position always yields the same move sequence.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, MoveList, Piece, PieceKind, Square};

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

impl Board {
    /// Geometrically valid moves for every piece of `color`, ignoring king safety.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces_of(color) {
            self.generate_piece_moves(from, piece, &mut moves);
        }
        moves
    }

    fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let color = piece.color;
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, color, moves),
            PieceKind::Knight => self.generate_knight_moves(from, color, moves),
            PieceKind::Bishop => self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS, moves),
            PieceKind::Rook => self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS, moves),
            PieceKind::Queen => self.generate_sliding_moves(from, color, &QUEEN_DIRECTIONS, moves),
            PieceKind::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Pseudo-legal moves that do not leave `color`'s own king attacked.
    ///
    /// Each candidate is tried on a copy of the board, so the cost is one
    /// opponent scan per candidate.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        self.pseudo_legal_moves(color)
            .into_iter()
            .filter(|&mv| !self.apply_move(mv).is_king_attacked(color))
            .collect()
    }

    /// Legal moves of `color` that start on `from`.
    ///
    /// Empty when `from` does not hold a piece of `color`.
    #[must_use]
    pub fn legal_moves_from(&self, color: Color, from: Square) -> MoveList {
        match self.piece_at(from) {
            Some(piece) if piece.color == color => {
                let mut candidates = MoveList::new();
                self.generate_piece_moves(from, piece, &mut candidates);
                candidates
                    .into_iter()
                    .filter(|&mv| !self.apply_move(mv).is_king_attacked(color))
                    .collect()
            }
            _ => MoveList::new(),
        }
    }

    /// Count leaf nodes of the legal move tree, `color` moving first.
    #[must_use]
    pub fn perft(&self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| self.apply_move(mv).perft(color.opponent(), depth - 1))
            .sum()
    }
}
