use super::super::{Board, Color, MoveList, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Adjacent cells only; castling is never generated.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_step_moves(from, color, &KING_OFFSETS, moves);
    }
}
