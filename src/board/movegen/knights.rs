use super::super::{Board, Color, Move, MoveList, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_step_moves(from, color, &KNIGHT_OFFSETS, moves);
    }

    /// Single-step targets: empty or opponent-occupied cells on the board.
    pub(super) fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
}
