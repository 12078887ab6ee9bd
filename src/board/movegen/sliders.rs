use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Ray-cast along each direction until the edge or the first occupied
    /// cell, which is included only when it holds an opponent piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(target) => {
                        if target.color != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, dc);
            }
        }
    }
}
