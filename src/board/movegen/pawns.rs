use super::super::{Board, Color, Move, MoveList, Square, PROMOTION_KINDS};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_row = color.promotion_row();

        if let Some(one) = from.offset(dir, 0) {
            if self.piece_at(one).is_none() {
                push_pawn_move(from, one, promotion_row, moves);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.piece_at(two).is_none() {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.is_opponent(target, color) {
                    push_pawn_move(from, target, promotion_row, moves);
                }
            }
        }
    }
}

/// A move onto the far row is emitted once per promotion kind.
fn push_pawn_move(from: Square, to: Square, promotion_row: usize, moves: &mut MoveList) {
    if to.row() == promotion_row {
        for kind in PROMOTION_KINDS {
            moves.push(Move::new_promotion(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
