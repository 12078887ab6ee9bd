use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Color, Move, Piece, PieceKind, Square};

impl Board {
    /// Parse the piece-placement field of a FEN string.
    ///
    /// Any trailing fields are ignored; use `try_from_fen_with_side` to read
    /// the side to move as well. FEN rank 8 maps to row 0. Pawns standing
    /// off their starting row are flagged as moved.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    if col > 8 {
                        return Err(FenError::TooManyFiles { rank: row, files: col });
                    }
                    continue;
                }
                let mut piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: row,
                        files: col + 1,
                    });
                }
                if piece.kind == PieceKind::Pawn && row != piece.color.pawn_start_row() {
                    piece.has_moved = true;
                }
                board.set_piece(Square(row, col), piece);
                col += 1;
            }
            if col < 8 {
                return Err(FenError::TooFewFiles { rank: row, files: col });
            }
        }

        Ok(board)
    }

    /// Parse placement plus the optional side-to-move field (`w` = light,
    /// `b` = dark). A missing field means light to move.
    pub fn try_from_fen_with_side(fen: &str) -> Result<(Self, Color), FenError> {
        let board = Board::try_from_fen(fen)?;
        let side = match fen.split_whitespace().nth(1) {
            None | Some("w") => Color::Light,
            Some("b") => Color::Dark,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        Ok((board, side))
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Piece-placement field of this board in FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for cells in &self.cells {
            let mut row = String::new();
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q") for `color`.
    ///
    /// Returns the matching legal move. A promotion written without a suffix
    /// resolves to the queen promotion.
    ///
    /// # Example
    /// ```
    /// use chess_duel::board::{Board, Color};
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move(Color::Light, "e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, color: Color, notation: &str) -> Result<Move, MoveParseError> {
        if !notation.is_ascii() || notation.len() < 4 || notation.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match notation[4..].chars().next() {
            Some(c) => {
                let kind = PieceKind::from_char(c)
                    .filter(|k| k.is_promotion_choice())
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(kind)
            }
            None => None,
        };

        let legal = self.legal_moves_from(color, from);
        let wanted = |mv: &&Move| mv.to == to && mv.promotion == promotion;
        let implicit_queen =
            |mv: &&Move| mv.to == to && promotion.is_none() && mv.promotion == Some(PieceKind::Queen);

        legal
            .iter()
            .find(wanted)
            .or_else(|| legal.iter().find(implicit_queen))
            .copied()
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_fen_round_trip() {
        let board = Board::try_from_fen(START_PLACEMENT).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_PLACEMENT);
    }

    #[test]
    fn test_fen_orientation() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3");
        let dark_king = board.piece_at(Square(0, 4)).unwrap();
        assert_eq!(dark_king.color, Color::Dark);
        let light_king = board.piece_at(Square(7, 4)).unwrap();
        assert_eq!(light_king.color, Color::Light);
    }

    #[test]
    fn test_fen_side_to_move() {
        let (_, side) = Board::try_from_fen_with_side("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(side, Color::Dark);
        let (_, side) = Board::try_from_fen_with_side("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(side, Color::Light);
        let result = Board::try_from_fen_with_side("4k3/8/8/8/8/8/8/4K3 x");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_moved_pawn_flag() {
        let board = Board::from_fen("4k3/8/8/8/4P3/8/P7/4K3");
        assert!(board.piece_at("e4".parse().unwrap()).unwrap().has_moved);
        assert!(!board.piece_at("a2".parse().unwrap()).unwrap().has_moved);
    }

    #[test]
    fn test_fen_errors() {
        assert!(matches!(Board::try_from_fen(""), Err(FenError::Empty)));
        assert!(matches!(
            Board::try_from_fen("8/8/8"),
            Err(FenError::WrongRankCount { found: 3 })
        ));
        assert!(matches!(
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(FenError::InvalidPiece { char: 'x' })
        ));
        assert!(matches!(
            Board::try_from_fen("rnbqkbnrr/8/8/8/8/8/8/8"),
            Err(FenError::TooManyFiles { .. })
        ));
        assert!(matches!(
            Board::try_from_fen("7/8/8/8/8/8/8/8"),
            Err(FenError::TooFewFiles { .. })
        ));
    }

    #[test]
    fn test_parse_move_e2e4() {
        let board = Board::new();
        let mv = board.parse_move(Color::Light, "e2e4").unwrap();
        assert_eq!(mv.from, Square(6, 4));
        assert_eq!(mv.to, Square(4, 4));
    }

    #[test]
    fn test_parse_move_promotion() {
        let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5");
        let mv = board.parse_move(Color::Light, "a7a8n").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
        let implicit = board.parse_move(Color::Light, "a7a8").unwrap();
        assert_eq!(implicit.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn test_parse_move_errors() {
        let board = Board::new();
        assert!(matches!(
            board.parse_move(Color::Light, "e2"),
            Err(MoveParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            board.parse_move(Color::Light, "z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_move(Color::Light, "e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert!(matches!(
            board.parse_move(Color::Dark, "e2e4"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        let promo = Board::from_fen("8/P7/8/8/8/8/8/K1k5");
        assert!(matches!(
            promo.parse_move(Color::Light, "a7a8k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_PLACEMENT.parse().unwrap();
        assert_eq!(board, Board::new());
    }
}
