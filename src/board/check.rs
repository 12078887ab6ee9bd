//! King-attack detection and game-termination classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Playing,
    Checkmate,
    Stalemate,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Playing => write!(f, "playing"),
            GameState::Checkmate => write!(f, "checkmate"),
            GameState::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// True if any opponent pseudo-legal move lands on `color`'s king.
    ///
    /// A board without a king for `color` counts as attacked. Such a board
    /// cannot arise from legal play, so this path logs a warning.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            #[cfg(feature = "logging")]
            log::warn!("no {color} king on the board, treating it as attacked");
            return true;
        };

        self.pseudo_legal_moves(color.opponent())
            .iter()
            .any(|mv| mv.to == king)
    }

    /// Classify the position for `to_move`.
    #[must_use]
    pub fn game_state(&self, to_move: Color) -> GameState {
        if !self.legal_moves(to_move).is_empty() {
            GameState::Playing
        } else if self.is_king_attacked(to_move) {
            GameState::Checkmate
        } else {
            GameState::Stalemate
        }
    }
}
