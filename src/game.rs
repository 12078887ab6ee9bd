//! Human-versus-computer game session.
//!
//! A [`Game`] owns the current board and whose turn it is, and classifies
//! the position after every move. Results are reported from the human's
//! side of the board.

use std::fmt;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    get_best_move_with_rng, get_valid_moves, Board, Color, GameState, Level, Move, MoveList,
    MoveParseError, PieceKind, Square,
};

/// Final result of a game, as seen by the human player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Error type for moves the session refuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already ended
    GameOver(Outcome),
    /// The other side is to move
    NotYourTurn { to_move: Color },
    /// The move is not legal in the current position
    IllegalMove(MoveParseError),
    /// The search found nothing to play
    NoLegalMoves,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver(outcome) => write!(f, "Game is over ({outcome})"),
            GameError::NotYourTurn { to_move } => write!(f, "It is {to_move}'s turn"),
            GameError::IllegalMove(e) => write!(f, "{e}"),
            GameError::NoLegalMoves => write!(f, "No legal moves available"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveParseError> for GameError {
    fn from(e: MoveParseError) -> Self {
        GameError::IllegalMove(e)
    }
}

/// One game between a human and the computer.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    human: Color,
    level: Level,
    history: Vec<Move>,
    state: GameState,
}

impl Game {
    /// Fresh game from the starting position; light moves first.
    #[must_use]
    pub fn new(human: Color, level: Level) -> Self {
        Self::from_position(Board::new(), Color::Light, human, level)
    }

    /// Game continuing from an arbitrary position with `turn` to move.
    #[must_use]
    pub fn from_position(board: Board, turn: Color, human: Color, level: Level) -> Self {
        let state = board.game_state(turn);
        Game {
            board,
            turn,
            human,
            level,
            history: Vec::new(),
            state,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn human(&self) -> Color {
        self.human
    }

    #[inline]
    #[must_use]
    pub fn computer(&self) -> Color {
        self.human.opponent()
    }

    #[inline]
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Change the difficulty; applies from the computer's next move.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Moves played in this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// State of the position for the side to move.
    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.turn == self.human
    }

    /// True while the side to move is in check and still has a move.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.state == GameState::Playing && self.board.is_king_attacked(self.turn)
    }

    /// Result once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Playing => None,
            GameState::Stalemate => Some(Outcome::Draw),
            GameState::Checkmate if self.turn == self.human => Some(Outcome::Loss),
            GameState::Checkmate => Some(Outcome::Win),
        }
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn valid_moves(&self) -> MoveList {
        get_valid_moves(&self.board, self.turn)
    }

    /// Legal moves of the piece on `from`, if it belongs to the side to move.
    #[must_use]
    pub fn moves_from(&self, from: Square) -> MoveList {
        self.board.legal_moves_from(self.turn, from)
    }

    /// Play the human's move given in coordinate notation.
    pub fn play_human(&mut self, notation: &str) -> Result<Move, GameError> {
        self.ensure_turn(self.human)?;
        let mv = self.board.parse_move(self.human, notation)?;
        self.commit(mv);
        Ok(mv)
    }

    /// Play a human move already in `Move` form.
    ///
    /// A promotion with no piece chosen is played as a queen promotion.
    pub fn play_human_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.ensure_turn(self.human)?;
        let mv = Move {
            promotion: mv.promotion.or_else(|| self.promotes(mv)),
            ..mv
        };
        if !self.valid_moves().contains(&mv) {
            return Err(GameError::IllegalMove(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            }));
        }
        self.commit(mv);
        Ok(())
    }

    /// Let the computer search and play its move, ties broken by the thread RNG.
    pub fn play_computer(&mut self) -> Result<Move, GameError> {
        self.play_computer_with_rng(&mut rand::thread_rng())
    }

    /// Let the computer search and play its move, ties broken by `rng`.
    pub fn play_computer_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move, GameError> {
        let computer = self.computer();
        self.ensure_turn(computer)?;
        let mv = get_best_move_with_rng(&self.board, computer, self.level, rng)
            .ok_or(GameError::NoLegalMoves)?;
        self.commit(mv);
        Ok(mv)
    }

    fn ensure_turn(&self, color: Color) -> Result<(), GameError> {
        if let Some(outcome) = self.outcome() {
            return Err(GameError::GameOver(outcome));
        }
        if self.turn != color {
            return Err(GameError::NotYourTurn { to_move: self.turn });
        }
        Ok(())
    }

    fn promotes(&self, mv: Move) -> Option<PieceKind> {
        let piece = self.board.piece_at(mv.from)?;
        (piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row())
            .then_some(PieceKind::Queen)
    }

    fn commit(&mut self, mv: Move) {
        self.board = self.board.apply_move(mv);
        self.history.push(mv);
        self.turn = self.turn.opponent();
        self.state = self.board.game_state(self.turn);

        #[cfg(feature = "logging")]
        match self.outcome() {
            Some(outcome) => log::info!("{mv} ends the game: {} ({outcome})", self.state),
            None => log::debug!("played {mv}, {} to move", self.turn),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Color::Light, Level::default())
    }
}
