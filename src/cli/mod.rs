//! Line-oriented text front-end for playing against the engine.
//!
//! Reads one command per line and answers on the output stream. After each
//! human move the computer replies immediately unless the game has ended.

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Color, FenError, LevelError, SquareError};
use crate::game::{Game, GameError};

pub mod command;
pub mod options;
pub mod print;

use command::{parse_cli_command, CliCommand};
use options::{parse_set, CliOptionAction, CliOptions};

/// Error type for front-end commands
#[derive(Debug)]
pub enum CliError {
    /// Command word not recognized
    UnknownCommand(String),
    /// A required argument was left out
    MissingArgument(&'static str),
    /// `set` named an option that does not exist
    UnknownOption(String),
    /// Color name other than light or dark
    InvalidColor(String),
    InvalidLevel(LevelError),
    InvalidFen(FenError),
    InvalidSquare(SquareError),
    /// The game refused the move
    Game(GameError),
    /// Writing the response failed
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnknownCommand(line) => write!(f, "Unknown command '{line}'"),
            CliError::MissingArgument(what) => write!(f, "Missing {what}"),
            CliError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            CliError::InvalidColor(name) => {
                write!(f, "Invalid color '{name}', expected light or dark")
            }
            CliError::InvalidLevel(e) => write!(f, "{e}"),
            CliError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            CliError::InvalidSquare(e) => write!(f, "{e}"),
            CliError::Game(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidLevel(e) => Some(e),
            CliError::InvalidFen(e) => Some(e),
            CliError::InvalidSquare(e) => Some(e),
            CliError::Game(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LevelError> for CliError {
    fn from(e: LevelError) -> Self {
        CliError::InvalidLevel(e)
    }
}

impl From<FenError> for CliError {
    fn from(e: FenError) -> Self {
        CliError::InvalidFen(e)
    }
}

impl From<SquareError> for CliError {
    fn from(e: SquareError) -> Self {
        CliError::InvalidSquare(e)
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        CliError::Game(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

/// A running front-end: the current game, the options and the tie-break RNG.
pub struct CliSession {
    game: Game,
    options: CliOptions,
    rng: StdRng,
}

impl CliSession {
    /// Session whose computer tie-breaks are seeded from OS entropy.
    #[must_use]
    pub fn new(options: CliOptions) -> Self {
        Self::with_rng(options, StdRng::from_entropy())
    }

    /// Session with reproducible computer moves.
    #[must_use]
    pub fn with_seed(options: CliOptions, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    fn with_rng(options: CliOptions, rng: StdRng) -> Self {
        CliSession {
            game: Game::new(options.human, options.level),
            options,
            rng,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn options(&self) -> &CliOptions {
        &self.options
    }

    /// Run one command. Returns `Ok(false)` when the session should end.
    pub fn execute<W: Write>(&mut self, command: CliCommand, out: &mut W) -> Result<bool, CliError> {
        match command {
            CliCommand::New => {
                self.game = Game::new(self.options.human, self.options.level);
                writeln!(
                    out,
                    "new game, you play {} at level {}",
                    self.options.human, self.options.level
                )?;
                self.computer_reply(out)?;
            }
            CliCommand::Set(parts) => self.handle_set(&parts, out)?,
            CliCommand::Position(parts) => self.handle_position(&parts, out)?,
            CliCommand::Move(notation) => {
                let notation = notation.ok_or(CliError::MissingArgument("move"))?;
                let mv = self.game.play_human(&notation)?;
                print::print_move(out, "move", mv)?;
                print::print_status(out, &self.game)?;
                self.computer_reply(out)?;
            }
            CliCommand::Go => {
                let mv = self.game.play_computer_with_rng(&mut self.rng)?;
                print::print_move(out, "bestmove", mv)?;
                print::print_status(out, &self.game)?;
            }
            CliCommand::Moves(square) => {
                let moves = match square {
                    Some(name) => self.game.moves_from(name.parse()?),
                    None => self.game.valid_moves(),
                };
                print::print_moves(out, &moves)?;
            }
            CliCommand::Show => print::print_board(out, &self.game)?,
            CliCommand::State => {
                writeln!(out, "state {}", self.game.state())?;
                print::print_status(out, &self.game)?;
            }
            CliCommand::Eval => {
                let turn = self.game.turn();
                writeln!(out, "eval {} for {turn}", self.game.board().evaluate(turn))?;
            }
            CliCommand::Help => print::print_help(out)?,
            CliCommand::Quit => return Ok(false),
            CliCommand::Unknown(line) => return Err(CliError::UnknownCommand(line)),
        }
        Ok(true)
    }

    fn handle_set<W: Write>(&mut self, parts: &[String], out: &mut W) -> Result<(), CliError> {
        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
        let Some((name, value)) = parse_set(&parts) else {
            self.options.print(out)?;
            return Ok(());
        };
        if let Some(CliOptionAction::ChangeLevel(level)) =
            self.options.apply_set(&name, value.as_deref())?
        {
            self.game.set_level(level);
        }
        self.options.print(out)?;
        Ok(())
    }

    fn handle_position<W: Write>(&mut self, parts: &[String], out: &mut W) -> Result<(), CliError> {
        let (board, turn) = match parts.get(1).map(String::as_str) {
            Some("startpos") => (Board::new(), Color::Light),
            Some("fen") => {
                if parts.len() < 3 {
                    return Err(CliError::MissingArgument("FEN placement"));
                }
                Board::try_from_fen_with_side(&parts[2..].join(" "))?
            }
            _ => return Err(CliError::MissingArgument("startpos or fen")),
        };
        self.game = Game::from_position(board, turn, self.options.human, self.options.level);
        writeln!(out, "position set, {turn} to move")?;
        print::print_status(out, &self.game)?;
        Ok(())
    }

    fn computer_reply<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        if self.game.is_over() || self.game.is_human_turn() {
            return Ok(());
        }
        let mv = self.game.play_computer_with_rng(&mut self.rng)?;
        print::print_move(out, "bestmove", mv)?;
        print::print_status(out, &self.game)?;
        Ok(())
    }
}

/// Read commands from `input` until `quit` or end of input.
///
/// Command errors are reported on `out` and the loop continues; only I/O
/// failures end it early.
pub fn run_cli_loop<R: BufRead, W: Write>(
    session: &mut CliSession,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_cli_command(&line) else {
            continue;
        };

        #[cfg(feature = "logging")]
        log::trace!("command {command:?}");

        match session.execute(command, out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(CliError::Io(e)) => return Err(e),
            Err(e) => writeln!(out, "error: {e}")?,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameState, Level};

    fn run(session: &mut CliSession, script: &str) -> String {
        let mut out = Vec::new();
        run_cli_loop(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_move_gets_a_reply() {
        let mut session = CliSession::with_seed(CliOptions::default(), 1);
        let output = run(&mut session, "move e2e4\n");
        assert!(output.contains("move e2e4"));
        assert!(output.contains("bestmove"));
        assert_eq!(session.game().history().len(), 2);
        assert_eq!(session.game().turn(), Color::Light);
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let mut session = CliSession::with_seed(CliOptions::default(), 1);
        let output = run(&mut session, "fly\nmove e2e5\nmoves g1\n");
        assert!(output.contains("error: Unknown command 'fly'"));
        assert!(output.contains("error: Illegal move"));
        assert!(output.contains("moves g1f3 g1h3"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = CliSession::with_seed(CliOptions::default(), 1);
        run(&mut session, "quit\nmove e2e4\n");
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn test_dark_human_sees_computer_open() {
        let mut session = CliSession::with_seed(CliOptions::default(), 9);
        run(&mut session, "set color dark\nnew\n");
        assert_eq!(session.game().human(), Color::Dark);
        assert_eq!(session.game().history().len(), 1);
        assert!(session.game().is_human_turn());
    }

    #[test]
    fn test_set_level_applies_to_game() {
        let mut session = CliSession::with_seed(CliOptions::default(), 1);
        let output = run(&mut session, "set level 4\n");
        assert!(output.contains("option level 4"));
        assert_eq!(session.game().level(), Level::new(4).unwrap());
    }

    #[test]
    fn test_position_and_mate() {
        let mut session = CliSession::with_seed(CliOptions::default(), 1);
        let output = run(&mut session, "position fen 6k1/5ppp/8/8/8/8/8/R5K1 w\nmove a1a8\nstate\n");
        assert!(output.contains("result win (checkmate)"));
        assert!(output.contains("state checkmate"));
        assert_eq!(session.game().state(), GameState::Checkmate);
    }

    #[test]
    fn test_bad_position_is_reported() {
        let mut session = CliSession::with_seed(CliOptions::default(), 1);
        let output = run(&mut session, "position fen 8/8/8\n");
        assert!(output.contains("error: Invalid FEN"));
    }
}
