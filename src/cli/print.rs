use std::io::{self, Write};

use crate::board::{Move, MoveList};
use crate::game::Game;

pub fn print_move<W: Write>(out: &mut W, label: &str, mv: Move) -> io::Result<()> {
    writeln!(out, "{label} {mv}")
}

pub fn print_moves<W: Write>(out: &mut W, moves: &MoveList) -> io::Result<()> {
    if moves.is_empty() {
        return writeln!(out, "moves (none)");
    }
    let listed: Vec<String> = moves.iter().map(Move::to_string).collect();
    writeln!(out, "moves {}", listed.join(" "))
}

/// Result line once the game ended, otherwise a check notice if needed.
pub fn print_status<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    if let Some(outcome) = game.outcome() {
        writeln!(out, "result {outcome} ({})", game.state())
    } else if game.in_check() {
        writeln!(out, "check")
    } else {
        Ok(())
    }
}

pub fn print_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "{}", game.board())?;
    writeln!(out, "fen {}", game.board().to_fen())?;
    write!(out, "turn {}", game.turn())?;
    match game.last_move() {
        Some(mv) => writeln!(out, ", last move {mv}"),
        None => writeln!(out),
    }
}

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  new                          start a game with the current options")?;
    writeln!(out, "  set level <1-5>              computer difficulty")?;
    writeln!(out, "  set color light|dark         your side, used by the next game")?;
    writeln!(out, "  position fen <placement> [w|b]")?;
    writeln!(out, "  move <from><to>[q|r|b|n]     play your move")?;
    writeln!(out, "  go                           let the computer move")?;
    writeln!(out, "  moves [square]               legal moves for the side to move")?;
    writeln!(out, "  show | state | eval | quit")
}
