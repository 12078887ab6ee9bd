use std::env;

use chess_duel::board::{Board, Color};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...");
        return;
    }

    let mut board = Board::new();
    let mut to_move = Color::Light;
    for notation in args.iter().skip(1) {
        match board.parse_move(to_move, notation) {
            Ok(mv) => {
                board = board.apply_move(mv);
                to_move = to_move.opponent();
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    let legal_moves = board.legal_moves(to_move);
    println!("side_to_move: {to_move}");
    println!("legal_moves: {}", legal_moves.len());
    println!("state: {}", board.game_state(to_move));
    println!("in_check: {}", board.is_king_attacked(to_move));
    for mv in &legal_moves {
        println!("{mv}");
    }
}
