use std::io;

use chess_duel::cli::options::CliOptions;
use chess_duel::cli::{run_cli_loop, CliSession};

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let mut session = CliSession::new(CliOptions::default());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_cli_loop(&mut session, stdin.lock(), &mut stdout) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
