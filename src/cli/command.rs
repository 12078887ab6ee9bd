/// One line of front-end input, split into its command and raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    New,
    Set(Vec<String>),
    Position(Vec<String>),
    Move(Option<String>),
    Go,
    Moves(Option<String>),
    Show,
    State,
    Eval,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_cli_command(line: &str) -> Option<CliCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();
    let first_arg = || parts.get(1).map(|v| (*v).to_string());

    let cmd = match parts[0] {
        "new" => CliCommand::New,
        "set" => CliCommand::Set(owned_parts()),
        "position" => CliCommand::Position(owned_parts()),
        "move" => CliCommand::Move(first_arg()),
        "go" => CliCommand::Go,
        "moves" => CliCommand::Moves(first_arg()),
        "show" | "d" => CliCommand::Show,
        "state" => CliCommand::State,
        "eval" => CliCommand::Eval,
        "help" => CliCommand::Help,
        "quit" | "exit" => CliCommand::Quit,
        _ => CliCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
