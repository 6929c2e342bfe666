use common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    RestartRound,
    ResetScores,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "Commands: 1-9 place a mark (row by row from top left), r restart round, s reset scores, h help, q quit";

/// Parses one line of terminal input. Cells are typed 1-based.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "" => Err("empty command".to_string()),
        "r" | "restart" => Ok(Command::RestartRound),
        "s" | "scores" => Ok(Command::ResetScores),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => match other.parse::<usize>() {
            Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(Command::Place(cell - 1)),
            Ok(cell) => Err(format!("cell {} is out of range, use 1-{}", cell, CELL_COUNT)),
            Err(_) => Err(format!("unknown command '{}'", input)),
        },
    }
}
