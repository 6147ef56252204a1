//! Built-in command table for the toy terminal.

pub(crate) const PROMPT: &str = "$";
pub(crate) const WELCOME_BANNER: &str = "Welcome to Long OS v0.3.0";
pub(crate) const WELCOME_HINT: &str = "Type \"help\" for a list of commands.";

const HELP_LINES: [&str; 5] = [
    "Available commands:",
    "  ls        List files",
    "  uname -a  Show system info",
    "  clear     Clear terminal",
    "  help      Show this help message",
];

/// Result of running one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandOutcome {
    /// Lines to append below the prompt.
    Output(Vec<String>),
    /// Unknown command message.
    NotFound(String),
    /// Wipe the transcript.
    Clear,
    /// Blank line; nothing is printed.
    Empty,
}

pub(crate) fn run_command(line: &str) -> CommandOutcome {
    let command = line.trim();
    match command {
        "" => CommandOutcome::Empty,
        "help" => CommandOutcome::Output(HELP_LINES.iter().map(|line| line.to_string()).collect()),
        "ls" => CommandOutcome::Output(vec![
            "Documents  Downloads  Music  Pictures  Videos".to_string(),
        ]),
        "uname -a" => CommandOutcome::Output(vec![
            "LongOS v0.3.0 (Leptos Kernel) wasm32 GNU/Linux".to_string(),
        ]),
        "clear" => CommandOutcome::Clear,
        other => CommandOutcome::NotFound(format!("Command not found: {other}")),
    }
}

/// Moves through previously submitted commands. `direction` is `-1` for older, `1` for newer.
pub(crate) fn navigate_history(
    history: &[String],
    cursor: Option<usize>,
    direction: i32,
) -> Option<usize> {
    if history.is_empty() {
        return None;
    }
    match (cursor, direction) {
        (None, -1) => Some(history.len() - 1),
        (Some(index), -1) if index > 0 => Some(index - 1),
        (Some(index), 1) if index + 1 < history.len() => Some(index + 1),
        (Some(_), 1) => None,
        (current, _) => current,
    }
}
