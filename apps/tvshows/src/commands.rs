//! Commands typed at the interactive prompt.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleSort,
    Retry,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "commands: [s]ort toggle, [r]etry, [h]elp, [q]uit";

impl Command {
    /// `None` for blank input.
    pub fn parse(input: &str) -> Option<Result<Self, String>> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let command = match input.to_ascii_lowercase().as_str() {
            "s" | "sort" => Self::ToggleSort,
            "r" | "retry" => Self::Retry,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Some(Err(format!("unknown command '{input}'; {HELP_TEXT}"))),
        };
        Some(Ok(command))
    }
}
