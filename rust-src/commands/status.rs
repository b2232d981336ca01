//! Styling for command status lines.

use crossterm::style::Stylize;


/// What a status line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Failure,
    Muted,
}


/// `text` styled for `tone`, or unchanged when colors are off.
pub fn paint(text: &str, tone: Tone, colored: bool) -> String {
    if !colored {
        return text.to_string();
    }

    let styled = match tone {
        Tone::Success => text.green(),
        Tone::Warning => text.yellow(),
        Tone::Failure => text.red().bold(),
        Tone::Muted => text.dim(),
    };
    styled.to_string()
}
