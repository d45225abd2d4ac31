//! Typed commands standing in for button presses.

use super::ShellError;
use crate::core::FlowEvent;
use crate::rules::Move;

/// Map one line of input to an event. Blank lines map to `None`.
pub fn parse_command(line: &str) -> Result<Option<FlowEvent>, ShellError> {
    let word = line.trim().to_ascii_lowercase();
    let event = match word.as_str() {
        "" => return Ok(None),
        "next" | "n" | "start" => FlowEvent::AdvancePressed,
        "r" => FlowEvent::MoveSelected(Move::Rock),
        "p" => FlowEvent::MoveSelected(Move::Paper),
        "s" => FlowEvent::MoveSelected(Move::Scissors),
        "again" | "a" | "play again" => FlowEvent::PlayAgainPressed,
        "exit" | "x" => FlowEvent::ExitPressed,
        "quit" | "q" | "close" => FlowEvent::WindowClosed,
        other => match other.parse::<Move>() {
            Ok(m) => FlowEvent::MoveSelected(m),
            Err(_) => return Err(ShellError::UnknownCommand(line.trim().to_string())),
        },
    };
    Ok(Some(event))
}
