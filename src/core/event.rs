//! User inputs that drive the screen flow.

use crate::rules::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete user action, one per button on screen.
///
/// `WindowClosed` stands for the window manager closing the window, which
/// may happen on any screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FlowEvent {
    AdvancePressed,
    MoveSelected(Move),
    PlayAgainPressed,
    ExitPressed,
    WindowClosed,
}

impl FlowEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::AdvancePressed => EventKind::Advance,
            Self::MoveSelected(_) => EventKind::SelectMove,
            Self::PlayAgainPressed => EventKind::PlayAgain,
            Self::ExitPressed => EventKind::Exit,
            Self::WindowClosed => EventKind::CloseWindow,
        }
    }

    /// The move carried by a selection event.
    pub fn selected_move(&self) -> Option<Move> {
        match self {
            Self::MoveSelected(m) => Some(*m),
            _ => None,
        }
    }
}

impl fmt::Display for FlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveSelected(m) => write!(f, "MoveSelected({m})"),
            other => f.write_str(other.kind().name()),
        }
    }
}

/// Which event, without the move it may carry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EventKind {
    Advance,
    SelectMove,
    PlayAgain,
    Exit,
    CloseWindow,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Advance => "AdvancePressed",
            Self::SelectMove => "MoveSelected",
            Self::PlayAgain => "PlayAgainPressed",
            Self::Exit => "ExitPressed",
            Self::CloseWindow => "WindowClosed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
