//! The screens of the game.

use crate::rules::GameRound;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The view currently presented to the player.
///
/// Exactly one screen is active at a time. `Result` carries the round it
/// displays; `Closed` is terminal and renders nothing.
///
/// # Example
///
/// ```rust
/// use roshambo::core::{Screen, ScreenKind};
/// use roshambo::rules::{GameRound, Move};
///
/// let screen = Screen::Result(GameRound::new(Move::Rock, Move::Paper));
/// assert_eq!(screen.kind(), ScreenKind::Result);
/// assert!(screen.round().is_some());
/// assert!(!screen.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Welcome,
    Choice,
    Result(GameRound),
    Closed,
}

impl Screen {
    /// The data-free discriminant, used to key transitions.
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Welcome => ScreenKind::Welcome,
            Self::Choice => ScreenKind::Choice,
            Self::Result(_) => ScreenKind::Result,
            Self::Closed => ScreenKind::Closed,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Final screens accept no further events.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// The round shown on a result screen.
    pub fn round(&self) -> Option<&GameRound> {
        match self {
            Self::Result(round) => Some(round),
            _ => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which screen, without the data it carries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ScreenKind {
    Welcome,
    Choice,
    Result,
    Closed,
}

impl ScreenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Choice => "Choice",
            Self::Result => "Result",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
