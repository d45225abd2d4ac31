//! Moves, outcomes and the resolution rule.

use super::error::RulesError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three hand shapes.
///
/// The set is fixed; there is no way to configure additional moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Every move, in display order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Lowercase name, also used to locate the move's image asset.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    /// Capitalised label as shown on the choice buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }

    /// The move this one defeats.
    ///
    /// ```rust
    /// use roshambo::rules::Move;
    ///
    /// assert_eq!(Move::Rock.beats(), Move::Scissors);
    /// assert_eq!(Move::Scissors.beats(), Move::Paper);
    /// assert_eq!(Move::Paper.beats(), Move::Rock);
    /// ```
    pub fn beats(&self) -> Move {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// The move that defeats this one.
    pub fn beaten_by(&self) -> Move {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err(RulesError::InvalidMove(s.to_string())),
        }
    }
}

impl TryFrom<usize> for Move {
    type Error = RulesError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(RulesError::InvalidIndex(index))
    }
}

/// Result of a round from the user's point of view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Tie => "tie",
        }
    }

    /// The same round seen from the other side of the table.
    pub fn reversed(&self) -> Outcome {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Tie => Self::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decide a round.
///
/// Equal moves tie. Otherwise the user wins exactly when their move beats
/// the computer's: rock over scissors, paper over rock, scissors over paper.
///
/// ```rust
/// use roshambo::rules::{resolve, Move, Outcome};
///
/// assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
/// assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::Lose);
/// assert_eq!(resolve(Move::Paper, Move::Paper), Outcome::Tie);
/// ```
pub fn resolve(user: Move, computer: Move) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if user.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Draw a move uniformly at random.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    Move::ALL[rng.random_range(0..Move::ALL.len())]
}
