//! A single resolved round.

use super::error::RulesError;
use super::moves::{resolve, Move, Outcome};
use serde::{Deserialize, Serialize};

/// One pairing of the user's move and the computer's move with its outcome.
///
/// Rounds are created the moment the user picks a move and live only as
/// long as the result screen showing them.
///
/// Deserializing recomputes the outcome from the two moves. A stored outcome
/// that disagrees with them is rejected.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RoundRecord")]
pub struct GameRound {
    pub user_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

impl GameRound {
    /// Resolve a round. The outcome is always derived from the two moves.
    pub fn new(user_move: Move, computer_move: Move) -> Self {
        Self {
            user_move,
            computer_move,
            outcome: resolve(user_move, computer_move),
        }
    }

    /// True when both sides played the same move.
    pub fn is_mirror(&self) -> bool {
        self.user_move == self.computer_move
    }
}

/// Wire form of a round before its outcome has been checked.
#[derive(Deserialize)]
struct RoundRecord {
    user_move: Move,
    computer_move: Move,
    #[serde(default)]
    outcome: Option<Outcome>,
}

impl TryFrom<RoundRecord> for GameRound {
    type Error = RulesError;

    fn try_from(record: RoundRecord) -> Result<Self, Self::Error> {
        let round = GameRound::new(record.user_move, record.computer_move);
        match record.outcome {
            Some(found) if found != round.outcome => Err(RulesError::InconsistentOutcome {
                expected: round.outcome,
                found,
            }),
            _ => Ok(round),
        }
    }
}
