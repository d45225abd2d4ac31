//! Errors raised where untyped input becomes a `Move`.

use super::moves::Outcome;
use thiserror::Error;

/// Errors that can occur when converting raw input into game values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RulesError {
    #[error("'{0}' is not a move. Expected rock, paper or scissors")]
    InvalidMove(String),

    #[error("Move index {0} is out of range (0..3)")]
    InvalidIndex(usize),

    #[error("Recorded outcome '{found}' does not match the moves, which give '{expected}'")]
    InconsistentOutcome { expected: Outcome, found: Outcome },
}
