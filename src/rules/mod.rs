//! The rules of the game.
//!
//! Everything in this module is pure: moves, outcomes, and the single
//! resolution rule that turns a pair of moves into an outcome.
//!
//! # Example
//!
//! ```rust
//! use roshambo::rules::{resolve, GameRound, Move, Outcome};
//!
//! assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
//!
//! let round = GameRound::new(Move::Paper, Move::Scissors);
//! assert_eq!(round.outcome, Outcome::Lose);
//! ```

mod error;
mod moves;
mod round;

pub use error::RulesError;
pub use moves::{random_move, resolve, Move, Outcome};
pub use round::GameRound;
