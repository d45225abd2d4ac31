//! Roshambo: rock-paper-scissors on a pure functional screen flow
//!
//! The game is split along the "pure core, imperative shell" line. The rules
//! and the screen model are plain values and pure functions; picking the
//! opponent's move and playing sounds are effects run against an injected
//! environment, so the whole flow can be exercised without a window.
//!
//! # Core Concepts
//!
//! - **Rules**: `Move`, `Outcome` and the `resolve` function
//! - **Screens**: `Screen` and the `FlowEvent`s that move between them
//! - **Flow**: `ScreenFlow`, a table of guarded, effectful transitions
//! - **Shell**: a terminal front-end that renders screens and reads commands
//!
//! # Example
//!
//! ```rust
//! use roshambo::builder::standard_flow;
//! use roshambo::core::{FlowEvent, Screen};
//! use roshambo::effects::{FixedOpponent, GameTable, SoundCue, SoundLog};
//! use roshambo::rules::{Move, Outcome};
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let env = GameTable::new(FixedOpponent(Move::Scissors), SoundLog::new());
//! let mut flow = standard_flow().unwrap();
//!
//! flow.dispatch(FlowEvent::AdvancePressed, &env).await.unwrap();
//! let screen = *flow.dispatch(FlowEvent::MoveSelected(Move::Rock), &env).await.unwrap();
//!
//! assert_eq!(screen.round().unwrap().outcome, Outcome::Win);
//! assert_eq!(env.sounds.last(), Some(SoundCue::Win));
//! # });
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use builder::standard_flow;
pub use core::{FlowEvent, Screen};
pub use effects::ScreenFlow;
pub use rules::{resolve, GameRound, Move, Outcome};
