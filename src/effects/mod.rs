//! Effectful screen-flow operations using Stillwater 0.11.0.
//!
//! This module is the "imperative shell" around the pure rules and screen
//! model: choosing the opponent's move and playing sound cues happen here,
//! behind environment traits so tests can substitute them.
//!
//! # Key Concepts
//!
//! - **Environment**: `OpponentSource` + `SoundBoard`, combined as `GameEnv`
//! - **Transitions**: keyed by screen and event, with guards and effectful actions
//! - **ScreenFlow**: executes transitions and tracks screen history
//!
//! Following Stillwater conventions, `step` returns `impl Effect` and the
//! transition table stores `BoxedEffect` factories.

mod actions;
mod controller;
mod env;
mod transition;

pub use actions::{play_round, show};
pub use controller::ScreenFlow;
pub use env::{
    FixedOpponent, GameEnv, GameTable, OpponentSource, RandomOpponent, SilentSounds, SoundBoard,
    SoundCue, SoundLog,
};
pub use transition::{FlowError, Transition, TransitionAction};
