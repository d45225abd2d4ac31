//! Build errors for screen flows and transitions.

use thiserror::Error;

/// Errors that can occur when building screen flows and transitions.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial screen not specified. Call .initial(screen) before .build()")]
    MissingInitialScreen,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source not specified. Call .from(kind) or .from_any()")]
    MissingSource,

    #[error("Transition event not specified. Call .on(kind)")]
    MissingEvent,

    #[error("Transition action not specified. Call .action(effect), .shows(screen) or .plays_round()")]
    MissingAction,
}
