//! Screen transitions with effectful actions.

use crate::core::{EventKind, FlowEvent, Guard, Screen, ScreenKind};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// Errors that can occur while handling an event
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("No transition from screen '{screen}' on event '{event}'")]
    NoTransition { screen: String, event: String },

    #[error("Event '{event}' does not carry a move")]
    MissingMove { event: String },
}

/// Factory producing a fresh effect for each firing. The effect's output is
/// the screen to show next.
pub type TransitionAction<Env> =
    Arc<dyn Fn(&Screen, &FlowEvent) -> BoxedEffect<Screen, FlowError, Env> + Send + Sync>;

/// A transition fired by one kind of event on one kind of screen.
///
/// `from: None` matches every screen; such transitions normally carry a
/// guard to keep them off final screens.
pub struct Transition<Env> {
    pub from: Option<ScreenKind>,
    pub on: EventKind,
    pub guard: Option<Guard>,
    pub action: TransitionAction<Env>,
}

impl<Env> Transition<Env> {
    /// Check if this transition handles `event` on `current` (pure)
    pub fn can_fire(&self, current: &Screen, event: &FlowEvent) -> bool {
        if event.kind() != self.on {
            return false;
        }

        if self.from.is_some_and(|kind| kind != current.kind()) {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(current))
    }
}

impl<Env> std::fmt::Debug for Transition<Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("on", &self.on)
            .field("guarded", &self.guard.is_some())
            .finish_non_exhaustive()
    }
}
