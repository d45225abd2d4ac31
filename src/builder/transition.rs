//! Builder for constructing screen transitions.

use crate::builder::error::BuildError;
use crate::core::{EventKind, FlowEvent, Guard, Screen, ScreenKind};
use crate::effects::{play_round, show, FlowError, GameEnv, Transition, TransitionAction};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

enum Source {
    Unset,
    Screen(ScreenKind),
    Any,
}

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<Env> {
    source: Source,
    on: Option<EventKind>,
    guard: Option<Guard>,
    action: Option<TransitionAction<Env>>,
}

impl<Env> TransitionBuilder<Env> {
    pub fn new() -> Self {
        Self {
            source: Source::Unset,
            on: None,
            guard: None,
            action: None,
        }
    }

    /// Fire only from screens of this kind.
    pub fn from(mut self, kind: ScreenKind) -> Self {
        self.source = Source::Screen(kind);
        self
    }

    /// Fire from any screen the guard admits.
    pub fn from_any(mut self) -> Self {
        self.source = Source::Any;
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: EventKind) -> Self {
        self.on = Some(event);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Screen) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the action effect (required).
    pub fn action<E>(mut self, effect: E) -> Self
    where
        E: Fn(&Screen, &FlowEvent) -> BoxedEffect<Screen, FlowError, Env> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(effect));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<Env>, BuildError> {
        let from = match self.source {
            Source::Unset => return Err(BuildError::MissingSource),
            Source::Screen(kind) => Some(kind),
            Source::Any => None,
        };
        let on = self.on.ok_or(BuildError::MissingEvent)?;
        let action = self.action.ok_or(BuildError::MissingAction)?;

        Ok(Transition {
            from,
            on,
            guard: self.guard,
            action,
        })
    }
}

impl<Env: Clone + Send + Sync + 'static> TransitionBuilder<Env> {
    /// Side-effect-free action that shows `screen`.
    pub fn shows(mut self, screen: Screen) -> Self {
        self.action = Some(show(screen));
        self
    }
}

impl<Env: GameEnv> TransitionBuilder<Env> {
    /// Action that resolves a round and shows its result.
    pub fn plays_round(mut self) -> Self {
        self.action = Some(play_round());
        self
    }
}

impl<Env> Default for TransitionBuilder<Env> {
    fn default() -> Self {
        Self::new()
    }
}
