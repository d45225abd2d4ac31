//! Screen flow controller that executes effectful transitions.

use super::env::GameEnv;
use super::transition::{FlowError, Transition};
use crate::core::{FlowEvent, Screen, ScreenChange, ScreenHistory};
use chrono::Utc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::{debug, info, warn};

/// Owns the current screen and moves it forward one event at a time.
///
/// The current screen is a single owned value, replaced wholesale on every
/// transition.
pub struct ScreenFlow<Env: GameEnv> {
    current: Screen,
    transitions: Vec<Transition<Env>>,
    history: ScreenHistory,
}

impl<Env: GameEnv> ScreenFlow<Env> {
    /// Create a flow showing `initial` with no transitions.
    pub fn new(initial: Screen) -> Self {
        Self {
            current: initial,
            transitions: Vec::new(),
            history: ScreenHistory::new(),
        }
    }

    pub fn add_transition(&mut self, transition: Transition<Env>) {
        self.transitions.push(transition);
    }

    /// Get current screen (pure)
    pub fn current_screen(&self) -> &Screen {
        &self.current
    }

    /// Check if the flow has reached its terminal screen (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn history(&self) -> &ScreenHistory {
        &self.history
    }

    /// Handle one event.
    /// Returns `(from, to)` as an effect; run it, then pass the pair to
    /// `apply()` to commit the change.
    pub fn step(
        &self,
        event: FlowEvent,
    ) -> impl Effect<Output = (Screen, Screen), Error = FlowError, Env = Env> + '_ {
        let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.can_fire(&self.current, &event))
        else {
            return fail(FlowError::NoTransition {
                screen: self.current.name().to_string(),
                event: event.to_string(),
            })
            .boxed();
        };

        let from = self.current;
        (transition.action)(&self.current, &event)
            .map(move |to| (from, to))
            .boxed()
    }

    /// Commit a change produced by `step()`.
    pub fn apply(&mut self, from: Screen, to: Screen, event: FlowEvent) {
        debug!(from = %from, to = %to, event = %event, "screen changed");
        self.history = self.history.record(ScreenChange {
            from,
            to,
            event,
            timestamp: Utc::now(),
        });
        self.current = to;
    }

    /// Run `step()` against `env` and apply the result.
    ///
    /// On error the current screen is left untouched.
    pub async fn dispatch(&mut self, event: FlowEvent, env: &Env) -> Result<&Screen, FlowError> {
        let (from, to) = match self.step(event).run(env).await {
            Ok(change) => change,
            Err(err) => {
                warn!(screen = %self.current, event = %event, "{err}");
                return Err(err);
            }
        };

        self.apply(from, to, event);
        if to.is_final() {
            info!(
                rounds = self.history.rounds_played(),
                "screen flow closed"
            );
        }
        Ok(&self.current)
    }
}

impl<Env: GameEnv> std::fmt::Debug for ScreenFlow<Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenFlow")
            .field("current", &self.current)
            .field("transitions", &self.transitions)
            .field("history", &self.history)
            .finish()
    }
}
