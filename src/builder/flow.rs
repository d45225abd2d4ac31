//! Builder for constructing screen flows.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::Screen;
use crate::effects::{GameEnv, ScreenFlow, Transition};

/// Builder for constructing screen flows with a fluent API.
pub struct ScreenFlowBuilder<Env: GameEnv> {
    initial: Option<Screen>,
    transitions: Vec<Transition<Env>>,
}

impl<Env: GameEnv> ScreenFlowBuilder<Env> {
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial screen (required).
    pub fn initial(mut self, screen: Screen) -> Self {
        self.initial = Some(screen);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<Env>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<Env>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Build the flow.
    pub fn build(self) -> Result<ScreenFlow<Env>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialScreen)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut flow = ScreenFlow::new(initial);
        for transition in self.transitions {
            flow.add_transition(transition);
        }

        Ok(flow)
    }
}

impl<Env: GameEnv> Default for ScreenFlowBuilder<Env> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventKind, ScreenKind};
    use crate::effects::{FixedOpponent, GameTable, SilentSounds};

    type TestEnv = GameTable<FixedOpponent, SilentSounds>;

    #[test]
    fn builder_requires_initial_screen() {
        let result = ScreenFlowBuilder::<TestEnv>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialScreen)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = ScreenFlowBuilder::<TestEnv>::new()
            .initial(Screen::Welcome)
            .build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn builder_propagates_transition_errors() {
        let result = ScreenFlowBuilder::<TestEnv>::new()
            .initial(Screen::Welcome)
            .transition(TransitionBuilder::new().on(EventKind::Advance));

        assert!(matches!(result, Err(BuildError::MissingSource)));
    }

    #[test]
    fn fluent_api_builds_flow() {
        let flow = ScreenFlowBuilder::<TestEnv>::new()
            .initial(Screen::Welcome)
            .transition(
                TransitionBuilder::new()
                    .from(ScreenKind::Welcome)
                    .on(EventKind::Advance)
                    .shows(Screen::Choice),
            )
            .and_then(|b| {
                b.transition(
                    TransitionBuilder::new()
                        .from(ScreenKind::Choice)
                        .on(EventKind::SelectMove)
                        .plays_round(),
                )
            })
            .and_then(|b| b.build())
            .unwrap();

        assert_eq!(flow.current_screen(), &Screen::Welcome);
        assert!(flow.history().changes().is_empty());
    }
}
