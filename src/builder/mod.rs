//! Builder API for screen flow construction.
//!
//! This module provides fluent builders for assembling a screen flow from
//! transitions, plus `standard_flow` for the game as played.

pub mod error;
pub mod flow;
pub mod transition;

pub use error::BuildError;
pub use flow::ScreenFlowBuilder;
pub use transition::TransitionBuilder;

use crate::core::{EventKind, Guard, Screen, ScreenKind};
use crate::effects::{GameEnv, ScreenFlow};

/// The game's flow: welcome, then a choice/result loop until exit.
///
/// - Welcome --AdvancePressed--> Choice
/// - Choice --MoveSelected(m)--> Result (round resolved, cue played)
/// - Result --PlayAgainPressed--> Choice
/// - Result --ExitPressed--> Closed
/// - any open screen --WindowClosed--> Closed
///
/// # Example
///
/// ```
/// use roshambo::builder::standard_flow;
/// use roshambo::core::Screen;
/// use roshambo::effects::{GameTable, RandomOpponent, SilentSounds};
///
/// let flow = standard_flow::<GameTable<RandomOpponent, SilentSounds>>().unwrap();
/// assert_eq!(flow.current_screen(), &Screen::Welcome);
/// ```
pub fn standard_flow<Env: GameEnv>() -> Result<ScreenFlow<Env>, BuildError> {
    ScreenFlowBuilder::new()
        .initial(Screen::Welcome)
        .transition(
            TransitionBuilder::new()
                .from(ScreenKind::Welcome)
                .on(EventKind::Advance)
                .shows(Screen::Choice),
        )?
        .transition(
            TransitionBuilder::new()
                .from(ScreenKind::Choice)
                .on(EventKind::SelectMove)
                .plays_round(),
        )?
        .transition(
            TransitionBuilder::new()
                .from(ScreenKind::Result)
                .on(EventKind::PlayAgain)
                .shows(Screen::Choice),
        )?
        .transition(
            TransitionBuilder::new()
                .from(ScreenKind::Result)
                .on(EventKind::Exit)
                .shows(Screen::Closed),
        )?
        .transition(
            TransitionBuilder::new()
                .from_any()
                .on(EventKind::CloseWindow)
                .guard(Guard::not_final())
                .shows(Screen::Closed),
        )?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FlowEvent;
    use crate::effects::{FixedOpponent, GameTable, SoundLog};
    use crate::rules::Move;

    type TestEnv = GameTable<FixedOpponent, SoundLog>;

    #[test]
    fn standard_flow_starts_on_welcome() {
        let flow = standard_flow::<TestEnv>().unwrap();

        assert_eq!(flow.current_screen(), &Screen::Welcome);
        assert!(!flow.is_final());
    }

    #[tokio::test]
    async fn window_close_works_from_any_open_screen() {
        let env = GameTable::new(FixedOpponent(Move::Rock), SoundLog::new());

        let mut flow = standard_flow::<TestEnv>().unwrap();
        flow.dispatch(FlowEvent::WindowClosed, &env).await.unwrap();
        assert_eq!(flow.current_screen(), &Screen::Closed);

        let mut flow = standard_flow::<TestEnv>().unwrap();
        flow.dispatch(FlowEvent::AdvancePressed, &env).await.unwrap();
        flow.dispatch(FlowEvent::WindowClosed, &env).await.unwrap();
        assert!(flow.is_final());

        assert!(flow.dispatch(FlowEvent::WindowClosed, &env).await.is_err());
    }

    #[tokio::test]
    async fn exit_is_only_offered_on_result() {
        let env = GameTable::new(FixedOpponent(Move::Rock), SoundLog::new());
        let mut flow = standard_flow::<TestEnv>().unwrap();

        assert!(flow.dispatch(FlowEvent::ExitPressed, &env).await.is_err());
        flow.dispatch(FlowEvent::AdvancePressed, &env).await.unwrap();
        assert!(flow.dispatch(FlowEvent::ExitPressed, &env).await.is_err());
        assert_eq!(flow.current_screen(), &Screen::Choice);
    }
}
