//! The actions behind the standard game transitions.

use super::env::{GameEnv, SoundCue};
use super::transition::{FlowError, TransitionAction};
use crate::core::{FlowEvent, Screen};
use crate::rules::GameRound;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use tracing::info;

/// Action that shows a fixed screen with no side effects.
pub fn show<Env>(screen: Screen) -> TransitionAction<Env>
where
    Env: Clone + Send + Sync + 'static,
{
    Arc::new(
        move |_: &Screen, _: &FlowEvent| -> BoxedEffect<Screen, FlowError, Env> {
            pure(screen).boxed()
        },
    )
}

/// Action that plays one round.
///
/// Takes the user's move from the selection event, asks the environment for
/// the computer's move, resolves the round, plays the matching cue and
/// moves to the result screen.
pub fn play_round<Env: GameEnv>() -> TransitionAction<Env> {
    Arc::new(|_: &Screen, event: &FlowEvent| -> BoxedEffect<Screen, FlowError, Env> {
        let Some(user_move) = event.selected_move() else {
            return fail(FlowError::MissingMove {
                event: event.to_string(),
            })
            .boxed();
        };

        from_fn(move |env: &Env| {
            let round = GameRound::new(user_move, env.opponent_move());
            info!(
                user_move = %round.user_move,
                computer_move = %round.computer_move,
                outcome = %round.outcome,
                "round resolved"
            );
            env.play(SoundCue::for_outcome(round.outcome));
            Ok::<Screen, FlowError>(Screen::Result(round))
        })
        .boxed()
    })
}
