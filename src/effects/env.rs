//! Environment traits for the effectful parts of a round.

use crate::rules::{random_move, Move, Outcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Supplies the computer's move for a round.
pub trait OpponentSource {
    fn opponent_move(&self) -> Move;
}

/// Plays the sound cue for an outcome.
pub trait SoundBoard {
    fn play(&self, cue: SoundCue);
}

/// Everything a transition action may touch.
///
/// Blanket-implemented for any cloneable, thread-safe type providing both
/// an opponent and a sound board.
pub trait GameEnv: OpponentSource + SoundBoard + Clone + Send + Sync + 'static {}

impl<T> GameEnv for T where T: OpponentSource + SoundBoard + Clone + Send + Sync + 'static {}

/// One of the three fixed sound effects.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SoundCue {
    Win,
    Lose,
    Tie,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Win, SoundCue::Lose, SoundCue::Tie];

    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::Win,
            Outcome::Lose => Self::Lose,
            Outcome::Tie => Self::Tie,
        }
    }

    /// Asset file name under the sound effects directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Win => "winner.mpeg.wav",
            Self::Lose => "lose.mpeg.wav",
            Self::Tie => "tie_1.wav",
        }
    }
}

/// Opponent drawing uniformly at random.
///
/// Uses the thread-local generator unless constructed with a seed.
#[derive(Clone, Debug, Default)]
pub struct RandomOpponent {
    seeded: Option<Arc<Mutex<StdRng>>>,
}

impl RandomOpponent {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    /// Reproducible opponent for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))),
        }
    }
}

impl OpponentSource for RandomOpponent {
    fn opponent_move(&self) -> Move {
        let chosen = match &self.seeded {
            Some(rng) => random_move(&mut *lock(rng)),
            None => random_move(&mut rand::rng()),
        };
        debug!(computer_move = %chosen, "opponent chose");
        chosen
    }
}

/// Opponent that always plays the same move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedOpponent(pub Move);

impl OpponentSource for FixedOpponent {
    fn opponent_move(&self) -> Move {
        self.0
    }
}

/// Sound board that plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSounds;

impl SoundBoard for SilentSounds {
    fn play(&self, _cue: SoundCue) {}
}

/// Sound board that records every cue it is asked to play.
///
/// Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct SoundLog {
    played: Arc<Mutex<Vec<SoundCue>>>,
}

impl SoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<SoundCue> {
        lock(&self.played).clone()
    }

    pub fn last(&self) -> Option<SoundCue> {
        lock(&self.played).last().copied()
    }
}

impl SoundBoard for SoundLog {
    fn play(&self, cue: SoundCue) {
        lock(&self.played).push(cue);
    }
}

/// An opponent and a sound board bundled into one environment.
#[derive(Clone, Debug, Default)]
pub struct GameTable<O, S> {
    pub opponent: O,
    pub sounds: S,
}

impl<O, S> GameTable<O, S> {
    pub fn new(opponent: O, sounds: S) -> Self {
        Self { opponent, sounds }
    }
}

impl<O: OpponentSource, S> OpponentSource for GameTable<O, S> {
    fn opponent_move(&self) -> Move {
        self.opponent.opponent_move()
    }
}

impl<O, S: SoundBoard> SoundBoard for GameTable<O, S> {
    fn play(&self, cue: SoundCue) {
        self.sounds.play(cue);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
