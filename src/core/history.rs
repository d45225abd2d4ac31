//! Screen change history.
//!
//! Provides immutable tracking of every screen the flow has passed through.

use super::event::FlowEvent;
use super::screen::{Screen, ScreenKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single screen change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenChange {
    /// The screen being left
    pub from: Screen,
    /// The screen being shown
    pub to: Screen,
    /// The user action that caused the change
    pub event: FlowEvent,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of screen changes.
///
/// History is immutable - `record` returns a new history with the change
/// added.
///
/// # Example
///
/// ```rust
/// use roshambo::core::{FlowEvent, Screen, ScreenChange, ScreenHistory};
/// use chrono::Utc;
///
/// let history = ScreenHistory::new().record(ScreenChange {
///     from: Screen::Welcome,
///     to: Screen::Choice,
///     event: FlowEvent::AdvancePressed,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![&Screen::Welcome, &Screen::Choice]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScreenHistory {
    changes: Vec<ScreenChange>,
}

impl ScreenHistory {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    pub fn record(&self, change: ScreenChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Screens traversed, in order: the first screen left, then the
    /// destination of each change.
    pub fn path(&self) -> Vec<&Screen> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Time between the first and last recorded change.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Number of rounds resolved, i.e. changes that landed on a result screen.
    pub fn rounds_played(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| c.to.kind() == ScreenKind::Result)
            .count()
    }

    pub fn changes(&self) -> &[ScreenChange] {
        &self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{GameRound, Move};

    fn change(from: Screen, to: Screen, event: FlowEvent) -> ScreenChange {
        ScreenChange {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = ScreenHistory::new();
        assert!(history.changes().is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.rounds_played(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = ScreenHistory::new();
        let new_history = history.record(change(
            Screen::Welcome,
            Screen::Choice,
            FlowEvent::AdvancePressed,
        ));

        assert_eq!(history.changes().len(), 0);
        assert_eq!(new_history.changes().len(), 1);
    }

    #[test]
    fn path_follows_play_again_loop() {
        let round = GameRound::new(Move::Rock, Move::Scissors);
        let history = ScreenHistory::new()
            .record(change(Screen::Welcome, Screen::Choice, FlowEvent::AdvancePressed))
            .record(change(
                Screen::Choice,
                Screen::Result(round),
                FlowEvent::MoveSelected(Move::Rock),
            ))
            .record(change(
                Screen::Result(round),
                Screen::Choice,
                FlowEvent::PlayAgainPressed,
            ));

        let path = history.path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], &Screen::Welcome);
        assert_eq!(path[2], &Screen::Result(round));
        assert_eq!(path[3], &Screen::Choice);
    }

    #[test]
    fn rounds_played_counts_result_screens() {
        let first = GameRound::new(Move::Rock, Move::Paper);
        let second = GameRound::new(Move::Paper, Move::Paper);
        let history = ScreenHistory::new()
            .record(change(
                Screen::Choice,
                Screen::Result(first),
                FlowEvent::MoveSelected(Move::Rock),
            ))
            .record(change(
                Screen::Result(first),
                Screen::Choice,
                FlowEvent::PlayAgainPressed,
            ))
            .record(change(
                Screen::Choice,
                Screen::Result(second),
                FlowEvent::MoveSelected(Move::Paper),
            ));

        assert_eq!(history.rounds_played(), 2);
    }

    #[test]
    fn single_change_has_zero_duration() {
        let history = ScreenHistory::new().record(change(
            Screen::Welcome,
            Screen::Choice,
            FlowEvent::AdvancePressed,
        ));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = ScreenHistory::new().record(change(
            Screen::Result(GameRound::new(Move::Rock, Move::Rock)),
            Screen::Closed,
            FlowEvent::ExitPressed,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: ScreenHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history.path(), deserialized.path());
        assert_eq!(deserialized.changes()[0].event, FlowEvent::ExitPressed);
    }
}
