//! Property-based tests for the rules and screen history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use roshambo::core::{FlowEvent, Screen, ScreenChange, ScreenHistory};
use roshambo::rules::{random_move, resolve, GameRound, Move, Outcome};

prop_compose! {
    fn arbitrary_move()(variant in 0..3usize) -> Move {
        Move::try_from(variant).unwrap()
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..5u8, m in arbitrary_move()) -> FlowEvent {
        match variant {
            0 => FlowEvent::AdvancePressed,
            1 => FlowEvent::MoveSelected(m),
            2 => FlowEvent::PlayAgainPressed,
            3 => FlowEvent::ExitPressed,
            _ => FlowEvent::WindowClosed,
        }
    }
}

proptest! {
    #[test]
    fn resolve_is_antisymmetric(a in arbitrary_move(), b in arbitrary_move()) {
        prop_assume!(a != b);
        prop_assert_eq!(resolve(a, b) == Outcome::Win, resolve(b, a) == Outcome::Lose);
        prop_assert_eq!(resolve(a, b), resolve(b, a).reversed());
    }

    #[test]
    fn equal_moves_tie(m in arbitrary_move()) {
        prop_assert_eq!(resolve(m, m), Outcome::Tie);
    }

    #[test]
    fn unequal_moves_never_tie(a in arbitrary_move(), b in arbitrary_move()) {
        prop_assume!(a != b);
        prop_assert_ne!(resolve(a, b), Outcome::Tie);
    }

    #[test]
    fn every_move_beats_exactly_one(m in arbitrary_move()) {
        let wins = Move::ALL.iter().filter(|other| resolve(m, **other) == Outcome::Win).count();
        prop_assert_eq!(wins, 1);
        prop_assert_eq!(resolve(m, m.beats()), Outcome::Win);
        prop_assert_eq!(resolve(m, m.beaten_by()), Outcome::Lose);
    }

    #[test]
    fn resolve_is_deterministic(a in arbitrary_move(), b in arbitrary_move()) {
        prop_assert_eq!(resolve(a, b), resolve(a, b));
    }

    #[test]
    fn round_agrees_with_resolve(a in arbitrary_move(), b in arbitrary_move()) {
        let round = GameRound::new(a, b);
        prop_assert_eq!(round.outcome, resolve(a, b));
    }

    #[test]
    fn move_name_roundtrips_through_parse(m in arbitrary_move()) {
        prop_assert_eq!(m.name().parse::<Move>(), Ok(m));
        prop_assert_eq!(m.label().parse::<Move>(), Ok(m));
    }

    #[test]
    fn random_move_reaches_every_value(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let draws: Vec<Move> = (0..1000).map(|_| random_move(&mut rng)).collect();
        for m in Move::ALL {
            prop_assert!(draws.contains(&m));
        }
    }

    #[test]
    fn history_preserves_order(
        steps in prop::collection::vec((arbitrary_move(), arbitrary_move(), arbitrary_event()), 1..10)
    ) {
        let mut history = ScreenHistory::new();
        let mut expected = vec![Screen::Welcome];

        for (user, computer, event) in &steps {
            let to = Screen::Result(GameRound::new(*user, *computer));
            let from = *expected.last().unwrap();
            history = history.record(ScreenChange {
                from,
                to,
                event: *event,
                timestamp: Utc::now(),
            });
            expected.push(to);
        }

        let path = history.path();
        prop_assert_eq!(path.len(), expected.len());
        for (i, screen) in path.iter().enumerate() {
            prop_assert_eq!(*screen, &expected[i]);
        }
        prop_assert_eq!(history.rounds_played(), steps.len());
    }

    #[test]
    fn history_record_is_pure(event in arbitrary_event()) {
        let history = ScreenHistory::new();
        let new_history = history.record(ScreenChange {
            from: Screen::Welcome,
            to: Screen::Choice,
            event,
            timestamp: Utc::now(),
        });

        prop_assert_eq!(history.changes().len(), 0);
        prop_assert_eq!(new_history.changes().len(), 1);
    }
}
