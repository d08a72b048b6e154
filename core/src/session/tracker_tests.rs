//! Tests for the fight session
//!
//! Verifies command routing, the record/reset coupling, and hydration
//! queueing.

use crate::game_data::Move;
use crate::record::{FightOutcome, RecordState};
use crate::rotation::{ObservationEvent, RotationState};

use super::signal::SessionSignal;
use super::tracker::{FightSession, SessionCommand};

fn ready_session() -> FightSession {
    let mut session = FightSession::new();
    session.hydrate(None, None);
    session
}

fn observe(session: &mut FightSession, event: ObservationEvent) -> Vec<SessionSignal> {
    session
        .apply(SessionCommand::Observe(event))
        .expect("observation should apply")
}

#[test]
fn observations_advance_the_rotation() {
    let mut session = ready_session();

    let signals = observe(&mut session, ObservationEvent::SpecialUsed);
    assert_eq!(
        signals,
        [SessionSignal::MoveObserved {
            observed: Move::EtherealCannon,
            charge: 2
        }]
    );
    assert_eq!(session.rotation().next_move, Move::UltraSpark);
}

#[test]
fn recording_appends_once_and_resets_the_rotation() {
    let mut session = ready_session();
    observe(&mut session, ObservationEvent::SpecialUsed);
    observe(&mut session, ObservationEvent::SpecialUsed);

    let signals = session
        .apply(SessionCommand::Record(FightOutcome::Win))
        .expect("recording is total");

    assert_eq!(
        signals,
        [
            SessionSignal::FightRecorded {
                outcome: FightOutcome::Win,
                move_count: 2
            },
            SessionSignal::RotationReset,
        ]
    );
    assert_eq!(session.records().win_count(), 1);
    assert_eq!(session.records().loss_count(), 0);
    assert_eq!(
        session.records().wins[0].moves,
        [Move::EtherealCannon, Move::UltraSpark]
    );
    assert_eq!(*session.rotation(), RotationState::default());
}

#[test]
fn recording_a_loss_leaves_wins_untouched() {
    let mut session = ready_session();
    observe(&mut session, ObservationEvent::SpecialUsed);

    session
        .apply(SessionCommand::Record(FightOutcome::Loss))
        .expect("recording is total");

    assert_eq!(session.records().win_count(), 0);
    assert_eq!(session.records().loss_count(), 1);
}

#[test]
fn armageddon_ready_fires_on_crossing_the_threshold() {
    let mut session = FightSession::new();
    session.hydrate(
        Some(RotationState {
            next_move: Move::Basic,
            previous_moves: Vec::new(),
            charge: 19,
        }),
        None,
    );

    let signals = observe(&mut session, ObservationEvent::BasicUsed);
    assert_eq!(
        signals,
        [
            SessionSignal::MoveObserved {
                observed: Move::Basic,
                charge: 22
            },
            SessionSignal::ArmageddonReady { charge: 22 },
        ]
    );

    // Using Armageddon drains the meter; no second ready signal.
    let signals = observe(&mut session, ObservationEvent::ArmageddonUsed);
    assert_eq!(
        signals,
        [SessionSignal::MoveObserved {
            observed: Move::Armageddon,
            charge: 0
        }]
    );
}

#[test]
fn commands_queue_until_hydration_completes() {
    let mut session = FightSession::new();
    assert!(!session.is_ready());

    let signals = session
        .apply(SessionCommand::Observe(ObservationEvent::SpecialUsed))
        .expect("queued commands do not fail");
    assert_eq!(signals, [SessionSignal::CommandDeferred]);
    assert_eq!(session.rotation().move_count(), 0);

    // The late load installs stored state first, then replays the queue.
    let stored = RotationState {
        next_move: Move::UltraSpark,
        previous_moves: vec![Move::EtherealCannon],
        charge: 2,
    };
    let signals = session.hydrate(Some(stored), None);

    assert_eq!(
        signals[0],
        SessionSignal::Hydrated {
            rotation_restored: true,
            records_restored: false
        }
    );
    assert_eq!(
        signals[1],
        SessionSignal::MoveObserved {
            observed: Move::UltraSpark,
            charge: 4
        }
    );
    assert_eq!(session.rotation().next_move, Move::Basic);
    assert!(session.is_ready());
}

#[test]
fn hydration_with_nothing_stored_installs_defaults() {
    let mut session = FightSession::new();
    let signals = session.hydrate(None, None);

    assert_eq!(
        signals,
        [SessionSignal::Hydrated {
            rotation_restored: false,
            records_restored: false
        }]
    );
    assert_eq!(*session.rotation(), RotationState::default());
    assert_eq!(*session.records(), RecordState::default());
}

#[test]
fn manual_reset_does_not_touch_the_record_log() {
    let mut session = ready_session();
    observe(&mut session, ObservationEvent::SpecialUsed);
    session
        .apply(SessionCommand::Record(FightOutcome::Win))
        .expect("recording is total");

    observe(&mut session, ObservationEvent::SpecialUsed);
    let signals = observe(&mut session, ObservationEvent::Reset);

    assert_eq!(signals, [SessionSignal::RotationReset]);
    assert_eq!(*session.rotation(), RotationState::default());
    assert_eq!(session.records().win_count(), 1);
}
