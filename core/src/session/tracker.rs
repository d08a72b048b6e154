//! Session tracker owning both state containers.
//!
//! All mutation flows through [`FightSession::apply`], which returns the
//! signals the caller should surface. Persisted state is installed through
//! [`FightSession::hydrate`]; commands arriving before hydration are queued
//! and replayed in order, so a late load never clobbers interim actions.

use crate::game_data::Move;
use crate::record::{FightOutcome, RecordState, record_fight};
use crate::rotation::{ObservationEvent, RotationError, RotationState, advance_rotation};

use super::signal::SessionSignal;

/// Whether persisted state has been installed yet.
///
/// Pending is distinct from loaded-empty: a session that hydrated with no
/// stored data is Ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HydrationState {
    #[default]
    Pending,
    Ready,
}

/// A user-initiated mutation of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Observe(ObservationEvent),
    Record(FightOutcome),
}

#[derive(Debug, Default)]
pub struct FightSession {
    rotation: RotationState,
    records: RecordState,
    hydration: HydrationState,
    queued: Vec<SessionCommand>,
}

impl FightSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn records(&self) -> &RecordState {
        &self.records
    }

    pub fn is_ready(&self) -> bool {
        self.hydration == HydrationState::Ready
    }

    /// Install stored state (absent values fall back to defaults), then
    /// replay any commands queued while the load was in flight.
    ///
    /// This is the only path that replaces state wholesale; every other
    /// mutation goes through the rotation engine or the record log.
    pub fn hydrate(
        &mut self,
        rotation: Option<RotationState>,
        records: Option<RecordState>,
    ) -> Vec<SessionSignal> {
        let mut signals = vec![SessionSignal::Hydrated {
            rotation_restored: rotation.is_some(),
            records_restored: records.is_some(),
        }];

        self.rotation = rotation.unwrap_or_default();
        self.records = records.unwrap_or_default();
        self.hydration = HydrationState::Ready;

        for command in std::mem::take(&mut self.queued) {
            match self.apply(command) {
                Ok(replayed) => signals.extend(replayed),
                Err(err) => {
                    tracing::warn!(?command, error = %err, "dropping queued command during replay");
                }
            }
        }

        signals
    }

    /// Apply one command, returning the signals to surface.
    ///
    /// While hydration is pending the command is queued instead and
    /// [`SessionSignal::CommandDeferred`] is returned.
    pub fn apply(&mut self, command: SessionCommand) -> Result<Vec<SessionSignal>, RotationError> {
        if self.hydration == HydrationState::Pending {
            self.queued.push(command);
            return Ok(vec![SessionSignal::CommandDeferred]);
        }

        match command {
            SessionCommand::Observe(event) => self.observe(event),
            SessionCommand::Record(outcome) => Ok(self.record(outcome)),
        }
    }

    fn observe(&mut self, event: ObservationEvent) -> Result<Vec<SessionSignal>, RotationError> {
        let was_ready = self.rotation.armageddon_ready();
        let observed = match event {
            ObservationEvent::SpecialUsed => Some(self.rotation.next_move),
            ObservationEvent::BasicUsed => Some(Move::Basic),
            ObservationEvent::ArmageddonUsed => Some(Move::Armageddon),
            ObservationEvent::Reset => None,
        };

        let next = advance_rotation(&self.rotation, event)?;

        let mut signals = Vec::new();
        match observed {
            Some(observed) => signals.push(SessionSignal::MoveObserved {
                observed,
                charge: next.charge,
            }),
            None => signals.push(SessionSignal::RotationReset),
        }

        if !was_ready && next.armageddon_ready() {
            signals.push(SessionSignal::ArmageddonReady {
                charge: next.charge,
            });
        }

        self.rotation = next;
        Ok(signals)
    }

    fn record(&mut self, outcome: FightOutcome) -> Vec<SessionSignal> {
        let moves = self.rotation.previous_moves.clone();
        let move_count = moves.len();
        self.records = record_fight(&self.records, outcome, moves);

        // Recording always starts a fresh rotation.
        self.rotation = RotationState::default();

        vec![
            SessionSignal::FightRecorded {
                outcome,
                move_count,
            },
            SessionSignal::RotationReset,
        ]
    }
}
