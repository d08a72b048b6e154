//! Append-only win/loss history for completed fights.
//!
//! Records are immutable once created and the log only grows across the
//! session. Resetting the rotation never touches it.

use chrono::Utc;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::game_data::Move;


/// Outcome of a completed fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    Win,
    Loss,
}

/// Finalized log entry for one completed encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightRecord {
    /// Moves observed over the fight, oldest first.
    pub moves: Vec<Move>,
    /// RFC 2822 UTC time the record was taken.
    pub timestamp: String,
}

/// Win/loss log for the session. Persisted whole under the record key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordState {
    pub wins: Vec<FightRecord>,
    pub losses: Vec<FightRecord>,
}

/// Append a fight to the matching sequence with a call-time timestamp.
/// The other sequence is left untouched; the operation is total.
pub fn record_fight(state: &RecordState, outcome: FightOutcome, moves: Vec<Move>) -> RecordState {
    let record = FightRecord {
        moves,
        timestamp: Utc::now().to_rfc2822(),
    };

    let mut next = state.clone();
    match outcome {
        FightOutcome::Win => next.wins.push(record),
        FightOutcome::Loss => next.losses.push(record),
    }
    next
}

impl RecordState {
    pub fn win_count(&self) -> usize {
        self.wins.len()
    }

    pub fn loss_count(&self) -> usize {
        self.losses.len()
    }

    pub fn fight_count(&self) -> usize {
        self.wins.len() + self.losses.len()
    }

    /// All records with their outcome, wins first, each in insertion order.
    pub fn all_records(&self) -> impl Iterator<Item = (FightOutcome, &FightRecord)> {
        self.wins
            .iter()
            .map(|record| (FightOutcome::Win, record))
            .chain(self.losses.iter().map(|record| (FightOutcome::Loss, record)))
    }

    /// How often each move shows up across all recorded fights.
    pub fn move_usage(&self) -> HashMap<Move, u32> {
        let mut usage = HashMap::new();
        for (_, record) in self.all_records() {
            for &mv in &record.moves {
                *usage.entry(mv).or_insert(0) += 1;
            }
        }
        usage
    }
}
