//! Rotation tracking state and the events that advance it.

use serde::{Deserialize, Serialize};

use crate::game_data::{ARMAGEDDON_CHARGE_THRESHOLD, Move, profile};

/// Live rotation tracking state. Persisted whole under the rotation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    /// The move the boss is predicted to use next.
    pub next_move: Move,
    /// Moves observed so far this fight, oldest first.
    pub previous_moves: Vec<Move>,
    /// Accumulated Armageddon charge. May overshoot the threshold.
    pub charge: u32,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            next_move: Move::EtherealCannon,
            previous_moves: Vec::new(),
            charge: 0,
        }
    }
}

impl RotationState {
    pub fn armageddon_ready(&self) -> bool {
        self.charge >= ARMAGEDDON_CHARGE_THRESHOLD
    }

    pub fn move_count(&self) -> usize {
        self.previous_moves.len()
    }

    /// Actions the caller should offer for the current state.
    ///
    /// Once the charge threshold is reached, Armageddon replaces the
    /// rotation choices entirely until it is observed.
    pub fn offered_actions(&self) -> Vec<OfferedAction> {
        if self.armageddon_ready() {
            return vec![OfferedAction::Armageddon];
        }

        let mut actions = vec![OfferedAction::Special(self.next_move)];
        if profile(self.next_move).allows_basic_followup {
            actions.push(OfferedAction::Basic);
        }
        actions
    }
}

/// User-reported observation of what the boss just did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationEvent {
    /// The predicted special attack landed.
    SpecialUsed,
    /// An interleaved basic attack landed.
    BasicUsed,
    /// Armageddon landed.
    ArmageddonUsed,
    /// Discard charge and move history and start over.
    Reset,
}

/// A choice the caller can present to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferedAction {
    /// Report the predicted special attack.
    Special(Move),
    /// Report an interleaved basic attack.
    Basic,
    /// Report Armageddon (offered at full charge only).
    Armageddon,
}
