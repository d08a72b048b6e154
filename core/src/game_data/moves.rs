//! Static move data for the Nemesis rotation.
//!
//! Profiles map each attack to its charge contribution, target scope, and
//! place in the rotation cycle. The special cycle is
//! Ethereal Cannon → Ultra Spark → Basic → Ethereal Cannon; Armageddon sits
//! outside the cycle and is reached through the charge meter only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Charge the boss must accumulate before Armageddon is offered.
pub const ARMAGEDDON_CHARGE_THRESHOLD: u32 = 21;

/// One of the four attacks Nemesis can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    EtherealCannon,
    UltraSpark,
    Armageddon,
    Basic,
}

impl Move {
    /// All moves, cycle order first, Armageddon last.
    pub const ALL: [Move; 4] = [
        Move::EtherealCannon,
        Move::UltraSpark,
        Move::Basic,
        Move::Armageddon,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Move::EtherealCannon => "Ethereal Cannon",
            Move::UltraSpark => "Ultra Spark",
            Move::Armageddon => "Armageddon",
            Move::Basic => "Basic Attack",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Static per-move configuration driving the rotation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveProfile {
    /// Added to the charge meter when this move is observed.
    pub charge_rate: u32,
    /// Whether the attack hits the whole party or a single target.
    pub is_area_effect: bool,
    /// Whether a basic-attack option is offered while this move is predicted.
    pub allows_basic_followup: bool,
    /// The move predicted to follow. Armageddon has no successor.
    pub next_move: Option<Move>,
    /// Whether observing this move zeroes the charge meter.
    pub resets_charge: bool,
}

/// Look up the static profile for a move. Exactly one profile per move.
pub const fn profile(mv: Move) -> MoveProfile {
    match mv {
        Move::EtherealCannon => MoveProfile {
            charge_rate: 2,
            is_area_effect: false,
            allows_basic_followup: true,
            next_move: Some(Move::UltraSpark),
            resets_charge: false,
        },
        Move::UltraSpark => MoveProfile {
            charge_rate: 2,
            is_area_effect: true,
            allows_basic_followup: true,
            next_move: Some(Move::Basic),
            resets_charge: false,
        },
        Move::Basic => MoveProfile {
            charge_rate: 3,
            is_area_effect: false,
            allows_basic_followup: false,
            next_move: Some(Move::EtherealCannon),
            resets_charge: false,
        },
        Move::Armageddon => MoveProfile {
            charge_rate: 0,
            is_area_effect: true,
            allows_basic_followup: false,
            next_move: None,
            resets_charge: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specials_form_a_closed_cycle() {
        let mut current = Move::EtherealCannon;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(current);
            current = profile(current)
                .next_move
                .expect("cycle member has a successor");
        }
        assert_eq!(current, Move::EtherealCannon);
        assert_eq!(seen, [Move::EtherealCannon, Move::UltraSpark, Move::Basic]);
    }

    #[test]
    fn armageddon_sits_outside_the_cycle() {
        let config = profile(Move::Armageddon);
        assert!(config.next_move.is_none());
        assert!(config.resets_charge);
        assert_eq!(config.charge_rate, 0);

        // No cycle member points at Armageddon.
        for mv in [Move::EtherealCannon, Move::UltraSpark, Move::Basic] {
            assert_ne!(profile(mv).next_move, Some(Move::Armageddon));
        }
    }
}
