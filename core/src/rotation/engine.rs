//! Rotation state machine.
//!
//! Transitions are pure: the caller owns the state value and receives a new
//! one. Nothing here performs IO or emits notifications; the session layer
//! handles both.

use crate::game_data::{Move, profile};

use super::error::RotationError;
use super::state::{ObservationEvent, RotationState};

/// Advance the rotation by one observed move.
pub fn advance_rotation(
    state: &RotationState,
    event: ObservationEvent,
) -> Result<RotationState, RotationError> {
    match event {
        ObservationEvent::SpecialUsed => handle_special(state),
        ObservationEvent::BasicUsed => Ok(handle_basic(state)),
        ObservationEvent::ArmageddonUsed => Ok(handle_armageddon(state)),
        ObservationEvent::Reset => Ok(RotationState::default()),
    }
}

fn handle_special(state: &RotationState) -> Result<RotationState, RotationError> {
    let config = profile(state.next_move);
    let successor = config.next_move.ok_or(RotationError::NoSuccessor {
        predicted: state.next_move,
    })?;

    let mut previous_moves = state.previous_moves.clone();
    previous_moves.push(state.next_move);

    Ok(RotationState {
        next_move: successor,
        previous_moves,
        charge: state.charge + config.charge_rate,
    })
}

fn handle_basic(state: &RotationState) -> RotationState {
    let basic = profile(Move::Basic);

    // An interleaved basic attack does not interrupt the predicted cycle
    // unless Basic itself was the prediction.
    let next_move = if state.next_move == Move::Basic {
        basic.next_move.unwrap_or(state.next_move)
    } else {
        state.next_move
    };

    let mut previous_moves = state.previous_moves.clone();
    previous_moves.push(Move::Basic);

    RotationState {
        next_move,
        previous_moves,
        charge: state.charge + basic.charge_rate,
    }
}

fn handle_armageddon(state: &RotationState) -> RotationState {
    let mut previous_moves = state.previous_moves.clone();
    previous_moves.push(Move::Armageddon);

    RotationState {
        next_move: state.next_move,
        previous_moves,
        charge: 0,
    }
}
