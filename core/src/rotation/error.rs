//! Error types for rotation transitions

use thiserror::Error;

use crate::game_data::Move;

/// Errors during rotation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("{predicted} has no successor; a special cannot be observed while it is predicted")]
    NoSuccessor { predicted: Move },
}
