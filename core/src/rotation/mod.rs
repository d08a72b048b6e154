pub mod engine;
pub mod error;
pub mod state;


pub use engine::advance_rotation;
pub use error::RotationError;
pub use state::{ObservationEvent, OfferedAction, RotationState};
