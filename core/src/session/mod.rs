pub mod signal;
pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use signal::SessionSignal;
pub use tracker::{FightSession, HydrationState, SessionCommand};
