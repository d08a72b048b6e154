pub mod context;
pub mod game_data;
pub mod record;
pub mod rotation;
pub mod session;
pub mod store;

// Re-exports for convenience
pub use context::{AppConfig, BackgroundTasks, ConfigError};
pub use game_data::{ARMAGEDDON_CHARGE_THRESHOLD, Move, MoveProfile, profile};
pub use record::{FightOutcome, FightRecord, RecordState, record_fight};
pub use rotation::{
    ObservationEvent, OfferedAction, RotationError, RotationState, advance_rotation,
};
pub use session::{FightSession, HydrationState, SessionCommand, SessionSignal};
pub use store::{
    FileStore, MemoryStore, RECORD_KEY, ROTATION_KEY, StateStore, StoreError, StoreWriter, decode,
    default_data_dir, encode,
};
