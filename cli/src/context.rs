use std::sync::Arc;

use nemesis_core::context::{AppConfig, BackgroundTasks};
use nemesis_core::session::FightSession;
use nemesis_core::store::StoreWriter;
use tokio::sync::{Mutex, RwLock};

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub session: Arc<RwLock<FightSession>>,
    /// Write-through persistence queue. None while running in memory.
    pub writer: Arc<RwLock<Option<StoreWriter>>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::load())),
            session: Arc::new(RwLock::new(FightSession::new())),
            writer: Arc::new(RwLock::new(None)),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
        }
    }
}
