use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use nemesis_core::game_data::{ARMAGEDDON_CHARGE_THRESHOLD, Move, profile};
use nemesis_core::record::FightOutcome;
use nemesis_core::rotation::{ObservationEvent, OfferedAction};
use nemesis_core::session::{SessionCommand, SessionSignal};
use nemesis_core::store::{
    FileStore, RECORD_KEY, ROTATION_KEY, StateStore, StoreError, StoreWriter, decode, encode,
};

use crate::context::CliContext;

/// Load both stored containers in parallel and install them, then start the
/// write-through queue. Runs before the REPL accepts input.
pub async fn hydrate(ctx: &CliContext) {
    let config = ctx.config.read().await.clone();

    if !config.persist_state {
        ctx.session.write().await.hydrate(None, None);
        println!("Persistence disabled; tracking in memory only.");
        return;
    }

    let store = FileStore::new(config.resolved_data_dir());
    let (rotation_blob, record_blob) = tokio::join!(store.load(ROTATION_KEY), store.load(RECORD_KEY));

    let rotation = decode_loaded(ROTATION_KEY, rotation_blob);
    let records = decode_loaded(RECORD_KEY, record_blob);
    let restored = rotation.is_some() || records.is_some();

    let signals = ctx.session.write().await.hydrate(rotation, records);
    render_signals(&signals);

    let (writer, task) = StoreWriter::spawn(store);
    *ctx.writer.write().await = Some(writer);
    ctx.tasks.lock().await.store_writer = Some(task);

    if restored {
        println!(
            "Restored saved state from {}",
            config.resolved_data_dir().display()
        );
    }
}

/// A failed or unreadable load is treated the same as an absent value.
fn decode_loaded<T: serde::de::DeserializeOwned>(
    key: &str,
    loaded: Result<Option<String>, StoreError>,
) -> Option<T> {
    match loaded {
        Ok(Some(payload)) => match decode(&payload) {
            Ok(value) => Some(value),
            Err(err) => {
                println!("Saved {key} state is unreadable, starting fresh ({err})");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            println!("Could not load saved {key} state, starting fresh ({err})");
            None
        }
    }
}

pub async fn report_special(ctx: &CliContext) {
    observe(ctx, ObservationEvent::SpecialUsed).await;
}

pub async fn report_basic(ctx: &CliContext) {
    observe(ctx, ObservationEvent::BasicUsed).await;
}

pub async fn report_armageddon(ctx: &CliContext) {
    {
        let session = ctx.session.read().await;
        let rotation = session.rotation();
        if session.is_ready() && !rotation.armageddon_ready() {
            println!(
                "Armageddon is not charged yet ({}/{})",
                rotation.charge, ARMAGEDDON_CHARGE_THRESHOLD
            );
            return;
        }
    }
    observe(ctx, ObservationEvent::ArmageddonUsed).await;
}

pub async fn reset_rotation(ctx: &CliContext) {
    observe(ctx, ObservationEvent::Reset).await;
}

async fn observe(ctx: &CliContext, event: ObservationEvent) {
    let result = ctx
        .session
        .write()
        .await
        .apply(SessionCommand::Observe(event));

    match result {
        Ok(signals) => {
            render_signals(&signals);
            persist_rotation(ctx).await;
        }
        Err(err) => println!("{err}"),
    }
}

pub async fn record_outcome(ctx: &CliContext, outcome: FightOutcome) {
    let result = ctx
        .session
        .write()
        .await
        .apply(SessionCommand::Record(outcome));

    match result {
        Ok(signals) => {
            render_signals(&signals);
            persist_rotation(ctx).await;
            persist_records(ctx).await;
        }
        Err(err) => println!("{err}"),
    }
}

pub async fn show_status(ctx: &CliContext) {
    let session = ctx.session.read().await;
    let rotation = session.rotation();
    let records = session.records();
    let config = profile(rotation.next_move);

    println!(
        "Wins: {}  Losses: {}",
        records.win_count(),
        records.loss_count()
    );
    println!("Armageddon Charge: {}", rotation.charge);
    println!(
        "Next Target: {}",
        if config.is_area_effect { "AOE" } else { "Single" }
    );
    println!("Move Count: {}", rotation.move_count());
    println!();
    println!("What move did Nemesis just use?");
    for action in rotation.offered_actions() {
        match action {
            OfferedAction::Special(mv) => println!("  special     - {mv}"),
            OfferedAction::Basic => println!("  basic       - Basic Attack"),
            OfferedAction::Armageddon => println!("  armageddon  - Armageddon"),
        }
    }
}

pub async fn show_history(ctx: &CliContext) {
    let session = ctx.session.read().await;
    let records = session.records();

    if records.fight_count() == 0 {
        println!("No fights recorded yet");
        return;
    }

    println!("{:<7} {:<7} {:<22} Moves", "Fight", "Result", "Recorded");
    println!("{}", "-".repeat(60));

    for (idx, (outcome, record)) in records.all_records().enumerate() {
        let result = match outcome {
            FightOutcome::Win => "win",
            FightOutcome::Loss => "loss",
        };
        println!(
            "{:<7} {:<7} {:<22} {}",
            idx + 1,
            result,
            local_timestamp(&record.timestamp),
            record.moves.len()
        );
    }

    println!("\nTotal: {} fights", records.fight_count());
}

/// Render a stored RFC 2822 timestamp in local time, falling back to the
/// raw string when it does not parse.
fn local_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc2822(raw)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

pub async fn show_stats(ctx: &CliContext) {
    let session = ctx.session.read().await;
    let usage = session.records().move_usage();

    if usage.is_empty() {
        println!("No fights recorded yet");
        return;
    }

    println!("{:<16} Uses", "Move");
    println!("{}", "-".repeat(22));
    for mv in Move::ALL {
        if let Some(count) = usage.get(&mv) {
            println!("{:<16} {count}", mv.display_name());
        }
    }
}

pub async fn show_settings(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("persist_state: {}", config.persist_state);
    println!("data_directory: {}", config.resolved_data_dir().display());
}

pub async fn set_data_dir(new_directory: &str, ctx: &CliContext) {
    let path = PathBuf::from(new_directory);
    if !(path.exists() && path.is_dir()) {
        println!("Update failed. Invalid directory name given.");
        return;
    }

    {
        let mut config = ctx.config.write().await;
        if config.data_directory == new_directory {
            println!("State directory already configured to {new_directory}");
            return;
        }
        config.data_directory = new_directory.to_string();
        if let Err(err) = config.clone().save() {
            println!("Failed to save configuration: {err}");
        }
    }

    // Retire the old writer first so queued saves land in the old location
    // before the new one takes over.
    ctx.writer.write().await.take();
    ctx.tasks.lock().await.flush_all().await;

    let config = ctx.config.read().await.clone();
    if config.persist_state {
        let (writer, task) = StoreWriter::spawn(FileStore::new(config.resolved_data_dir()));
        *ctx.writer.write().await = Some(writer);
        ctx.tasks.lock().await.store_writer = Some(task);

        // Seed the new directory with the current state right away.
        persist_rotation(ctx).await;
        persist_records(ctx).await;
    }

    println!("State directory set to {new_directory}");
}

pub async fn exit(ctx: &CliContext) {
    // Closing the queue and awaiting the task flushes pending saves.
    ctx.writer.write().await.take();
    ctx.tasks.lock().await.flush_all().await;

    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}

fn render_signals(signals: &[SessionSignal]) {
    for signal in signals {
        match signal {
            SessionSignal::MoveObserved { observed, charge } => {
                println!("{observed} used! (charge: {charge})");
            }
            SessionSignal::ArmageddonReady { charge } => {
                println!("Armageddon is ready at {charge} charge!");
            }
            SessionSignal::RotationReset => println!("Rotation reset"),
            SessionSignal::FightRecorded {
                outcome: FightOutcome::Win,
                ..
            } => println!("Win recorded"),
            SessionSignal::FightRecorded {
                outcome: FightOutcome::Loss,
                ..
            } => println!("Loss recorded"),
            SessionSignal::CommandDeferred => {
                println!("Saved state is still loading; action queued");
            }
            SessionSignal::Hydrated { .. } => {}
        }
    }
}

async fn persist_rotation(ctx: &CliContext) {
    let writer_guard = ctx.writer.read().await;
    let Some(writer) = writer_guard.as_ref() else {
        return;
    };

    let session = ctx.session.read().await;
    match encode(session.rotation()) {
        Ok(payload) => writer.submit(ROTATION_KEY, payload),
        Err(err) => println!("Failed to serialize rotation state: {err}"),
    }
}

async fn persist_records(ctx: &CliContext) {
    let writer_guard = ctx.writer.read().await;
    let Some(writer) = writer_guard.as_ref() else {
        return;
    };

    let session = ctx.session.read().await;
    match encode(session.records()) {
        Ok(payload) => writer.submit(RECORD_KEY, payload),
        Err(err) => println!("Failed to serialize record state: {err}"),
    }
}
