//! Tests for state persistence
//!
//! Round-trips both persisted shapes through the codecs and the stores.

use std::path::PathBuf;

use crate::game_data::Move;
use crate::record::{FightRecord, RecordState};
use crate::rotation::RotationState;

use super::adapter::{MemoryStore, StateStore};
use super::file::FileStore;
use super::writer::StoreWriter;
use super::{RECORD_KEY, ROTATION_KEY, decode, encode};

fn sample_rotation() -> RotationState {
    RotationState {
        next_move: Move::Basic,
        previous_moves: vec![Move::EtherealCannon, Move::UltraSpark],
        charge: 4,
    }
}

fn sample_records() -> RecordState {
    RecordState {
        wins: vec![FightRecord {
            moves: vec![Move::EtherealCannon, Move::Armageddon],
            timestamp: "Tue, 09 Jun 2026 14:03:12 +0000".to_string(),
        }],
        losses: vec![FightRecord {
            moves: Vec::new(),
            timestamp: "Wed, 10 Jun 2026 09:15:44 +0000".to_string(),
        }],
    }
}

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nemesis-store-{label}-{}", std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    dir
}

#[test]
fn rotation_state_round_trips_through_the_codec() {
    let state = sample_rotation();
    let payload = encode(&state).expect("encodes");
    let back: RotationState = decode(&payload).expect("decodes");
    assert_eq!(back, state);
}

#[test]
fn record_state_round_trips_through_the_codec() {
    let state = sample_records();
    let payload = encode(&state).expect("encodes");
    let back: RecordState = decode(&payload).expect("decodes");
    assert_eq!(back, state);
}

#[test]
fn moves_persist_as_variant_names() {
    let payload = encode(&sample_rotation()).expect("encodes");
    assert!(payload.contains("\"Basic\""));
    assert!(payload.contains("\"EtherealCannon\""));
}

#[tokio::test]
async fn memory_store_round_trips_and_reports_absence() {
    let store = MemoryStore::new();
    assert_eq!(store.load(ROTATION_KEY).await.expect("load"), None);

    store.save(ROTATION_KEY, "charge = 3").await.expect("save");
    assert_eq!(
        store.load(ROTATION_KEY).await.expect("load"),
        Some("charge = 3".to_string())
    );
}

#[tokio::test]
async fn file_store_round_trips_and_reports_absence() {
    let dir = temp_dir("file");
    let store = FileStore::new(&dir);

    assert_eq!(store.load(RECORD_KEY).await.expect("load"), None);

    let payload = encode(&sample_records()).expect("encodes");
    store.save(RECORD_KEY, &payload).await.expect("save");

    let loaded = store
        .load(RECORD_KEY)
        .await
        .expect("load")
        .expect("present");
    let back: RecordState = decode(&loaded).expect("decodes");
    assert_eq!(back, sample_records());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn writer_applies_saves_in_submission_order() {
    let dir = temp_dir("writer");
    let (writer, task) = StoreWriter::spawn(FileStore::new(&dir));

    writer.submit(ROTATION_KEY, "charge = 1".to_string());
    writer.submit(ROTATION_KEY, "charge = 2".to_string());
    drop(writer);
    task.await.expect("writer task completes");

    let stored = FileStore::new(&dir)
        .load(ROTATION_KEY)
        .await
        .expect("load")
        .expect("present");
    assert_eq!(stored, "charge = 2");

    std::fs::remove_dir_all(&dir).ok();
}
