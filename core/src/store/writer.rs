//! Write-through persistence queue.
//!
//! Callers submit saves fire-and-forget; a single consumer task performs
//! them in submission order, so two rapid mutations of the same key can
//! never land out of order. Failures are logged and swallowed.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::adapter::StateStore;

struct WriteRequest {
    key: &'static str,
    payload: String,
}

pub struct StoreWriter {
    tx: mpsc::UnboundedSender<WriteRequest>,
}

impl StoreWriter {
    /// Spawn the consumer task over the given store.
    ///
    /// Dropping the returned writer closes the queue; awaiting the handle
    /// afterwards flushes whatever is still in flight.
    pub fn spawn<S>(store: S) -> (Self, JoinHandle<()>)
    where
        S: StateStore + Send + Sync + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<WriteRequest>();
        let task = tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                if let Err(err) = store.save(request.key, &request.payload).await {
                    tracing::warn!(key = request.key, error = %err, "failed to persist state");
                }
            }
        });

        (Self { tx }, task)
    }

    /// Queue a whole-value save for the key.
    pub fn submit(&self, key: &'static str, payload: String) {
        if self.tx.send(WriteRequest { key, payload }).is_err() {
            tracing::warn!(key, "store writer is gone; dropping save");
        }
    }
}
