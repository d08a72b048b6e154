use tokio::task::JoinHandle;

#[derive(Default)]
pub struct BackgroundTasks {
    pub store_writer: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    /// Await the writer task so queued saves land before exit.
    pub async fn flush_all(&mut self) {
        if let Some(handle) = self.store_writer.take() {
            handle.await.ok();
        }
    }
}
