use crate::recorder::Recorder;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub recorder: Arc<dyn Recorder>,
}

impl AppState {
    pub fn new(recorder: Arc<dyn Recorder>) -> Self {
        Self { recorder }
    }

    /// Hands a completed-operation note to the recorder on a detached
    /// task, so the request never waits on the sink. Failures are logged
    /// and never reach the client.
    pub fn record(&self, content: String) {
        let recorder = Arc::clone(&self.recorder);
        tokio::spawn(async move {
            if let Err(e) = recorder.record(&content).await {
                warn!("Failed to record operation: {}", e);
            }
        });
    }
}
