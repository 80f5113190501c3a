use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use time::OffsetDateTime;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Sink for one-line operational records. Injected through `AppState` so
/// tests can substitute a capturing implementation.
#[async_trait]
pub trait Recorder: Send + Sync {
    async fn record(&self, content: &str) -> Result<()>;
}

/// Prints records to standard output, one line each.
pub struct StdoutRecorder;

#[async_trait]
impl Recorder for StdoutRecorder {
    async fn record(&self, content: &str) -> Result<()> {
        println!("{}", content);
        Ok(())
    }
}

/// Appends timestamped records to a file. Each entry is a block of the
/// form `<timestamp>\n<content>\n\n`.
pub struct FileRecorder {
    path: PathBuf,
}

impl FileRecorder {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Recorder for FileRecorder {
    async fn record(&self, content: &str) -> Result<()> {
        let entry = format!("{}\n{}\n\n", OffsetDateTime::now_utc(), content);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(entry.as_bytes()).await?;

        Ok(())
    }
}
