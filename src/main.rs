use anyhow::Result;
use clap::Parser;
use statserve::{init_logging, serve, FileRecorder, Recorder, StdoutRecorder};
use std::{path::PathBuf, sync::Arc};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "statserve")]
#[command(about = "Descriptive statistics API server")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Address to bind
    #[arg(short = 'b', long, default_value = "127.0.0.1")]
    host: String,

    /// Append operation records to this file instead of standard output
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Choose the operation record sink
    let recorder: Arc<dyn Recorder> = match cli.log_file {
        Some(path) => {
            info!("Recording operations to {:?}", path);
            Arc::new(FileRecorder::new(path))
        }
        None => Arc::new(StdoutRecorder),
    };

    info!("Starting statistics API server");
    serve(cli.host, cli.port, recorder).await?;

    Ok(())
}
