use routine_stream::config::StreamConfig;
use routine_stream::replay::replay;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::io::Write;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("routine-stream {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    let config = StreamConfig::from_env()?;
    init_tracing(&config.log_filter);

    // First non-flag argument is the transcript path; stdin otherwise
    let path = std::env::args().skip(1).find(|arg| !arg.starts_with("--"));

    let runtime = tokio::runtime::Runtime::new()?;
    let replayed = runtime.block_on(async {
        let replayed = match path.as_deref() {
            Some(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .wrap_err_with(|| format!("Failed to open {}", path))?;
                replay(file, &config).await?
            }
            None => replay(tokio::io::stdin(), &config).await?,
        };
        Ok::<_, color_eyre::Report>(replayed)
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &replayed.records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    out.flush()?;

    tracing::info!(outcome = ?replayed.outcome, "Replay finished");
    Ok(())
}
