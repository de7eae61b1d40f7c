use clap::Parser;
use postsearch::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

const DEBUG_LOG: &str = "/tmp/postsearch-debug.log";

/// Route `tracing` output to [`DEBUG_LOG`], filtered by `RUST_LOG` when set.
fn init_debug_log() -> anyhow::Result<()> {
    let log = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(DEBUG_LOG)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(log))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), path = DEBUG_LOG, "debug logging enabled");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.debug {
        init_debug_log()?;
    }
    println!("{}", run(&cli)?);
    Ok(())
}
