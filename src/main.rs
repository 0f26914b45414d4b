use brainwave::core::config::{self, CliOverrides};
use brainwave::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "brainwave", about = "Parking lot analytics demo")]
struct Args {
    /// Seed for the mock parking data (same seed, same data)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated fetch latency in milliseconds
    #[arg(long)]
    fetch_latency_ms: Option<u64>,

    /// Log level written to brainwave.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to brainwave.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("brainwave.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        Default::default()
    });
    let cli = CliOverrides {
        seed: args.seed,
        fetch_latency_ms: args.fetch_latency_ms,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "BrainWave starting up (seed: {:?}, fetch latency: {:?})",
        resolved.seed,
        resolved.timing.fetch_latency
    );

    tui::run(resolved)
}
