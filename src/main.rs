//! Contest bot entry point.
//!
//! Reads turns from stdin and answers each with one command line on stdout.
//! Diagnostics go to stderr only.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ccg_bot::driver::{load_snapshot, DriverConfig, TurnDriver};
use ccg_bot::search::SearchConfig;

#[derive(Parser, Debug)]
#[command(name = "ccg-bot", about = "Card game bot speaking the line protocol on stdin/stdout")]
struct Cli {
    /// Search time budget per battle turn in milliseconds
    #[arg(long, default_value_t = 95)]
    budget_ms: u64,

    /// Maximum search nodes per battle turn
    #[arg(long, default_value_t = 5_000_000)]
    max_nodes: usize,

    /// Skip states already expanded in the same search
    #[arg(long)]
    dedup: bool,

    /// Log filter for stderr (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Record every battle state into this directory
    #[arg(long, value_name = "DIR")]
    record: Option<PathBuf>,

    /// Search a recorded state once, print the command and exit
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,
}

impl Cli {
    fn driver_config(&self) -> DriverConfig {
        let search = SearchConfig::default()
            .with_time_budget_ms(self.budget_ms)
            .with_max_nodes(self.max_nodes)
            .with_dedup(self.dedup);

        let config = DriverConfig::default().with_search(search);
        match &self.record {
            Some(dir) => config.with_snapshot_dir(dir),
            None => config,
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level '{}'", level))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let mut driver = TurnDriver::new(cli.driver_config());

    if let Some(path) = &cli.replay {
        let state = load_snapshot(path).with_context(|| format!("loading {}", path.display()))?;
        eprintln!("{}", state);
        let command = driver.play_turn(&state)?;
        println!("{}", command);
        eprintln!("{:#?}", driver.last_search_stats());
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    driver
        .run(stdin.lock(), stdout.lock())
        .context("game loop failed")?;
    Ok(())
}
