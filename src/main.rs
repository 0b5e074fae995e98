// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing) on stderr; --debug turns it up
// 3. Wire Ctrl-C to the search's cancellation token
// 4. Run the search and print the Bacon Number
// 5. Exit with proper code (0 = found, 1 = search failed, 2 = error)
// =============================================================================

mod cli;
mod config;
mod search;
mod wiki;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::SearchConfig;
use search::{FrontierSearch, SearchStats};
use wiki::HttpFetcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = Bacon Number found
//   Ok(1) = dead end, fetch failure or abort
//   Err   = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bacon { topic, debug, trail } => {
            init_logging(debug)?;
            handle_bacon(&topic, debug, trail).await
        }
    }
}

// Logs go to stderr so stdout only carries results.
// RUST_LOG wins over the --debug default.
fn init_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("bacon_number={}", default_level)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn handle_bacon(topic: &str, debug: bool, trail: bool) -> Result<i32> {
    let config = SearchConfig::default();
    let fetcher = Arc::new(HttpFetcher::new(&config)?);

    let cancel = CancellationToken::new();
    watch_for_interrupt(cancel.clone());

    let mut search = FrontierSearch::new(fetcher, &config, cancel.clone());

    println!("Starting from {}.", topic);

    let exit_code = match search.search(topic).await {
        Ok(outcome) => {
            println!("The Bacon Number for {} is {}.", topic, outcome.depth);
            if trail {
                println!("{}", outcome.trail.join(" -> "));
            }
            0
        }
        Err(e) => {
            eprintln!("Failed to get Bacon Number: {}", e);
            1
        }
    };

    if debug {
        print_stats(&search.stats());
    }

    // Stop the interrupt watcher
    cancel.cancel();

    Ok(exit_code)
}

// Cancels the search on Ctrl-C
fn watch_for_interrupt(cancel: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    cancel.cancel();
                }
            }
        }
    });
}

fn print_stats(stats: &SearchStats) {
    println!("Explored topics size is {}.", stats.explored);
    println!("Loaded topics size is {}.", stats.loaded.len());
    debug!(loaded = ?stats.loaded, "loaded topics");
}
