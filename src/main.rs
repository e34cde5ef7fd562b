//! Pokedex - A PokeAPI explorer backed by a timed response cache
//!
//! Starts the interactive prompt on stdin/stdout.

use anyhow::Context;
use clap::Parser;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{Config, PokeApiClient, Repl, TimedCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables, then CLI flags
/// 3. Create the timed cache, which starts its reaper
/// 4. Run the prompt until `exit` or end of input
/// 5. Close the cache
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the prompt; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Cli::parse().apply(Config::from_env());
    info!(
        "Configuration loaded: cache_ttl={}s, api_url={}, http_timeout={}s",
        config.cache_ttl, config.api_url, config.http_timeout
    );

    let cache =
        TimedCache::new(config.cache_ttl_duration()).context("failed to create response cache")?;
    let client =
        PokeApiClient::from_config(&config, cache.clone()).context("failed to create API client")?;

    let mut repl = Repl::new(client);
    let mut stdout = io::stdout();
    let result = repl.run(BufReader::new(io::stdin()), &mut stdout).await;

    cache.close();
    info!(stats = ?cache.stats().await, "Pokedex closed");

    result.context("terminal I/O failed")
}
