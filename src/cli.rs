//! Command-line interface parsing
//!
//! Flags given on the command line override the environment configuration.

use clap::Parser;

use crate::config::Config;

/// Pokedex - explore the Pokemon world from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive PokeAPI explorer with a timed response cache")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached response stays valid after its last use
    #[arg(long, value_name = "SECS")]
    pub ttl: Option<u64>,

    /// PokeAPI base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(ttl) = self.ttl {
            config.cache_ttl = ttl;
        }
        if let Some(api_url) = self.api_url {
            config.api_url = api_url.trim_end_matches('/').to_string();
        }
        config
    }
}
