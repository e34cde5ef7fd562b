//! Pokedex - A PokeAPI explorer backed by a timed response cache
//!
//! The [`cache::TimedCache`] keeps raw API responses for a sliding TTL and
//! reaps stale entries in the background. Everything else is the glue that
//! fetches, decodes and prints PokeAPI resources from an interactive prompt.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::TimedCache;
pub use config::Config;
pub use repl::Repl;
pub use tasks::spawn_reaper_task;
