//! Error types for the cache, the PokeAPI client and the command layer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing a [`crate::cache::TimedCache`].
///
/// Reads and writes never fail; a missing key is a normal `None`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The cache was configured with an unusable value (e.g. a zero TTL)
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(String),

    /// No Tokio runtime is available to run the reaper task
    #[error("Timed cache must be created inside a Tokio runtime")]
    NoRuntime,
}

// == Fetch Error Enum ==
/// Errors raised by [`crate::api::PokeApiClient`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the body could not be read
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON we expected
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

// == Command Error Enum ==
/// Errors returned by REPL commands. They are printed and the loop continues.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was called with missing or wrong arguments
    #[error("{0}")]
    Usage(String),

    /// The named location area or Pokemon does not exist
    #[error("{0}")]
    NotFound(String),

    /// Fetching from PokeAPI failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing to the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
