//! API Module
//!
//! HTTP client for PokeAPI. Every request goes through the [`crate::cache::TimedCache`].
//!
//! # Resources
//! - `GET /location-area/` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokemon encountered in an area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
