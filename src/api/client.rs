//! PokeAPI Client
//!
//! Fetches raw response bodies through the timed cache and decodes them.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for PokeAPI with a response cache in front of the network.
///
/// Cache keys are full request URLs, pagination query included; cached values
/// are the raw bodies, decoded on every use.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: TimedCache,
}

impl PokeApiClient {
    /// Creates a client for `base_url` (e.g. `https://pokeapi.co/api/v2`)
    /// with default HTTP settings.
    pub fn new(base_url: impl Into<String>, cache: TimedCache) -> Self {
        Self::with_http(Client::new(), base_url, cache)
    }

    /// Creates a client from the application configuration.
    pub fn from_config(config: &Config, cache: TimedCache) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.http_timeout_duration())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::with_http(http, config.api_url.clone(), cache))
    }

    fn with_http(http: Client, base_url: impl Into<String>, cache: TimedCache) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &TimedCache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Get Body ==
    /// Returns the raw body for `url`, from the cache when fresh, otherwise
    /// from the network.
    ///
    /// Every successful fetch, including a cache hit, is written back so its
    /// idle timer restarts. Failed requests and non-success statuses are not
    /// cached.
    pub async fn get_body(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let body = match self.cache.get(url).await {
            Some(body) => body,
            None => self.fetch(url).await?,
        };

        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "Fetching from network");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Request failed");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.get_body(url).await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    // == Resources ==
    /// Fetches a page of location areas: the first page when `page_url` is
    /// `None`, otherwise the `next`/`previous` URL of an earlier page.
    pub async fn location_areas(
        &self,
        page_url: Option<&str>,
    ) -> Result<LocationAreaPage, FetchError> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.location_areas_url(),
        };
        self.get_json(&url).await
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea, FetchError> {
        self.get_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, FetchError> {
        self.get_json(&self.pokemon_url(name)).await
    }
}
