//! RegioJet HTTP client.
//!
//! Provides async methods for querying station boards and matching
//! connections. The client performs no retries and no logging; both are
//! the caller's responsibility.

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tokio::sync::Semaphore;

use crate::domain::{ConnectionMatch, Direction, ServiceRecord, StationId};

use super::convert::{connection_from_route, records_from_routes};
use super::error::RegioJetError;
use super::types::RouteDto;

/// Default base URL for the RegioJet public API.
const DEFAULT_BASE_URL: &str = "https://brn-ybus-pubapi.sa.cz/restapi";

/// Default language code sent as `X-Lang`.
const DEFAULT_LANGUAGE: &str = "cs";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds. The upstream documents none, so a
/// conservative fixed bound is applied.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the RegioJet client.
#[derive(Debug, Clone)]
pub struct RegioJetConfig {
    /// Base URL for the API (defaults to the production endpoint)
    pub base_url: String,
    /// Language code sent as the `X-Lang` header
    pub language: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
}

impl RegioJetConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the response language (cs, en, de, ...).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }
}

impl Default for RegioJetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// RegioJet API client.
///
/// Provides methods for querying station boards. Uses a semaphore to limit
/// concurrent requests; the API is unauthenticated and undocumented, so
/// being a polite client is the only rate policy available.
#[derive(Debug, Clone)]
pub struct RegioJetClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl RegioJetClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RegioJetConfig) -> Result<Self, RegioJetError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let language =
            HeaderValue::from_str(&config.language).map_err(|_| RegioJetError::Config {
                message: format!("language {:?} is not a valid header value", config.language),
            })?;
        headers.insert(HeaderName::from_static("x-lang"), language);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch a station board as raw route DTOs, truncated to `limit`.
    ///
    /// `limit` is sent upstream as a query parameter and additionally
    /// enforced on the parsed array, so the result length is
    /// min(response length, `limit`) whatever the server decides.
    pub async fn board_raw(
        &self,
        station: &StationId,
        direction: Direction,
        limit: usize,
    ) -> Result<Vec<RouteDto>, RegioJetError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RegioJetError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!(
            "{}/routes/{}/{}",
            self.base_url,
            station.as_str(),
            direction.as_path_segment()
        );

        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegioJetError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let mut routes: Vec<RouteDto> =
            serde_json::from_str(&body).map_err(|e| RegioJetError::MalformedResponse {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        routes.truncate(limit);
        Ok(routes)
    }

    /// Fetch a station board as normalized `ServiceRecord`s.
    ///
    /// Empty boards are a valid, empty result, not an error.
    pub async fn board(
        &self,
        station: &StationId,
        direction: Direction,
        limit: usize,
    ) -> Result<Vec<ServiceRecord>, RegioJetError> {
        let routes = self.board_raw(station, direction, limit).await?;
        Ok(records_from_routes(&routes, limit))
    }

    /// Services arriving at a station.
    pub async fn arrivals(
        &self,
        station: &StationId,
        limit: usize,
    ) -> Result<Vec<ServiceRecord>, RegioJetError> {
        self.board(station, Direction::Arrivals, limit).await
    }

    /// Services departing from a station.
    pub async fn departures(
        &self,
        station: &StationId,
        limit: usize,
    ) -> Result<Vec<ServiceRecord>, RegioJetError> {
        self.board(station, Direction::Departures, limit).await
    }

    /// Departures from `from` that also call at `to`.
    ///
    /// Scans up to `limit` departures; routes without a calling point at
    /// `to` are dropped.
    pub async fn find_connections(
        &self,
        from: &StationId,
        to: &StationId,
        limit: usize,
    ) -> Result<Vec<ConnectionMatch>, RegioJetError> {
        let routes = self.board_raw(from, Direction::Departures, limit).await?;

        Ok(routes
            .iter()
            .filter_map(|r| connection_from_route(r, from, to))
            .collect())
    }
}
