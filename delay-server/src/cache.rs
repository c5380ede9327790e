//! Caching layer for station board queries.
//!
//! The web endpoints re-render the same handful of boards on every page
//! load, so board responses are memoized for a short TTL. The CLI talks to
//! the client directly; a one-shot report gains nothing from a cache.
//!
//! Keys include the requested limit, so differently-bounded queries never
//! share an entry. Errors are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Direction, ServiceRecord, StationId};
use crate::regiojet::{RegioJetClient, RegioJetError};

/// Cache key for a board query.
type BoardKey = (StationId, Direction, usize);

/// Cached board entry.
type BoardEntry = Arc<Vec<ServiceRecord>>;

/// Configuration for the board cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 1000,
        }
    }
}

/// Cache for station board responses.
pub struct BoardCache {
    boards: MokaCache<BoardKey, BoardEntry>,
}

impl BoardCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let boards = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { boards }
    }

    /// Get a cached board entry.
    pub async fn get(&self, key: &BoardKey) -> Option<BoardEntry> {
        self.boards.get(key).await
    }

    /// Insert a board entry.
    pub async fn insert(&self, key: BoardKey, entry: BoardEntry) {
        self.boards.insert(key, entry).await;
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.boards.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.boards.invalidate_all();
    }
}

/// RegioJet client with board caching.
pub struct CachedRegioJetClient {
    client: RegioJetClient,
    cache: BoardCache,
}

impl CachedRegioJetClient {
    /// Create a new cached client.
    pub fn new(client: RegioJetClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: BoardCache::new(cache_config),
        }
    }

    /// Fetch a station board, using the cache when fresh.
    pub async fn board(
        &self,
        station: &StationId,
        direction: Direction,
        limit: usize,
    ) -> Result<BoardEntry, RegioJetError> {
        let key = (station.clone(), direction, limit);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        debug!(station = %station, %direction, limit, "board cache miss");

        let records = self.client.board(station, direction, limit).await?;
        let entry = Arc::new(records);

        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &RegioJetClient {
        &self.client
    }

    /// Number of cached entries.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
