//! Read-through, time-boxed cache in front of remote fetches.
//!
//! The remote store stays authoritative; entries here only save a round trip
//! and are never deleted, just ignored once expired and overwritten by the
//! next successful fetch.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use site_logging::{site_debug, site_info, site_warn};

use clubsite_core::DisplayItem;

use crate::clock::duration_millis;
use crate::{Clock, FailureKind, KeyValueStore, StoreError};

/// Persisted form of one cached list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Vec<DisplayItem>,
    /// Milliseconds since the Unix epoch at write time.
    pub timestamp: i64,
}

impl CacheEntry {
    /// Valid while `now - timestamp < ttl`.
    pub fn is_fresh(&self, now_millis: i64, ttl: Duration) -> bool {
        now_millis.saturating_sub(self.timestamp) < duration_millis(ttl)
    }
}

#[derive(Clone)]
pub struct CacheGate {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    fetch_timeout: Option<Duration>,
}

impl CacheGate {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            fetch_timeout: None,
        }
    }

    /// Bounds every fetch; a fetch that overruns counts as failed.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Returns the cached list when fresh; otherwise runs `fetcher`, stores
    /// its result and returns it. A failed fetch yields an empty list and
    /// leaves any existing entry untouched.
    pub async fn get_cached<F, Fut>(&self, key: &str, ttl: Duration, fetcher: F) -> Vec<DisplayItem>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<DisplayItem>, StoreError>>,
    {
        if let Some(data) = self.read_fresh(key, ttl) {
            site_info!("Loaded {} from cache ({} items)", key, data.len());
            return data;
        }

        match self.run_fetch(fetcher()).await {
            Ok(data) => {
                self.store_entry(key, &data);
                site_info!("Loaded {} from the store and cached it", key);
                data
            }
            Err(err) => {
                site_warn!("Fetching {} failed: {}", key, err);
                Vec::new()
            }
        }
    }

    /// Same failure contract as [`CacheGate::get_cached`], without touching
    /// the persisted entries.
    pub async fn fetch_or_empty<Fut>(&self, label: &str, fetch: Fut) -> Vec<DisplayItem>
    where
        Fut: Future<Output = Result<Vec<DisplayItem>, StoreError>>,
    {
        match self.run_fetch(fetch).await {
            Ok(data) => data,
            Err(err) => {
                site_warn!("Fetching {} failed: {}", label, err);
                Vec::new()
            }
        }
    }

    /// The cached list when present, readable and not expired.
    pub fn read_fresh(&self, key: &str, ttl: Duration) -> Option<Vec<DisplayItem>> {
        let raw = self.store.read(key)?;
        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                site_warn!("Ignoring unreadable cache entry {}: {}", key, err);
                return None;
            }
        };
        if entry.is_fresh(self.clock.now_millis(), ttl) {
            Some(entry.data)
        } else {
            site_debug!("Cache entry {} expired", key);
            None
        }
    }

    pub async fn run_fetch<T, Fut>(&self, fetch: Fut) -> Result<T, StoreError>
    where
        Fut: Future<Output = Result<T, StoreError>>,
    {
        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, fetch).await.unwrap_or_else(|_| {
                Err(StoreError::new(
                    FailureKind::Timeout,
                    format!("no response within {limit:?}"),
                ))
            }),
            None => fetch.await,
        }
    }

    fn store_entry(&self, key: &str, data: &[DisplayItem]) {
        let entry = CacheEntry {
            data: data.to_vec(),
            timestamp: self.clock.now_millis(),
        };
        match serde_json::to_string(&entry) {
            Ok(text) => self.store.write(key, &text),
            Err(err) => site_warn!("Failed to serialize cache entry {}: {}", key, err),
        }
    }
}
