use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use clubsite_core::DisplayItem;
use clubsite_engine::{
    CacheEntry, CacheGate, FailureKind, KeyValueStore, ManualClock, MemoryKeyValueStore,
    StoreError,
};
use pretty_assertions::assert_eq;

const KEY: &str = "clubsite_collaborated_clubs";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn items(names: &[&str]) -> Vec<DisplayItem> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| DisplayItem::new(format!("id{i}"), *name, i as i64))
        .collect()
}

struct Fixture {
    store: Arc<MemoryKeyValueStore>,
    clock: Arc<ManualClock>,
    gate: CacheGate,
    calls: Arc<AtomicUsize>,
}

impl Fixture {
    fn new() -> Self {
        init_logging();
        let store = Arc::new(MemoryKeyValueStore::new());
        let clock = Arc::new(ManualClock::new(1_000_000));
        let gate = CacheGate::new(store.clone(), clock.clone());
        Self {
            store,
            clock,
            gate,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    async fn get(&self, ttl: Duration, result: Result<Vec<DisplayItem>, StoreError>) -> Vec<DisplayItem> {
        let calls = self.calls.clone();
        self.gate
            .get_cached(KEY, ttl, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                result
            })
            .await
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn network_error() -> StoreError {
    StoreError::new(FailureKind::Network, "connection refused")
}

#[tokio::test]
async fn entry_is_served_until_ttl_elapses() {
    let fx = Fixture::new();
    let ttl = Duration::from_millis(1000);

    let first = fx.get(ttl, Ok(items(&["A", "B"]))).await;
    assert_eq!(first, items(&["A", "B"]));
    assert_eq!(fx.calls(), 1);

    fx.clock.advance(Duration::from_millis(999));
    let cached = fx.get(ttl, Ok(items(&["fresh"]))).await;
    assert_eq!(cached, items(&["A", "B"]));
    assert_eq!(fx.calls(), 1);

    fx.clock.advance(Duration::from_millis(2));
    let refetched = fx.get(ttl, Ok(items(&["fresh"]))).await;
    assert_eq!(refetched, items(&["fresh"]));
    assert_eq!(fx.calls(), 2);
}

#[tokio::test]
async fn entry_at_exactly_ttl_is_expired() {
    let fx = Fixture::new();
    let ttl = Duration::from_millis(1000);
    fx.get(ttl, Ok(items(&["A"]))).await;

    fx.clock.advance(ttl);
    fx.get(ttl, Ok(items(&["B"]))).await;
    assert_eq!(fx.calls(), 2);
}

#[tokio::test]
async fn failed_fetch_returns_empty_and_keeps_stale_entry() {
    let fx = Fixture::new();
    let ttl = Duration::from_millis(1000);
    fx.get(ttl, Ok(items(&["stale"]))).await;
    let persisted = fx.store.read(KEY).expect("entry written");

    fx.clock.advance(Duration::from_secs(5));
    let result = fx.get(ttl, Err(network_error())).await;

    assert!(result.is_empty());
    assert_eq!(fx.store.read(KEY), Some(persisted));
}

#[tokio::test]
async fn network_error_on_cold_cache_yields_empty_list() {
    let fx = Fixture::new();
    let result = fx.get(Duration::from_secs(60), Err(network_error())).await;
    assert!(result.is_empty());
    assert_eq!(fx.store.read(KEY), None);
}

#[tokio::test]
async fn unreadable_entry_counts_as_a_miss() {
    let fx = Fixture::new();
    fx.store.write(KEY, "{ not json");

    let result = fx.get(Duration::from_secs(60), Ok(items(&["live"]))).await;

    assert_eq!(result, items(&["live"]));
    assert_eq!(fx.calls(), 1);
    let entry: CacheEntry = serde_json::from_str(&fx.store.read(KEY).unwrap()).unwrap();
    assert_eq!(entry.timestamp, 1_000_000);
}

#[tokio::test]
async fn slow_fetch_is_cut_off_by_timeout() {
    let fx = Fixture::new();
    let gate = fx.gate.clone().with_fetch_timeout(Duration::from_millis(20));

    let result = gate
        .get_cached(KEY, Duration::from_secs(60), || async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(items(&["late"]))
        })
        .await;

    assert!(result.is_empty());
    assert_eq!(fx.store.read(KEY), None);
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) {}
}

#[tokio::test]
async fn broken_persistence_still_returns_live_data() {
    init_logging();
    let gate = CacheGate::new(Arc::new(BrokenStore), Arc::new(ManualClock::new(0)));

    let result = gate
        .get_cached(KEY, Duration::from_secs(60), || async { Ok(items(&["live"])) })
        .await;

    assert_eq!(result, items(&["live"]));
}
