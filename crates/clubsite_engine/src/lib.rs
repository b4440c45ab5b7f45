//! Clubsite engine: document store access, local persistence and the
//! presentation cache.
mod cache;
mod clock;
mod decode;
mod filename;
mod firestore;
mod kv;
mod loader;
mod store;
mod types;

pub use cache::{CacheEntry, CacheGate};
pub use clock::{Clock, ManualClock, SystemClock};
pub use decode::{decode_fields, decode_value, document_id};
pub use filename::cache_filename;
pub use firestore::{FirestoreStore, StoreSettings};
pub use kv::{ensure_dir, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, PersistError};
pub use loader::{layout, LoaderSettings, SiteLoader};
pub use store::DocumentStore;
pub use types::{FailureKind, StoreError};
