use clubsite_core::RawRecord;

use crate::StoreError;

/// Read-only query surface of the hosted document database.
///
/// Paths are segment lists: an odd number of segments names a collection,
/// an even number names a document.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_documents(&self, path: &[&str]) -> Result<Vec<RawRecord>, StoreError>;

    /// `Ok(None)` when the document does not exist.
    async fn get_document(&self, path: &[&str]) -> Result<Option<RawRecord>, StoreError>;
}
