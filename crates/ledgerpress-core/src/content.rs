//! Content store collaborator seam

use async_trait::async_trait;

use crate::errors::ExError;

/// Blob store holding page bodies and template assets
///
/// Ids are opaque to the core; the ledger only records them.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` and return the content id
    async fn put(&self, bytes: Vec<u8>) -> Result<String, ExError>;

    /// `None` when no blob has `content_id`
    async fn get(&self, content_id: &str) -> Result<Option<Vec<u8>>, ExError>;
}
