use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ledgerpress_core::errors::{ExError, ExErrorKind};
use ledgerpress_core::BlobStore;
use sha2::{Digest, Sha256};

use crate::cas::atomic::atomic_write;
use crate::cas::sharding::{is_content_id, shard_path};
use crate::errors::{content_collision, io_error, Result};

/// Local blob store keyed by SHA-256
///
/// Useful for offline authoring and tests. Writing the same bytes twice is
/// a no-op returning the same id.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store `content` and return its id
    ///
    /// # Errors
    /// `Io` on filesystem failure, `ContentCollision` when the file for this
    /// id already holds other bytes.
    pub fn write(&self, content: &[u8]) -> Result<String> {
        let content_id = content_id(content);
        let target_path = shard_path(&self.root, &content_id);

        if target_path.exists() {
            let existing = fs::read(&target_path).map_err(|e| io_error("read_blob", e))?;
            if existing == content {
                return Ok(content_id);
            }
            return Err(content_collision(&content_id));
        }

        atomic_write(&target_path, content)?;
        Ok(content_id)
    }

    /// `None` when no blob has this id, including ids this store cannot produce
    ///
    /// # Errors
    /// `Io` when the blob exists but cannot be read.
    pub fn read(&self, content_id: &str) -> Result<Option<Vec<u8>>> {
        if !is_content_id(content_id) {
            return Ok(None);
        }
        match fs::read(shard_path(&self.root, content_id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read_blob", e)),
        }
    }
}

/// SHA-256 of `content` as lowercase hex
pub fn content_id(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

fn join_error(err: tokio::task::JoinError) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("blob_task")
        .with_message(err.to_string())
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<String> {
        let store = self.clone();
        let id = tokio::task::spawn_blocking(move || store.write(&bytes))
            .await
            .map_err(join_error)??;
        tracing::debug!(content_id = %id, "blob stored");
        Ok(id)
    }

    async fn get(&self, content_id: &str) -> Result<Option<Vec<u8>>> {
        let store = self.clone();
        let id = content_id.to_string();
        tokio::task::spawn_blocking(move || store.read(&id))
            .await
            .map_err(join_error)?
    }
}
