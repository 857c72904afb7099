//! Shard layout: `<root>/<first two hex chars>/<id>.blob`

use std::path::{Path, PathBuf};

pub const BLOB_EXTENSION: &str = "blob";

/// Path of the blob named `content_id`
///
/// Callers must have checked `content_id` with `is_content_id`.
pub fn shard_path(root: &Path, content_id: &str) -> PathBuf {
    let shard = &content_id[..2.min(content_id.len())];
    root.join(shard)
        .join(format!("{}.{}", content_id, BLOB_EXTENSION))
}

/// Lowercase 64-digit hex, the only names this store ever creates
pub fn is_content_id(value: &str) -> bool {
    value.len() == 64 && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_path() {
        let id = format!("ab{}", "0".repeat(62));
        let path = shard_path(Path::new("/blobs"), &id);
        assert_eq!(path, PathBuf::from(format!("/blobs/ab/{}.blob", id)));
    }

    #[test]
    fn test_content_id_rejects_traversal() {
        assert!(is_content_id(&"f".repeat(64)));
        assert!(!is_content_id(&"F".repeat(64)));
        assert!(!is_content_id("../../etc/passwd"));
        assert!(!is_content_id(&"a".repeat(63)));
    }
}
