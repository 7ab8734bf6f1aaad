use crate::error::Result;

/// Abstract interface for raw blob I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`WordStore`](super::WordStore) handles the "what" (the collection, its
/// invariants, and when to persist).
///
/// A blob is an opaque string addressed by a fixed key. The backend never
/// interprets the contents.
pub trait BlobBackend {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn load_blob(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_blob(&self, key: &str, contents: &str) -> Result<()>;
}
