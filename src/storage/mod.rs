pub mod json_file;
pub mod memory;

use crate::errors::BooksError;

pub type Result<T> = std::result::Result<T, BooksError>;

/// Abstraction over persistence backends capable of storing snapshot blobs.
///
/// The store serializes [`crate::books::Books`] itself; a backend only moves
/// opaque bytes, so it can be backed by a file, a database row, or browser
/// storage behind FFI.
pub trait SnapshotStore: Send + Sync {
    /// Returns the previously saved blob, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Persists the full snapshot blob, replacing any previous one.
    fn save(&self, bytes: &[u8]) -> Result<()>;
}

/// Shared handles delegate, so a host can keep a reference to the backend
/// it hands the store.
impl<S: SnapshotStore + ?Sized> SnapshotStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        (**self).load()
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        (**self).save(bytes)
    }
}

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
