use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::errors::BooksError;

use super::{Result, SnapshotStore};

/// In-memory snapshot store for embedding hosts and tests.
///
/// Saves and loads can be toggled to fail, which lets callers exercise the
/// mutate-then-persist contract (in-memory state keeps the mutation even
/// when the save errors) and the load-failure path on open.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<Vec<u8>>>,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts pre-seeded with a blob, as if a previous session had saved it.
    pub fn with_blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Mutex::new(Some(bytes.into())),
            fail_saves: AtomicBool::new(false),
            fail_loads: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent save return a storage error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent load return a storage error.
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Copy of the last saved blob, if any.
    pub fn blob(&self) -> Option<Vec<u8>> {
        self.blob.lock().ok().and_then(|guard| guard.clone())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(BooksError::Storage("simulated load failure".into()));
        }
        let guard = self
            .blob
            .lock()
            .map_err(|_| BooksError::Storage("snapshot mutex poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(BooksError::Storage("simulated save failure".into()));
        }
        let mut guard = self
            .blob
            .lock()
            .map_err(|_| BooksError::Storage("snapshot mutex poisoned".into()))?;
        *guard = Some(bytes.to_vec());
        Ok(())
    }
}
