//! In-memory store.

use std::cell::{Cell, RefCell};

use super::SeatStore;
use crate::error::{StoreError, StoreResult};
use crate::snapshot::HallSnapshot;

/// Store that keeps the last snapshot in memory.
///
/// Saves can be made to fail with [`MemoryStore::fail_saves`]; a failed save
/// leaves the stored snapshot untouched, like an atomic file write would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RefCell<Option<HallSnapshot>>,
    fail_saves: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `snapshot`.
    pub fn with_snapshot(snapshot: HallSnapshot) -> Self {
        let store = Self::default();
        store.snapshot.replace(Some(snapshot));
        store
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    pub fn snapshot(&self) -> Option<HallSnapshot> {
        self.snapshot.borrow().clone()
    }
}

impl SeatStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<HallSnapshot>> {
        Ok(self.snapshot())
    }

    fn save(&self, snapshot: &HallSnapshot) -> StoreResult<()> {
        if self.fail_saves.get() {
            return Err(StoreError::Unavailable("injected failure".to_string()));
        }
        self.snapshot.replace(Some(snapshot.clone()));
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SeatRecord;

    #[test]
    fn test_empty_store_loads_none() {
        assert!(MemoryStore::new().load().unwrap().is_none());
    }

    #[test]
    fn test_failed_save_keeps_previous_snapshot() {
        let first = HallSnapshot::new(vec![SeatRecord::new(0, 0, true)]);
        let store = MemoryStore::with_snapshot(first.clone());

        store.fail_saves(true);
        assert!(store.save(&HallSnapshot::default()).is_err());
        assert_eq!(store.snapshot(), Some(first));
        assert_eq!(store.save_count(), 0);
    }
}
