//! Persistence seam for the seat board.
//!
//! - [`JsonFileStore`]: the real store, one JSON document on disk
//! - [`MemoryStore`]: in-memory store with failure injection, for tests

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, DATA_FILE_NAME};
pub use memory::MemoryStore;

use crate::error::StoreResult;
use crate::snapshot::HallSnapshot;

/// Durable storage for hall snapshots.
///
/// `load` returns `Ok(None)` when nothing has been saved yet. `save` must
/// replace the previous snapshot entirely; a failed save must leave the
/// previous snapshot readable.
pub trait SeatStore {
    fn load(&self) -> StoreResult<Option<HallSnapshot>>;

    fn save(&self, snapshot: &HallSnapshot) -> StoreResult<()>;

    /// Human readable location, for logs.
    fn describe(&self) -> String;
}

impl<S: SeatStore + ?Sized> SeatStore for Box<S> {
    fn load(&self) -> StoreResult<Option<HallSnapshot>> {
        (**self).load()
    }

    fn save(&self, snapshot: &HallSnapshot) -> StoreResult<()> {
        (**self).save(snapshot)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: SeatStore + ?Sized> SeatStore for &S {
    fn load(&self) -> StoreResult<Option<HallSnapshot>> {
        (**self).load()
    }

    fn save(&self, snapshot: &HallSnapshot) -> StoreResult<()> {
        (**self).save(snapshot)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
