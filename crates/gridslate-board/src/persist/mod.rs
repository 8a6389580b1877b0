//! Persistence of named boards through an injectable key-value store.
//!
//! The persisted layout is two flat JSON-valued keys, readable across
//! editor versions:
//!
//! - [`CURRENT_BOARD_KEY`] holds the single board the session is editing.
//! - [`BOARD_CATALOG_KEY`] holds the collection of all saved boards, a JSON
//!   object keyed by board id.
//!
//! [`KeyValueStore`] abstracts the store itself so the repository logic is
//! testable against [`InMemoryStore`] and the application can plug in its
//! platform storage (a ron file on native, browser local storage on wasm).
//! [`BoardRepository`] implements the load/save/list/switch/delete contract
//! on top.
//!
//! Missing or corrupt persisted state is never an error: it decodes to a
//! freshly synthesized board (logged at `warn`). Write failures surface as
//! [`PersistError`] and leave the in-memory state untouched and
//! authoritative; callers retry on a later save.

mod dto;
mod memory;
mod repository;

pub use self::{
    memory::InMemoryStore,
    repository::{BoardRepository, PersistError, SwitchTarget, decode_current_slot},
};

/// Storage key of the current-board slot.
pub const CURRENT_BOARD_KEY: &str = "boardModel";

/// Storage key of the saved-board collection.
pub const BOARD_CATALOG_KEY: &str = "allBoards";

/// A flat string-keyed, string-valued store, mirroring browser local
/// storage and `eframe::Storage`.
///
/// Reads are infallible (`None` covers both "absent" and "unreadable");
/// writes may fail (storage unavailable, quota exceeded) and report
/// [`StoreError`].
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store rejects the write.
    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes the value stored under `key`, if any.
    fn delete(&mut self, key: &str);
}

/// Error reported by a [`KeyValueStore`] write.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("storage write failed: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates a store error with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
