//! A map-backed store for tests and storage-less platforms.

use std::collections::BTreeMap;

use crate::persist::{KeyValueStore, StoreError};

/// An in-memory [`KeyValueStore`].
///
/// Used as the test double for the board repository and as the runtime
/// fallback when the platform offers no persistent storage. Write failures
/// can be injected to exercise the error path.
///
/// # Examples
///
/// ```
/// use gridslate_board::persist::{InMemoryStore, KeyValueStore};
///
/// let mut store = InMemoryStore::new();
/// store.put("key", "value".to_owned()).unwrap();
/// assert_eq!(store.get("key").as_deref(), Some("value"));
///
/// store.fail_writes(true);
/// assert!(store.put("key", "other".to_owned()).is_err());
/// assert_eq!(store.get("key").as_deref(), Some("value"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: BTreeMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent [`put`](KeyValueStore::put) fail until turned
    /// off again.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::new("injected write failure"));
        }
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
