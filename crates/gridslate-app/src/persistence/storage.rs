use eframe::Storage;
use gridslate_board::{
    Board,
    persist::{CURRENT_BOARD_KEY, KeyValueStore, StoreError, decode_current_slot},
};

/// Adapter exposing eframe's platform storage (a ron file on native,
/// browser local storage on wasm) as a [`KeyValueStore`].
pub(crate) struct AppStorage<'a> {
    inner: &'a mut dyn Storage,
}

impl<'a> AppStorage<'a> {
    pub(crate) fn new(inner: &'a mut dyn Storage) -> Self {
        Self { inner }
    }
}

impl KeyValueStore for AppStorage<'_> {
    fn get(&self, key: &str) -> Option<String> {
        // eframe storage cannot remove keys; empty values stand in for
        // absent ones.
        self.inner.get_string(key).filter(|value| !value.is_empty())
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.set_string(key, value);
        Ok(())
    }

    fn delete(&mut self, key: &str) {
        self.inner.set_string(key, String::new());
    }
}

/// Loads the board to start the session with, before any frame storage is
/// available for writing.
pub(crate) fn load_initial_board(storage: Option<&dyn Storage>) -> Board {
    let json = storage.and_then(|storage| storage.get_string(CURRENT_BOARD_KEY));
    decode_current_slot(json.as_deref().filter(|json| !json.is_empty()))
}
