//! The load/save/list/switch/delete contract over a key-value store.

use std::collections::BTreeMap;

use crate::{
    board::{Board, BoardId},
    persist::{BOARD_CATALOG_KEY, CURRENT_BOARD_KEY, KeyValueStore, StoreError, dto},
};

/// Where [`BoardRepository::switch_active`] should land.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SwitchTarget {
    /// Switch to the saved board with this id; falls back to a fresh board
    /// when the id no longer resolves.
    Existing(BoardId),
    /// Synthesize a fresh empty board and make it current.
    New,
}

/// Error reported when persisting boards fails.
///
/// The in-memory board is never rolled back on failure; it stays
/// authoritative and dirty so the write is retried later.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PersistError {
    /// The backing store rejected a write.
    #[display("{_0}")]
    Store(StoreError),
    /// A board could not be serialized.
    #[display("board serialization failed: {_0}")]
    Encode(serde_json::Error),
}

/// Decodes the current-board slot, synthesizing a fresh board when the slot
/// is absent or corrupt and backfilling `boardId`/`name` on legacy boards.
///
/// This never fails: corrupt state is logged at `warn` and replaced.
#[must_use]
pub fn decode_current_slot(json: Option<&str>) -> Board {
    match json {
        None => Board::empty(),
        Some(json) => dto::board_from_json(json).unwrap_or_else(|err| {
            log::warn!("replacing corrupt current board: {err}");
            Board::empty()
        }),
    }
}

/// Named-board persistence over an injectable [`KeyValueStore`].
///
/// All operations work directly against the store; the repository itself
/// holds no state beyond the borrowed store handle.
///
/// # Examples
///
/// ```
/// use gridslate_board::Board;
/// use gridslate_board::persist::{BoardRepository, InMemoryStore};
///
/// let mut store = InMemoryStore::new();
/// let mut repo = BoardRepository::new(&mut store);
///
/// let board = repo.load_current();
/// repo.save_current(&board).unwrap();
/// assert_eq!(repo.list_sorted().len(), 1);
/// ```
pub struct BoardRepository<'a> {
    store: &'a mut dyn KeyValueStore,
}

impl std::fmt::Debug for BoardRepository<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardRepository").finish_non_exhaustive()
    }
}

impl<'a> BoardRepository<'a> {
    /// Creates a repository over the given store.
    pub fn new(store: &'a mut dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Loads the current board, synthesizing a fresh one when the slot is
    /// absent or corrupt.
    #[must_use]
    pub fn load_current(&self) -> Board {
        decode_current_slot(self.store.get(CURRENT_BOARD_KEY).as_deref())
    }

    /// Writes `board` to the current slot and upserts it into the saved
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when either write fails; the operation is
    /// then considered failed as a whole.
    pub fn save_current(&mut self, board: &Board) -> Result<(), PersistError> {
        self.store
            .put(CURRENT_BOARD_KEY, dto::board_to_json(board)?)?;

        let mut catalog = self.catalog();
        catalog.insert(board.id().clone(), board.clone());
        self.write_catalog(&catalog)
    }

    /// Returns all saved boards, sorted by name.
    ///
    /// Sorting is ascending and case-insensitive (Unicode lowercase
    /// folding), with exact name and id as tie breakers so the order is
    /// total.
    #[must_use]
    pub fn list_sorted(&self) -> Vec<Board> {
        let mut boards: Vec<Board> = self.catalog().into_values().collect();
        boards.sort_by_key(|board| {
            (
                board.name().to_lowercase(),
                board.name().to_owned(),
                board.id().clone(),
            )
        });
        boards
    }

    /// Upserts `current` into the saved collection, then makes `target` the
    /// current board.
    ///
    /// An unresolvable [`SwitchTarget::Existing`] id degrades to a fresh
    /// empty board, like [`SwitchTarget::New`]. Returns the new current
    /// board; the caller replaces its in-memory state with it.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when a write fails. The previously current
    /// board may already have been upserted at that point; the caller's
    /// in-memory state is unaffected either way.
    pub fn switch_active(
        &mut self,
        current: &Board,
        target: SwitchTarget,
    ) -> Result<Board, PersistError> {
        let mut catalog = self.catalog();
        catalog.insert(current.id().clone(), current.clone());

        let next = match target {
            SwitchTarget::Existing(id) => catalog.get(&id).cloned(),
            SwitchTarget::New => None,
        }
        .unwrap_or_else(Board::empty);

        self.store
            .put(CURRENT_BOARD_KEY, dto::board_to_json(&next)?)?;
        self.write_catalog(&catalog)?;
        Ok(next)
    }

    /// Removes a board from the saved collection and picks the next current
    /// board: the first remaining board in sorted order, or a freshly
    /// synthesized one when the collection is left empty.
    ///
    /// Returns the new current board; the caller replaces its in-memory
    /// state with it.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when a write fails.
    pub fn delete_board(&mut self, id: &BoardId) -> Result<Board, PersistError> {
        let mut catalog = self.catalog();
        catalog.remove(id);
        self.write_catalog(&catalog)?;

        match self.list_sorted().into_iter().next() {
            Some(next) => {
                self.store
                    .put(CURRENT_BOARD_KEY, dto::board_to_json(&next)?)?;
                Ok(next)
            }
            None => {
                let fresh = Board::empty();
                self.save_current(&fresh)?;
                Ok(fresh)
            }
        }
    }

    fn catalog(&self) -> BTreeMap<BoardId, Board> {
        match self.store.get(BOARD_CATALOG_KEY) {
            None => BTreeMap::new(),
            Some(json) => dto::catalog_from_json(&json).unwrap_or_else(|err| {
                log::warn!("replacing corrupt board collection: {err}");
                BTreeMap::new()
            }),
        }
    }

    fn write_catalog(&mut self, catalog: &BTreeMap<BoardId, Board>) -> Result<(), PersistError> {
        self.store
            .put(BOARD_CATALOG_KEY, dto::catalog_to_json(catalog)?)?;
        Ok(())
    }
}
