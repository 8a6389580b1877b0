use gridslate_board::{Board, EditMode};
use gridslate_core::Digit;

// AppState holds the board plus its persistence bookkeeping. The board is
// authoritative for the session; `dirty` tracks writes still owed to storage.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) board: Board,
    pub(crate) selection: Selection,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(board: Board) -> Self {
        Self {
            board,
            selection: Selection::default(),
            dirty: false,
        }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Resynchronizes the session onto another board, resetting the
    /// transient selection as a reload would.
    pub(crate) fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.selection = Selection::default();
    }
}

// Transient single-selection input state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) mode: EditMode,
    pub(crate) digit: Option<Digit>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            mode: EditMode::Solve,
            digit: None,
        }
    }
}

impl Selection {
    /// Selects a digit; selecting the already-selected digit deselects it.
    pub(crate) fn select_digit(&mut self, digit: Digit) {
        self.digit = if self.digit == Some(digit) {
            None
        } else {
            Some(digit)
        };
    }
}
