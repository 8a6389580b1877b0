// UiState holds ephemeral UI-only state. It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) load_dialog_open: bool,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }
}
