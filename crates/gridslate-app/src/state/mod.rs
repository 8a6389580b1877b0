mod app_state;
mod ui_state;

pub(crate) use self::{
    app_state::{AppState, Selection},
    ui_state::UiState,
};
