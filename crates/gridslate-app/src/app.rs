//! Gridslate board editor application shell.
//!
//! # Design Notes
//! - A 9x9 grid with clear 3x3 boundaries; a cell click applies the current
//!   mode/digit selection as a toggle.
//! - Keyboard digits select the active digit as an alternate path to the
//!   keypad.
//! - Every board change is written to storage before the frame ends; failed
//!   writes keep the state dirty and are retried.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};
use gridslate_board::persist::{BoardRepository, InMemoryStore, KeyValueStore};

use crate::{
    action::ActionRequestQueue,
    action_handler,
    persistence::storage::{AppStorage, load_initial_board},
    state::{AppState, UiState},
    ui,
};

#[derive(Debug)]
pub struct GridslateApp {
    app_state: AppState,
    ui_state: UiState,
    // Keeps edits alive within the session when the platform has no storage.
    fallback_store: InMemoryStore,
}

impl GridslateApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let board = load_initial_board(cc.storage);
        Self {
            app_state: AppState::new(board),
            ui_state: UiState::new(),
            fallback_store: InMemoryStore::new(),
        }
    }
}

impl App for GridslateApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        let mut store = AppStorage::new(storage);
        let mut repo = BoardRepository::new(&mut store);
        match repo.save_current(&self.app_state.board) {
            Ok(()) => self.app_state.clear_dirty(),
            Err(err) => log::warn!("failed to persist board: {err}"),
        }
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let Self {
            app_state,
            ui_state,
            fallback_store,
        } = self;

        let mut frame_store;
        let store: &mut dyn KeyValueStore = match frame.storage_mut() {
            Some(storage) => {
                frame_store = AppStorage::new(storage);
                &mut frame_store
            }
            None => fallback_store,
        };
        let mut repo = BoardRepository::new(store);

        let mut action_queue = ActionRequestQueue::default();

        // Digit shortcuts stay quiet while the dialog is up or the user is
        // typing into the name field.
        if !ui_state.load_dialog_open && !ctx.wants_keyboard_input() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        }

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, app_state, &mut action_queue);
        });

        if ui_state.load_dialog_open {
            let boards = repo.list_sorted();
            ui::board_dialog::show(ctx, &boards, app_state.board.id(), &mut action_queue);
        }

        action_handler::handle_all(app_state, ui_state, &mut repo, &mut action_queue);

        if app_state.is_dirty() {
            match repo.save_current(&app_state.board) {
                Ok(()) => app_state.clear_dirty(),
                Err(err) => log::warn!("failed to persist board: {err}"),
            }
        }
    }
}
