pub(crate) mod board_dialog;
pub(crate) mod game_screen;
pub(crate) mod grid;
pub(crate) mod input;
pub(crate) mod selector;
