use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::{action::ActionRequestQueue, state::AppState, ui};

pub(crate) fn show(ui: &mut Ui, app_state: &AppState, action_queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::relative(0.7))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                ui::grid::show(ui, &app_state.board, action_queue);
            });
            strip.cell(|ui| {
                ui::selector::show(ui, app_state, action_queue);
            });
        });
}
