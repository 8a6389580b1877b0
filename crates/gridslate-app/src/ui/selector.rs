use std::sync::Arc;

use eframe::egui::{Align2, Button, FontId, Grid, RichText, Ui, Vec2, vec2};
use gridslate_board::EditMode;
use gridslate_core::Digit;

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub(crate) fn show(ui: &mut Ui, app_state: &AppState, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        show_mode_selector(ui, app_state.selection.mode, action_queue);
        ui.add_space(8.0);
        show_keypad(ui, app_state, action_queue);
        ui.add_space(8.0);
        show_board_controls(ui, app_state, action_queue);
    });
}

fn show_mode_selector(ui: &mut Ui, current: EditMode, action_queue: &mut ActionRequestQueue) {
    ui.group(|ui| {
        ui.label(RichText::new("Mode").size(16.0));
        let modes = [
            (EditMode::Init, "Init", "Author givens; toggled cells lock"),
            (EditMode::Solve, "Solve", "Enter tentative values"),
            (EditMode::Mark, "Mark", "Annotate candidate digits"),
        ];
        for (mode, label, hover) in modes {
            let response = ui.radio(current == mode, label).on_hover_text(hover);
            if response.clicked() {
                action_queue.request(Action::SelectMode(mode));
            }
        }
    });
}

fn show_keypad(ui: &mut Ui, app_state: &AppState, action_queue: &mut ActionRequestQueue) {
    #[allow(clippy::enum_glob_use)]
    use Digit::*;
    enum ButtonType {
        Digit(Digit),
        ClearSelection,
    }
    fn d(d: Digit) -> ButtonType {
        ButtonType::Digit(d)
    }
    fn x() -> ButtonType {
        ButtonType::ClearSelection
    }

    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let digit_count_color = visuals.text_color();
    let selected_bg_color = visuals.selection.bg_fill;

    let layout = [
        [d(D1), d(D2), d(D3), d(D4), d(D5)],
        [d(D6), d(D7), d(D8), d(D9), x()],
    ];

    let x_padding = 5.0;
    let y_padding = 5.0;
    let avail = ui.available_size();
    let button_size = f32::min((avail.x - 4.0 * x_padding) / 5.0, 48.0);

    Grid::new(ui.id().with("digit_keypad"))
        .spacing((x_padding, y_padding))
        .show(ui, |ui| {
            for row in &layout {
                for button_type in row {
                    match button_type {
                        ButtonType::Digit(digit) => {
                            let text = RichText::new(digit.as_str()).size(button_size * 0.8);
                            let mut button = Button::new(text).min_size(Vec2::splat(button_size));
                            if app_state.selection.digit == Some(*digit) {
                                button = button.fill(selected_bg_color);
                            }
                            let button = ui.add(button).on_hover_text("Select digit");
                            if button.clicked() {
                                action_queue.request(Action::SelectDigit(*digit));
                            }
                            ui.painter().text(
                                button.rect.right_top() + vec2(-4.0, 2.0),
                                Align2::RIGHT_TOP,
                                app_state.board.digit_count(*digit).to_string(),
                                FontId::proportional(button_size * 0.25),
                                digit_count_color,
                            );
                        }
                        ButtonType::ClearSelection => {
                            let text = RichText::new("X").size(button_size * 0.8);
                            let button = Button::new(text).min_size(Vec2::splat(button_size));
                            let button = ui.add(button).on_hover_text("Clear digit selection");
                            if button.clicked() {
                                action_queue.request(Action::ClearDigit);
                            }
                        }
                    }
                }
                ui.end_row();
            }
        });
}

fn show_board_controls(ui: &mut Ui, app_state: &AppState, action_queue: &mut ActionRequestQueue) {
    ui.group(|ui| {
        ui.label(RichText::new("Board").size(16.0));
        let mut name = app_state.board.name().to_owned();
        if ui.text_edit_singleline(&mut name).changed() {
            action_queue.request(Action::RenameBoard(name));
        }
        if ui.button("Load another board").clicked() {
            action_queue.request(Action::OpenLoadDialog);
        }
    });
}
