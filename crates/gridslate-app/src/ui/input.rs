use eframe::egui::{InputState, Key};
use gridslate_core::Digit;

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn digit(key: Key, digit: Digit) -> Self {
        Self {
            key,
            action: Action::SelectDigit(digit),
        }
    }
}

const SHORTCUTS: [Shortcut; 10] = [
    Shortcut {
        key: Key::Escape,
        action: Action::ClearDigit,
    },
    Shortcut::digit(Key::Num1, Digit::D1),
    Shortcut::digit(Key::Num2, Digit::D2),
    Shortcut::digit(Key::Num3, Digit::D3),
    Shortcut::digit(Key::Num4, Digit::D4),
    Shortcut::digit(Key::Num5, Digit::D5),
    Shortcut::digit(Key::Num6, Digit::D6),
    Shortcut::digit(Key::Num7, Digit::D7),
    Shortcut::digit(Key::Num8, Digit::D8),
    Shortcut::digit(Key::Num9, Digit::D9),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.is_none() {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
