//! Keyboard input collection for one rendered frame.

use std::collections::VecDeque;

use app::settings::UiScaleAction;
use macroquad::prelude::{KeyCode, get_char_pressed, is_key_down, is_key_pressed};
use tileworld::InputSource;

/// Characters typed since the previous frame, drained by the session.
#[derive(Default)]
pub struct KeyboardInput {
    pending: VecDeque<char>,
}

impl KeyboardInput {
    /// Drains macroquad's character queue. Keys typed with Ctrl held belong to
    /// scale shortcuts and never reach the session.
    pub fn capture(&mut self) {
        let ctrl = ctrl_down();
        while let Some(key) = get_char_pressed() {
            if !ctrl && !key.is_control() {
                self.pending.push_back(key);
            }
        }
    }
}

impl InputSource for KeyboardInput {
    fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    fn next_key(&mut self) -> Option<char> {
        self.pending.pop_front()
    }
}

pub fn capture_ui_scale_action() -> Option<UiScaleAction> {
    if !ctrl_down() {
        return None;
    }
    if is_key_pressed(KeyCode::Equal) {
        Some(UiScaleAction::Increase)
    } else if is_key_pressed(KeyCode::Minus) {
        Some(UiScaleAction::Decrease)
    } else if is_key_pressed(KeyCode::Key0) {
        Some(UiScaleAction::Reset)
    } else {
        None
    }
}

fn ctrl_down() -> bool {
    is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl)
}
