use crate::config::key::{Key, KeyBinding};
use crate::config::keybindings::*;
use crossterm::event::KeyCode;

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: Key::new(KeyCode::Char('q')).into(),
            add_item: Key::new(KeyCode::Char('a')).into(),
        }
    }
}

impl Default for FormKeybindings {
    fn default() -> Self {
        Self {
            next_field: KeyBinding::multiple(vec![Key::new(KeyCode::Tab), Key::new(KeyCode::Down)]),
            prev_field: KeyBinding::multiple(vec![Key::new(KeyCode::BackTab), Key::new(KeyCode::Up)]),
            submit: Key::with_ctrl(KeyCode::Char('s')).into(),
            dismiss: Key::new(KeyCode::Esc).into(),
            activate: Key::new(KeyCode::Enter).into(),
        }
    }
}

impl Default for SelectKeybindings {
    fn default() -> Self {
        Self {
            next_option: KeyBinding::multiple(vec![
                Key::new(KeyCode::Right),
                Key::new(KeyCode::Char(' ')),
            ]),
            prev_option: Key::new(KeyCode::Left).into(),
            clear: KeyBinding::multiple(vec![
                Key::new(KeyCode::Backspace),
                Key::new(KeyCode::Delete),
            ]),
        }
    }
}
