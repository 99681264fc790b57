use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;

use super::{byte_offset, cursor_line, render_field};
use crate::Theme;
use crate::ui::{Component, EventResult, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    Changed(String),
}

/// Single-line text field. The cursor counts chars, not bytes.
pub struct TextInput {
    label: String,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
    focused: bool,
    error: Option<String>,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
            placeholder: None,
            focused: false,
            error: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[cfg(test)]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_error(&mut self, error: Option<&str>) {
        self.error = error.map(str::to_string);
    }

    /// Insert pasted text at the cursor. Line breaks are dropped.
    pub fn paste(&mut self, text: &str) -> TextInputEvent {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
        }
        self.changed()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn changed(&self) -> TextInputEvent {
        TextInputEvent::Changed(self.value.clone())
    }

    fn insert_char(&mut self, c: char) {
        let at = byte_offset(&self.value, self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = byte_offset(&self.value, self.cursor);
        self.value.remove(at);
        true
    }

    fn delete_char_at_cursor(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = byte_offset(&self.value, self.cursor);
        self.value.remove(at);
        true
    }

    const fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    fn delete_word_before_cursor(&mut self) -> bool {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor;
        // Skip trailing spaces
        while pos > 0 && chars[pos - 1] == ' ' {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && chars[pos - 1] != ' ' {
            pos -= 1;
        }
        if pos == self.cursor {
            return false;
        }
        let start = byte_offset(&self.value, pos);
        let end = byte_offset(&self.value, self.cursor);
        self.value.drain(start..end);
        self.cursor = pos;
        true
    }

    fn clear_line(&mut self) -> bool {
        let had_text = !self.value.is_empty();
        self.value.clear();
        self.cursor = 0;
        had_text
    }

    fn edited(&self, changed: bool) -> EventResult<TextInputEvent> {
        if changed {
            self.changed().into()
        } else {
            EventResult::Consumed
        }
    }
}

impl Component for TextInput {
    type Output = TextInputEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        Ok(match (key.code, key.modifiers) {
            // Delete
            (KeyCode::Backspace, KeyModifiers::ALT) => {
                let changed = self.delete_word_before_cursor();
                self.edited(changed)
            }
            (KeyCode::Backspace, _) => {
                let changed = self.delete_char_before_cursor();
                self.edited(changed)
            }
            (KeyCode::Delete, _) => {
                let changed = self.delete_char_at_cursor();
                self.edited(changed)
            }

            // Navigation
            (KeyCode::Left, _) => {
                self.move_cursor_left();
                EventResult::Consumed
            }
            (KeyCode::Right, _) => {
                self.move_cursor_right();
                EventResult::Consumed
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                EventResult::Consumed
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.char_count();
                EventResult::Consumed
            }

            // Clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let changed = self.clear_line();
                self.edited(changed)
            }

            // Character input
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(c);
                self.changed().into()
            }

            // Enter, Esc, Tab and shortcuts belong to the form
            _ => EventResult::Ignored,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = cursor_line(
            &self.value,
            self.cursor,
            self.placeholder.as_deref(),
            self.focused,
            theme,
        );
        render_field(
            frame,
            area,
            theme,
            &self.label,
            line,
            self.focused,
            self.error.as_deref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_typing_reports_changes() {
        let mut input = TextInput::new("Food name");
        let result = input.handle_key(key(KeyCode::Char('P'))).unwrap();
        assert_eq!(result, EventResult::Event(TextInputEvent::Changed("P".to_string())));
        type_str(&mut input, "ad thai");
        assert_eq!(input.value(), "Pad thai");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("ชื่ออาหาร");
        type_str(&mut input, "ข้าวมันไก่");
        input.handle_key(key(KeyCode::Home)).unwrap();
        input.handle_key(key(KeyCode::Delete)).unwrap();
        input.handle_key(key(KeyCode::End)).unwrap();
        input.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(input.value(), "้าวมันไก");
    }

    #[test]
    fn test_word_delete_and_clear() {
        let mut input = TextInput::new("Food name");
        type_str(&mut input, "green curry ");
        input
            .handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::ALT))
            .unwrap();
        assert_eq!(input.value(), "green ");
        input
            .handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_noop_edits_are_consumed_without_event() {
        let mut input = TextInput::new("Food name");
        let result = input.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(result, EventResult::Consumed);
    }

    #[test]
    fn test_form_keys_are_ignored() {
        let mut input = TextInput::new("Food name");
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Tab] {
            assert_eq!(input.handle_key(key(code)).unwrap(), EventResult::Ignored);
        }
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let mut input = TextInput::new("Food name");
        type_str(&mut input, "rice");
        input.handle_key(key(KeyCode::Home)).unwrap();
        let event = input.paste("fried\n ");
        assert_eq!(event, TextInputEvent::Changed("fried rice".to_string()));
    }
}
