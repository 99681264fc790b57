use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;

use super::{byte_offset, cursor_line, render_field};
use crate::Theme;
use crate::menu::NumberValue;
use crate::ui::{Component, EventResult, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInputEvent {
    Changed(NumberValue),
}

/// Numeric field that reports its text as a [`NumberValue`].
///
/// `min` is shown next to the label; the field does not clamp.
pub struct NumberInput {
    label: String,
    text: String,
    cursor: usize,
    placeholder: Option<String>,
    min: Option<f64>,
    integer: bool,
    focused: bool,
    error: Option<String>,
}

impl NumberInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: String::new(),
            cursor: 0,
            placeholder: None,
            min: None,
            integer: false,
            focused: false,
            error: None,
        }
    }

    pub fn with_value(mut self, value: NumberValue) -> Self {
        self.text = match value {
            NumberValue::Number(number) => format_number(number),
            NumberValue::Empty | NumberValue::Invalid => String::new(),
        };
        self.cursor = self.text.chars().count();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Reject the decimal point while typing.
    pub const fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> NumberValue {
        NumberValue::parse(&self.text)
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_error(&mut self, error: Option<&str>) {
        self.error = error.map(str::to_string);
    }

    /// Replace the contents with pasted text.
    ///
    /// In integer mode a pasted number is shown truncated; the reported value
    /// is the number as pasted.
    pub fn paste(&mut self, text: &str) -> NumberInputEvent {
        let value = NumberValue::parse(text);
        self.text = match value {
            NumberValue::Number(number) if self.integer => format_number(number.trunc()),
            _ => text.trim().to_string(),
        };
        self.cursor = self.text.chars().count();
        NumberInputEvent::Changed(value)
    }

    fn accepts(&self, c: char) -> bool {
        match c {
            '0'..='9' => true,
            '-' => self.cursor == 0 && !self.text.starts_with('-'),
            '.' => !self.integer && !self.text.contains('.'),
            _ => false,
        }
    }

    fn changed(&self) -> EventResult<NumberInputEvent> {
        NumberInputEvent::Changed(self.value()).into()
    }

    fn title(&self) -> String {
        match self.min {
            Some(min) => format!("{} (min {})", self.label, format_number(min)),
            None => self.label.clone(),
        }
    }
}

impl Component for NumberInput {
    type Output = NumberInputEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        let len = self.text.chars().count();
        Ok(match (key.code, key.modifiers) {
            (KeyCode::Backspace, _) if self.cursor > 0 => {
                self.cursor -= 1;
                self.text.remove(byte_offset(&self.text, self.cursor));
                self.changed()
            }
            (KeyCode::Delete, _) if self.cursor < len => {
                self.text.remove(byte_offset(&self.text, self.cursor));
                self.changed()
            }
            (KeyCode::Backspace | KeyCode::Delete, _) => EventResult::Consumed,
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                EventResult::Consumed
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(len);
                EventResult::Consumed
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                EventResult::Consumed
            }
            (KeyCode::End, _) => {
                self.cursor = len;
                EventResult::Consumed
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.text.clear();
                self.cursor = 0;
                self.changed()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if self.accepts(c) {
                    self.text.insert(byte_offset(&self.text, self.cursor), c);
                    self.cursor += 1;
                    self.changed()
                } else {
                    EventResult::Consumed
                }
            }
            _ => EventResult::Ignored,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = cursor_line(
            &self.text,
            self.cursor,
            self.placeholder.as_deref(),
            self.focused,
            theme,
        );
        render_field(
            frame,
            area,
            theme,
            &self.title(),
            line,
            self.focused,
            self.error.as_deref(),
        );
    }
}

/// Format without a trailing `.0` for whole numbers.
fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{number:.0}")
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut NumberInput, text: &str) -> Option<NumberInputEvent> {
        let mut last = None;
        for c in text.chars() {
            if let EventResult::Event(event) = input.handle_key(key(KeyCode::Char(c))).unwrap() {
                last = Some(event);
            }
        }
        last
    }

    #[test]
    fn test_initial_value_is_rendered_as_text() {
        let input = NumberInput::new("Price").with_value(NumberValue::Number(0.0));
        assert_eq!(input.text(), "0");
        assert_eq!(input.value(), NumberValue::Number(0.0));
    }

    #[test]
    fn test_clearing_reports_empty_not_zero() {
        let mut input = NumberInput::new("Price").with_value(NumberValue::Number(0.0));
        let result = input.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(result, EventResult::Event(NumberInputEvent::Changed(NumberValue::Empty)));
    }

    #[test]
    fn test_typing_decimal_price() {
        let mut input = NumberInput::new("Price");
        let last = type_str(&mut input, "12.50");
        assert_eq!(last, Some(NumberInputEvent::Changed(NumberValue::Number(12.5))));
    }

    #[test]
    fn test_partial_input_is_invalid() {
        let mut input = NumberInput::new("Price");
        let last = type_str(&mut input, "-");
        assert_eq!(last, Some(NumberInputEvent::Changed(NumberValue::Invalid)));
    }

    #[test]
    fn test_rejected_characters() {
        let mut input = NumberInput::new("Quantity").integer();
        type_str(&mut input, "2.a7-");
        assert_eq!(input.text(), "27");
        let mut price = NumberInput::new("Price");
        type_str(&mut price, "1.2.3");
        assert_eq!(price.text(), "1.23");
    }

    #[test]
    fn test_integer_paste_shows_truncated_value() {
        let mut input = NumberInput::new("Quantity").integer();
        let event = input.paste(" 2.7 ");
        assert_eq!(event, NumberInputEvent::Changed(NumberValue::Number(2.7)));
        assert_eq!(input.text(), "2");
    }

    #[test]
    fn test_title_shows_minimum() {
        let input = NumberInput::new("Quantity").with_min(1.0);
        assert_eq!(input.title(), "Quantity (min 1)");
    }
}
