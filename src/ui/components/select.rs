use std::fmt::Display;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::render_field;
use crate::Theme;
use crate::config::{KeyResolver, SelectAction};
use crate::ui::{Component, EventResult, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent<T> {
    Changed(Option<T>),
}

/// Single choice among a fixed set of options, with an unset state.
pub struct Select<T: Copy + Display> {
    label: String,
    options: Vec<T>,
    selected: Option<usize>,
    placeholder: Option<String>,
    focused: bool,
    error: Option<String>,
    resolver: Arc<KeyResolver>,
}

impl<T: Copy + Display> Select<T> {
    pub fn new(label: impl Into<String>, options: Vec<T>, resolver: Arc<KeyResolver>) -> Self {
        Self {
            label: label.into(),
            options,
            selected: None,
            placeholder: None,
            focused: false,
            error: None,
            resolver,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn selected(&self) -> Option<T> {
        self.selected.and_then(|index| self.options.get(index).copied())
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_error(&mut self, error: Option<&str>) {
        self.error = error.map(str::to_string);
    }

    fn select_next(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |index| (index + 1) % len));
    }

    fn select_prev(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(len - 1, |index| (index + len - 1) % len));
    }

    fn changed(&self) -> EventResult<SelectEvent<T>> {
        SelectEvent::Changed(self.selected()).into()
    }
}

impl<T: Copy + Display> Component for Select<T> {
    type Output = SelectEvent<T>;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if self.resolver.matches_select(&key, SelectAction::NextOption) {
            self.select_next();
            return Ok(self.changed());
        }
        if self.resolver.matches_select(&key, SelectAction::PrevOption) {
            self.select_prev();
            return Ok(self.changed());
        }
        if self.resolver.matches_select(&key, SelectAction::Clear) {
            if self.selected.take().is_some() {
                return Ok(self.changed());
            }
            return Ok(EventResult::Consumed);
        }
        Ok(EventResult::Ignored)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let arrow_style = Style::default().fg(if self.focused {
            theme.peach()
        } else {
            theme.overlay0()
        });
        let value = match self.selected() {
            Some(option) => Span::styled(
                option.to_string(),
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                self.placeholder.clone().unwrap_or_default(),
                Style::default().fg(theme.overlay0()),
            ),
        };
        let line = Line::from(vec![
            Span::styled("‹ ", arrow_style),
            value,
            Span::styled(" ›", arrow_style),
        ]);
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
    use crate::menu::Category;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn category_select() -> Select<Category> {
        Select::new("Category", Category::ALL.to_vec(), Arc::new(KeyResolver::default()))
    }

    #[test]
    fn test_starts_unset() {
        assert_eq!(category_select().selected(), None);
    }

    #[test]
    fn test_cycles_forward_and_back() {
        let mut select = category_select();
        let result = select.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(result, EventResult::Event(SelectEvent::Changed(Some(Category::MainCourse))));
        select.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(select.selected(), Some(Category::Drink));
        select.handle_key(key(KeyCode::Right)).unwrap();
        select.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(select.selected(), Some(Category::MainCourse));
        select.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(select.selected(), Some(Category::Dessert));
    }

    #[test]
    fn test_prev_from_unset_picks_last() {
        let mut select = category_select();
        select.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(select.selected(), Some(Category::Dessert));
    }

    #[test]
    fn test_clear_unsets() {
        let mut select = category_select();
        select.handle_key(key(KeyCode::Right)).unwrap();
        let result = select.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(result, EventResult::Event(SelectEvent::Changed(None)));
        assert_eq!(select.handle_key(key(KeyCode::Delete)).unwrap(), EventResult::Consumed);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut select = category_select();
        assert_eq!(select.handle_key(key(KeyCode::Enter)).unwrap(), EventResult::Ignored);
    }
}
