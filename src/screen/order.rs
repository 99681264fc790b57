//! Order screen: the trigger action, the list of added items, and the
//! add-food dialog hosted on top.

use std::sync::Arc;

use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use tracing::debug;

use super::add_food::AddFoodDialog;
use crate::Theme;
use crate::config::{FormAction, GlobalAction, KeyResolver};
use crate::menu::{Messages, ModalEvent, ModalHost, SubmittedItem, Visibility};
use crate::ui::{EventResult, Keybinding, Modal, Result, Screen};

/// Who owns the dialog's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostingMode {
    /// The screen keeps the flag and pushes it into the dialog.
    Controlled,
    /// The dialog keeps its own flag.
    Uncontrolled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    Added(SubmittedItem),
    Discarded,
}

pub struct OrderLine {
    pub item: SubmittedItem,
    pub added_at: DateTime<Local>,
}

/// Items added so far plus the host-side visibility flag.
#[derive(Default)]
struct OrderBook {
    lines: Vec<OrderLine>,
    opened: bool,
}

impl OrderBook {
    fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.item.total()).sum()
    }
}

impl ModalHost for OrderBook {
    fn on_add(&mut self, item: SubmittedItem) {
        self.lines.push(OrderLine {
            item,
            added_at: Local::now(),
        });
    }

    fn on_close(&mut self) {
        self.opened = false;
    }
}

pub struct OrderScreen {
    book: OrderBook,
    dialog: AddFoodDialog,
    resolver: Arc<KeyResolver>,
}

impl OrderScreen {
    pub fn new(mode: HostingMode, messages: Messages, resolver: Arc<KeyResolver>) -> Self {
        let visibility = Visibility::from_flag(match mode {
            HostingMode::Controlled => Some(false),
            HostingMode::Uncontrolled => None,
        });
        Self {
            book: OrderBook::default(),
            dialog: AddFoodDialog::new(visibility, messages, Arc::clone(&resolver)),
            resolver,
        }
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[OrderLine] {
        &self.book.lines
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.dialog.handle_paste(text);
    }

    fn trigger(&mut self) {
        let opened_itself = self.dialog.open();
        if self.dialog.is_controlled() {
            self.book.opened = true;
            self.dialog.sync_opened(true);
        }
        debug!(opened_itself, "Add food trigger activated");
    }

    fn apply(&mut self, events: Vec<ModalEvent>) -> Option<OrderEvent> {
        let added = events.iter().find_map(|event| match event {
            ModalEvent::Added(item) => Some(item.clone()),
            ModalEvent::Closed => None,
        });
        let closed = events.contains(&ModalEvent::Closed);
        for event in events {
            event.deliver(&mut self.book);
        }
        if self.dialog.is_controlled() {
            self.dialog.sync_opened(self.book.opened);
        }
        match added {
            Some(item) => Some(OrderEvent::Added(item)),
            None if closed => Some(OrderEvent::Discarded),
            None => None,
        }
    }

    fn render_trigger(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key = self.resolver.display_global(GlobalAction::AddItem);
        let line = Line::from(vec![
            Span::styled(
                format!(" [{key}] {} ", self.dialog.messages().trigger),
                Style::default()
                    .fg(theme.base())
                    .bg(theme.primary())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} items", self.book.lines.len()),
                Style::default().fg(theme.subtext0()),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border()))
            .title(" Order ")
            .title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(Line::from(format!(" Total {:.2} ", self.book.total())).right_aligned());

        if self.book.lines.is_empty() {
            let empty = Paragraph::new("No items yet")
                .style(Style::default().fg(theme.overlay0()))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(
            ["Time", "Name", "Category", "Qty", "Price", "Total"].map(|title| {
                Cell::from(title).style(
                    Style::default()
                        .fg(theme.header())
                        .add_modifier(Modifier::BOLD),
                )
            }),
        )
        .style(Style::default().bg(theme.surface0()));

        let rows = self.book.lines.iter().map(|line| {
            Row::new(vec![
                Cell::from(line.added_at.format("%H:%M:%S").to_string()),
                Cell::from(line.item.name.clone()),
                Cell::from(line.item.category.label()),
                Cell::from(line.item.quantity.to_string()),
                Cell::from(format!("{:.2}", line.item.price)),
                Cell::from(format!("{:.2}", line.item.total())),
            ])
            .style(Style::default().fg(theme.text()))
        });

        let widths = [
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(10),
        ];
        frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
    }
}

impl Screen for OrderScreen {
    type Output = OrderEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if self.dialog.is_open() {
            return Ok(match self.dialog.handle_key(key)? {
                EventResult::Event(events) => self
                    .apply(events)
                    .map_or(EventResult::Consumed, EventResult::Event),
                EventResult::Consumed => EventResult::Consumed,
                EventResult::Ignored => EventResult::Ignored,
            });
        }

        if self.resolver.matches_global(&key, GlobalAction::AddItem) {
            self.trigger();
            return Ok(EventResult::Consumed);
        }
        Ok(EventResult::Ignored)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [trigger, table] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);
        self.render_trigger(frame, trigger, theme);
        self.render_table(frame, table, theme);
        self.dialog.render(frame, area, theme);
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        if self.dialog.is_open() {
            vec![
                Keybinding::new(self.resolver.display_form(FormAction::NextField), "Next field"),
                Keybinding::new(self.resolver.display_form(FormAction::PrevField), "Previous field"),
                Keybinding::new(self.resolver.display_form(FormAction::Submit), "Save"),
                Keybinding::new(self.resolver.display_form(FormAction::Dismiss), "Close"),
            ]
        } else {
            vec![Keybinding::new(
                self.resolver.display_global(GlobalAction::AddItem),
                self.dialog.messages().trigger,
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(mode: HostingMode) -> OrderScreen {
        OrderScreen::new(mode, Messages::english(), Arc::new(KeyResolver::default()))
    }

    fn add_item(screen: &mut OrderScreen, name: &str) -> Option<OrderEvent> {
        screen.handle_key(key(KeyCode::Char('a'))).unwrap();
        for c in name.chars() {
            screen.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        screen.handle_key(key(KeyCode::Tab)).unwrap();
        screen.handle_paste("45");
        screen.handle_key(key(KeyCode::Tab)).unwrap();
        screen.handle_paste("3");
        screen.handle_key(key(KeyCode::Tab)).unwrap();
        screen.handle_key(key(KeyCode::Right)).unwrap();
        screen
            .handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap()
            .into_event()
    }

    #[test]
    fn test_trigger_opens_uncontrolled_dialog() {
        let mut screen = screen(HostingMode::Uncontrolled);
        assert!(!screen.dialog_open());
        let result = screen.handle_key(key(KeyCode::Char('a'))).unwrap();
        assert_eq!(result, EventResult::Consumed);
        assert!(screen.dialog_open());
    }

    #[test]
    fn test_unbound_keys_pass_through_when_closed() {
        let mut screen = screen(HostingMode::Uncontrolled);
        let result = screen.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(result, EventResult::Ignored);
    }

    #[test]
    fn test_saved_item_lands_in_order() {
        for mode in [HostingMode::Uncontrolled, HostingMode::Controlled] {
            let mut screen = screen(mode);
            let event = add_item(&mut screen, "Pad Thai");

            assert!(matches!(event, Some(OrderEvent::Added(ref item)) if item.name == "Pad Thai"));
            assert_eq!(screen.lines().len(), 1);
            assert_eq!(screen.lines()[0].item.quantity, 3);
            assert!(!screen.dialog_open(), "{mode:?} dialog should close");
        }
    }

    #[test]
    fn test_controlled_close_goes_through_host() {
        let mut screen = screen(HostingMode::Controlled);
        screen.handle_key(key(KeyCode::Char('a'))).unwrap();
        assert!(screen.book.opened);
        assert!(screen.dialog_open());

        let result = screen.handle_key(key(KeyCode::Esc)).unwrap();

        assert_eq!(result, EventResult::Event(OrderEvent::Discarded));
        assert!(!screen.book.opened);
        assert!(!screen.dialog_open());
        assert!(screen.lines().is_empty());
    }

    #[test]
    fn test_quit_key_is_typed_into_open_dialog() {
        let mut screen = screen(HostingMode::Uncontrolled);
        screen.handle_key(key(KeyCode::Char('a'))).unwrap();
        let result = screen.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(result, EventResult::Consumed);
        assert_eq!(screen.dialog.controller().form().name, "q");
    }

    #[test]
    fn test_order_total() {
        let mut screen = screen(HostingMode::Uncontrolled);
        add_item(&mut screen, "Pad Thai");
        add_item(&mut screen, "Tom Yum");
        assert!((screen.book.total() - 270.0).abs() < f64::EPSILON);
    }
}
