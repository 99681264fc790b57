//! The add-food dialog: field widgets and focus around [`AddFoodController`].

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Theme;
use crate::config::{FormAction, KeyResolver};
use crate::menu::{
    AddFoodController, Category, Field, FormState, Messages, ModalEvent, ModalState,
    SubmitOutcome, Visibility,
};
use crate::ui::components::FIELD_HEIGHT;
use crate::ui::{
    Component, EventResult, Modal, NumberInput, NumberInputEvent, Result, Select, SelectEvent,
    TextInput, TextInputEvent,
};

const DIALOG_WIDTH: u16 = 60;
// Borders, four fields, a spacer and the action row.
const DIALOG_HEIGHT: u16 = 2 + 4 * FIELD_HEIGHT + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Price,
    Quantity,
    Category,
    Cancel,
    Save,
}

impl Focus {
    const ORDER: [Self; 6] = [
        Self::Name,
        Self::Price,
        Self::Quantity,
        Self::Category,
        Self::Cancel,
        Self::Save,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

struct Inputs {
    name: TextInput,
    price: NumberInput,
    quantity: NumberInput,
    category: Select<Category>,
}

impl Inputs {
    fn new(form: &FormState, messages: &Messages, resolver: &Arc<KeyResolver>) -> Self {
        Self {
            name: TextInput::new(messages.name_label).with_placeholder(messages.name_placeholder),
            price: NumberInput::new(messages.price_label)
                .with_placeholder(messages.price_placeholder)
                .with_min(0.0)
                .with_value(form.price),
            quantity: NumberInput::new(messages.quantity_label)
                .with_placeholder(messages.quantity_placeholder)
                .with_min(1.0)
                .integer()
                .with_value(form.quantity),
            category: Select::new(
                messages.category_label,
                Category::ALL.to_vec(),
                Arc::clone(resolver),
            )
            .with_placeholder(messages.category_placeholder),
        }
    }
}

/// Modal dialog for entering a new food item.
///
/// Reports [`ModalEvent`]s to its parent; a successful save yields
/// `Added` followed by `Closed`.
pub struct AddFoodDialog {
    controller: AddFoodController,
    messages: Messages,
    resolver: Arc<KeyResolver>,
    inputs: Inputs,
    focus: Focus,
}

impl AddFoodDialog {
    pub fn new(visibility: Visibility, messages: Messages, resolver: Arc<KeyResolver>) -> Self {
        let controller = AddFoodController::new(visibility);
        let inputs = Inputs::new(controller.form(), &messages, &resolver);
        Self {
            controller,
            messages,
            resolver,
            inputs,
            focus: Focus::Name,
        }
    }

    #[cfg(test)]
    pub const fn controller(&self) -> &AddFoodController {
        &self.controller
    }

    pub fn state(&self) -> ModalState {
        self.controller.state()
    }

    pub const fn is_controlled(&self) -> bool {
        self.controller.visibility().is_controlled()
    }

    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Trigger action. Returns whether the dialog opened itself.
    pub fn open(&mut self) -> bool {
        self.controller.open()
    }

    /// Apply the host's visibility flag (controlled mode).
    pub fn sync_opened(&mut self, opened: bool) {
        self.controller.sync_opened(opened);
    }

    /// Route pasted text to the focused input.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.controller.is_open() {
            return;
        }
        match self.focus {
            Focus::Name => {
                let TextInputEvent::Changed(name) = self.inputs.name.paste(text);
                self.controller.set_name(name);
            }
            Focus::Price => {
                let NumberInputEvent::Changed(price) = self.inputs.price.paste(text);
                self.controller.set_price(price);
            }
            Focus::Quantity => {
                let NumberInputEvent::Changed(quantity) = self.inputs.quantity.paste(text);
                self.controller.set_quantity(quantity);
            }
            Focus::Category | Focus::Cancel | Focus::Save => {}
        }
    }

    fn submit(&mut self, events: &mut Vec<ModalEvent>) {
        if self.controller.submit(events) == SubmitOutcome::Rejected {
            self.focus_first_error();
        }
    }

    fn focus_first_error(&mut self) {
        let first = self.controller.errors().iter().next().map(|(field, _)| field);
        if let Some(field) = first {
            self.focus = match field {
                Field::Name => Focus::Name,
                Field::Price => Focus::Price,
                Field::Quantity => Focus::Quantity,
                Field::Category => Focus::Category,
            };
        }
    }

    fn activate(&mut self, events: &mut Vec<ModalEvent>) {
        match self.focus {
            Focus::Save => self.submit(events),
            Focus::Cancel => self.controller.cancel(events),
            _ => self.focus = self.focus.next(),
        }
    }

    fn delegate_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.focus {
            Focus::Name => {
                if let Some(TextInputEvent::Changed(name)) =
                    self.inputs.name.handle_key(key)?.into_event()
                {
                    self.controller.set_name(name);
                }
            }
            Focus::Price => {
                if let Some(NumberInputEvent::Changed(price)) =
                    self.inputs.price.handle_key(key)?.into_event()
                {
                    self.controller.set_price(price);
                }
            }
            Focus::Quantity => {
                if let Some(NumberInputEvent::Changed(quantity)) =
                    self.inputs.quantity.handle_key(key)?.into_event()
                {
                    self.controller.set_quantity(quantity);
                }
            }
            Focus::Category => {
                if let Some(SelectEvent::Changed(category)) =
                    self.inputs.category.handle_key(key)?.into_event()
                {
                    self.controller.set_category(category);
                }
            }
            Focus::Cancel | Focus::Save => {}
        }
        Ok(())
    }

    fn after_close(&mut self) {
        self.inputs = Inputs::new(self.controller.form(), &self.messages, &self.resolver);
        self.focus = Focus::Name;
    }

    fn sync_inputs(&mut self) {
        let errors = self.controller.errors();
        let messages = &self.messages;
        self.inputs.name.set_error(errors.message(Field::Name, messages));
        self.inputs.price.set_error(errors.message(Field::Price, messages));
        self.inputs.quantity.set_error(errors.message(Field::Quantity, messages));
        self.inputs.category.set_error(errors.message(Field::Category, messages));

        self.inputs.name.set_focused(self.focus == Focus::Name);
        self.inputs.price.set_focused(self.focus == Focus::Price);
        self.inputs.quantity.set_focused(self.focus == Focus::Quantity);
        self.inputs.category.set_focused(self.focus == Focus::Category);
    }

    fn button<'a>(
        &self,
        label: &'a str,
        focus: Focus,
        accent: Color,
        theme: &Theme,
    ) -> Span<'a> {
        let style = if self.focus == focus {
            Style::default()
                .fg(theme.base())
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };
        Span::styled(format!("[ {label} ]"), style)
    }

    fn hint_line(&self, theme: &Theme) -> Line<'static> {
        let key_style = Style::default().fg(theme.peach());
        let text_style = Style::default().fg(theme.overlay1());
        let hints = [
            (self.resolver.display_form(FormAction::NextField), "next"),
            (self.resolver.display_form(FormAction::Submit), "save"),
            (self.resolver.display_form(FormAction::Dismiss), "close"),
        ];
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {label}  "), text_style));
        }
        Line::from(spans)
    }
}

impl Modal for AddFoodDialog {
    type Output = Vec<ModalEvent>;

    fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if !self.controller.is_open() {
            return Ok(EventResult::Ignored);
        }

        let mut events = Vec::new();
        if self.resolver.matches_form(&key, FormAction::Submit) {
            self.submit(&mut events);
        } else if self.resolver.matches_form(&key, FormAction::Dismiss) {
            self.controller.dismiss(&mut events);
        } else if self.resolver.matches_form(&key, FormAction::NextField) {
            self.focus = self.focus.next();
        } else if self.resolver.matches_form(&key, FormAction::PrevField) {
            self.focus = self.focus.prev();
        } else if self.resolver.matches_form(&key, FormAction::Activate) {
            self.activate(&mut events);
        } else {
            self.delegate_key(key)?;
        }

        if events.contains(&ModalEvent::Closed) {
            self.after_close();
        }
        if events.is_empty() {
            Ok(EventResult::Consumed)
        } else {
            Ok(events.into())
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.controller.is_open() {
            return;
        }
        self.sync_inputs();

        let popup_area = area.centered(
            Constraint::Length(DIALOG_WIDTH.min(area.width)),
            Constraint::Length(DIALOG_HEIGHT.min(area.height)),
        );
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", self.messages.title))
            .title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(self.hint_line(theme))
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(match self.state() {
                ModalState::OpenWithErrors => theme.warning(),
                _ => theme.border_focused(),
            }))
            .style(Style::default().bg(theme.base()));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [name, price, quantity, category, _, actions] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.inputs.name.render(frame, name, theme);
        self.inputs.price.render(frame, price, theme);
        self.inputs.quantity.render(frame, quantity, theme);
        self.inputs.category.render(frame, category, theme);

        let buttons = Line::from(vec![
            self.button(self.messages.cancel, Focus::Cancel, theme.overlay2(), theme),
            Span::raw("   "),
            self.button(self.messages.save, Focus::Save, theme.success(), theme),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Right), actions);
    }
}
