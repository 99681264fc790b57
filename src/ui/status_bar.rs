use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::Theme;
use crate::config::{GlobalAction, KeyResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// One-line key hint bar at the bottom of the screen.
pub struct StatusBar {
    resolver: Arc<KeyResolver>,
}

impl StatusBar {
    pub const fn new(resolver: Arc<KeyResolver>) -> Self {
        Self { resolver }
    }

    pub fn render_with_keybindings(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        local_keybindings: &[Keybinding],
    ) {
        let quit = Keybinding::new(self.resolver.display_global(GlobalAction::Quit), "Quit");
        let mut spans = vec![Span::styled(
            " lazymenu ",
            Style::default()
                .fg(theme.base())
                .bg(theme.mauve())
                .add_modifier(Modifier::BOLD),
        )];

        for kb in local_keybindings.iter().chain(std::iter::once(&quit)) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(kb.key.clone(), Style::default().fg(theme.peach())));
            spans.push(Span::styled(" │ ", Style::default().fg(theme.surface2())));
            spans.push(Span::styled(
                kb.description.clone(),
                Style::default().fg(theme.subtext0()),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.mantle()));
        frame.render_widget(paragraph, area);
    }
}
