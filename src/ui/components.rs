mod number_input;
mod select;
mod text_input;

pub use number_input::{NumberInput, NumberInputEvent};
pub use select::{Select, SelectEvent};
pub use text_input::{TextInput, TextInputEvent};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::Theme;

/// Rows a form field occupies: bordered input plus one line for its error.
pub const FIELD_HEIGHT: u16 = 4;

/// Render a labelled, bordered input line with its inline error below.
pub(crate) fn render_field(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    content: Line<'_>,
    focused: bool,
    error: Option<&str>,
) {
    let [input_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let border_color = match (error.is_some(), focused) {
        (true, _) => theme.error(),
        (false, true) => theme.border_focused(),
        (false, false) => theme.border(),
    };
    let title_style = if focused {
        Style::default()
            .fg(theme.mauve())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.subtext1())
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(content).block(block), input_area);

    if let Some(error) = error {
        let line = Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(theme.error()),
        ));
        frame.render_widget(Paragraph::new(line), error_area);
    }
}

/// Split `value` around a char-indexed cursor into styled spans.
pub(crate) fn cursor_line<'a>(
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
    theme: &Theme,
) -> Line<'a> {
    let input_style = Style::default().fg(theme.text());
    let cursor_style = Style::default()
        .fg(theme.base())
        .bg(theme.text())
        .add_modifier(Modifier::BOLD);
    let placeholder_style = Style::default().fg(theme.overlay0());

    if value.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(" ", cursor_style));
        }
        if let Some(placeholder) = placeholder {
            spans.push(Span::styled(placeholder.to_string(), placeholder_style));
        }
        return Line::from(spans);
    }

    if !focused {
        return Line::from(Span::styled(value.to_string(), input_style));
    }

    let before: String = value.chars().take(cursor).collect();
    let cursor_char = value.chars().nth(cursor).unwrap_or(' ');
    let after: String = value.chars().skip(cursor + 1).collect();

    Line::from(vec![
        Span::styled(before, input_style),
        Span::styled(cursor_char.to_string(), cursor_style),
        Span::styled(after, input_style),
    ])
}

/// Byte offset of the `cursor`-th char in `value`.
pub(crate) fn byte_offset(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map_or(value.len(), |(index, _)| index)
}
