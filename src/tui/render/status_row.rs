use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen). The error channel wins over
/// everything else; otherwise the last status message plus key hints.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    if let Some(error) = &app.error {
        let line = Line::from(Span::styled(
            format!(" \u{2717} {error}"),
            Style::default().fg(theme.red).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let left = match &app.status_message {
        Some(message) => format!(" {message}"),
        None => String::new(),
    };
    let mut spans = vec![Span::styled(
        left,
        Style::default().fg(theme.text).bg(bg),
    )];

    if app.show_key_hints {
        let hint = match app.mode {
            Mode::Navigate => "a add \u{00B7} e edit \u{00B7} d delete \u{00B7} / search \u{00B7} ? help ",
            Mode::Form => "Enter save \u{00B7} Esc cancel ",
            Mode::Search => "Enter search \u{00B7} Esc close ",
            Mode::Confirm => "y delete \u{00B7} n cancel ",
        };
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, Style::default().fg(theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
