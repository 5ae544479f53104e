use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

const KEYS: &[(&str, &str)] = &[
    ("j/k \u{2191}/\u{2193}", "move cursor"),
    ("h/l \u{2190}/\u{2192}", "previous / next page"),
    ("g/G", "first / last page"),
    ("a", "add a task"),
    ("e Enter", "edit the selected task"),
    ("x", "toggle completed"),
    ("d", "delete (with confirmation)"),
    ("/", "search"),
    ("c", "clear the filter"),
    ("r", "refresh from the server"),
    ("q", "quit"),
];

/// Render the help overlay.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let popup_w: u16 = 46.min(area.width.saturating_sub(2));
    let popup_h: u16 = (KEYS.len() as u16 + 5).min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Keys",
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {key:<12}"),
                Style::default().fg(theme.cyan).bg(bg),
            ),
            Span::styled(
                (*action).to_string(),
                Style::default().fg(theme.text).bg(bg),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " any key to close",
        Style::default().fg(theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay);
}
