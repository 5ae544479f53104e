pub mod board_view;
pub mod confirm_popup;
pub mod form_popup;
pub mod help_overlay;
pub mod search_popup;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use regex::Regex;

use super::app::{App, Mode};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Min(1),    // board
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    board_view::render_board(frame, app, chunks[1]);

    // Popups (rendered on top of the board)
    match app.mode {
        Mode::Form => form_popup::render_form_popup(frame, app, frame.area()),
        Mode::Search => search_popup::render_search_popup(frame, app, frame.area()),
        Mode::Confirm => confirm_popup::render_confirm_popup(frame, app, frame.area()),
        Mode::Navigate => {}
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// Top bar: program name, backend URL, counts and last refresh time.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(
            " taskboard",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            app.client.base_url().to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    let total = app.board.tasks.len();
    let mut right = if app.board.loaded {
        format!("{} task{}", total, if total == 1 { "" } else { "s" })
    } else {
        "no data".to_string()
    };
    if app.active_query.is_some() {
        right.push_str(&format!(" \u{00B7} {} shown", app.board.view.len()));
    }
    if let Some(at) = app.refreshed_at {
        right.push_str(&format!(" \u{00B7} {} ", at.format("%H:%M:%S")));
    }

    let left_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right_width = right.chars().count();
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            right,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Push spans for text with regex match highlighting. If no regex or no
/// matches, pushes a single span with `base_style`.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(
        x,
        y,
        width.min(area.width),
        height.min(area.height),
    )
}
