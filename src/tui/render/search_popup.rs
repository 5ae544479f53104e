use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, SearchField};

use super::centered_rect_fixed;
use super::form_popup::text_field_line;

/// Render the search form popup.
pub fn render_search_popup(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let popup_w: u16 = 54.min(area.width.saturating_sub(2));
    let popup_h: u16 = 9.min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let header_style = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let title_focus = app.search.field == SearchField::Title;
    let description_focus = app.search.field == SearchField::Description;
    let completed_focus = app.search.field == SearchField::Completed;

    let completed_label_style = if completed_focus {
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let mut completed_spans = vec![
        Span::styled(format!(" {:<12} ", "Completed"), completed_label_style),
        Span::styled(
            format!("\u{2039} {} \u{203A}", app.search.completed.label()),
            Style::default().fg(theme.cyan).bg(bg),
        ),
    ];
    if completed_focus {
        completed_spans.push(Span::styled(
            "  space to cycle",
            Style::default().fg(theme.dim).bg(bg),
        ));
    }

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(" Search tasks", header_style)),
        Line::from(""),
        text_field_line(
            theme,
            "Title",
            &app.search.title,
            title_focus.then_some(app.search.cursor),
        ),
        text_field_line(
            theme,
            "Description",
            &app.search.description,
            description_focus.then_some(app.search.cursor),
        ),
        Line::from(completed_spans),
        Line::from(""),
        Line::from(Span::styled(
            " Enter search \u{00B7} Tab field \u{00B7} Esc close",
            Style::default().fg(theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay);
}
