use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::push_highlighted_spans;

/// Render the paginated task list plus its pagination footer.
pub fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    render_rows(frame, app, chunks[0]);
    render_page_row(frame, app, chunks[1]);
}

fn render_rows(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    if !app.board.loaded {
        let empty = Paragraph::new(" nothing fetched yet \u{2014} r to retry")
            .style(Style::default().fg(theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    if app.board.view.is_empty() {
        let text = if app.active_query.is_some() {
            " no matches \u{2014} c to clear the filter"
        } else {
            " no tasks \u{2014} a to add one"
        };
        let empty = Paragraph::new(text).style(Style::default().fg(theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let (title_re, description_re) = app.highlight_patterns();
    let match_style = Style::default().fg(theme.match_fg).bg(theme.match_bg);
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app.board.page_tasks().iter().enumerate() {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { theme.selection_bg } else { bg };

        if i > 0 {
            lines.push(Line::from(""));
        }

        // Checkbox + id + title
        let mut spans: Vec<Span> = Vec::new();
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let checkbox_style = if task.completed {
            Style::default().fg(theme.green).bg(row_bg)
        } else {
            Style::default().fg(theme.dim).bg(row_bg)
        };
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));
        spans.push(Span::styled(checkbox, checkbox_style));
        spans.push(Span::styled(
            format!(" #{:<4}", task.id),
            Style::default().fg(theme.dim).bg(row_bg),
        ));
        let title_style = if is_cursor {
            Style::default()
                .fg(theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_bright).bg(row_bg)
        };
        let title = unicode::truncate_to_width(&task.title, width.saturating_sub(12));
        push_highlighted_spans(
            &mut spans,
            &title,
            title_style,
            match_style,
            title_re.as_ref(),
        );

        // Pad the cursor row to full width
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }
        lines.push(Line::from(spans));

        // Description line (dimmed, indented)
        if !task.description.is_empty() {
            let mut body_spans = vec![Span::styled("       ", Style::default().bg(bg))];
            let description =
                unicode::truncate_to_width(&task.description, width.saturating_sub(8));
            push_highlighted_spans(
                &mut body_spans,
                &description,
                Style::default().fg(theme.dim).bg(bg),
                match_style,
                description_re.as_ref(),
            );
            lines.push(Line::from(body_spans));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pagination footer: `page N/M`, filter marker, paging hint.
fn render_page_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    let mut left = format!(" page {}/{}", app.board.page, app.board.total_pages());
    if app.active_query.is_some() {
        left.push_str(" \u{00B7} filtered");
    }

    let mut spans = vec![Span::styled(
        left,
        Style::default().fg(theme.text).bg(bg),
    )];

    if app.show_key_hints {
        let hint = "\u{2039} h \u{00B7} l \u{203A} ";
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
