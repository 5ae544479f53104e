use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::task::FormMode;
use crate::tui::app::{App, FormField};
use crate::tui::theme::Theme;

use super::centered_rect_fixed;

/// Render the task form popup (create or edit mode).
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let popup_w: u16 = 54.min(area.width.saturating_sub(2));
    let popup_h: u16 = 9.min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let header = match app.form.mode {
        FormMode::Creating => " Add a task".to_string(),
        FormMode::Editing(id) => format!(" Edit task #{id}"),
    };
    let header_style = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let title_focus = app.form.field == FormField::Title;
    let description_focus = app.form.field == FormField::Description;

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(header, header_style)),
        Line::from(""),
        text_field_line(
            theme,
            "Title",
            &app.form.title,
            title_focus.then_some(app.form.cursor),
        ),
        text_field_line(
            theme,
            "Description",
            &app.form.description,
            description_focus.then_some(app.form.cursor),
        ),
        checkbox_line(
            theme,
            app.form.completed,
            app.form.field == FormField::Completed,
        ),
        Line::from(""),
        Line::from(Span::styled(
            " Enter save \u{00B7} Tab field \u{00B7} Esc cancel",
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

/// A labeled single-line text field. `cursor` carries the byte offset of
/// the edit cursor when the field has focus.
pub(super) fn text_field_line<'a>(
    theme: &Theme,
    label: &str,
    value: &str,
    cursor: Option<usize>,
) -> Line<'a> {
    let bg = theme.background;

    let label_style = if cursor.is_some() {
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let value_style = Style::default().fg(theme.text_bright).bg(bg);

    let mut spans = vec![Span::styled(format!(" {label:<12} "), label_style)];
    match cursor {
        Some(at) => {
            let at = at.min(value.len());
            spans.push(Span::styled(value[..at].to_string(), value_style));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(theme.highlight).bg(bg),
            ));
            spans.push(Span::styled(value[at..].to_string(), value_style));
        }
        None => spans.push(Span::styled(value.to_string(), value_style)),
    }
    Line::from(spans)
}

fn checkbox_line<'a>(theme: &Theme, checked: bool, focused: bool) -> Line<'a> {
    let bg = theme.background;

    let label_style = if focused {
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let box_style = if checked {
        Style::default().fg(theme.green).bg(bg)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };

    let mut spans = vec![
        Span::styled(format!(" {:<12} ", "Completed"), label_style),
        Span::styled(if checked { "[x]" } else { "[ ]" }, box_style),
    ];
    if focused {
        spans.push(Span::styled(
            "  space to toggle",
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
