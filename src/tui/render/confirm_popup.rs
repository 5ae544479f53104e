use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::centered_rect_fixed;

/// Render the delete confirmation popup.
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let Some(id) = app.confirm_delete else {
        return;
    };
    let title = app
        .board
        .tasks
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.title.as_str())
        .unwrap_or("");

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(4) as usize;
    let popup_h: u16 = 6.min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let quoted = format!("\u{201c}{}\u{201d}", unicode::truncate_to_width(title, inner_w));
    let lines = vec![
        Line::from(Span::styled(
            format!(" Delete task #{id}?"),
            Style::default()
                .fg(theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("   {quoted}"),
            Style::default().fg(theme.text_bright).bg(bg),
        )),
        Line::from(Span::styled(
            " y delete \u{00B7} n cancel",
            Style::default().fg(theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay);
}
