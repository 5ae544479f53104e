use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode, SearchField};

use super::common;

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Close the form; the inputs survive for next time
        (_, KeyCode::Esc) => app.mode = Mode::Navigate,

        // Recompute the view from the current inputs
        (_, KeyCode::Enter) => app.run_search(),

        // Field navigation
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Down) => {
            app.search.field = app.search.field.next();
            sync_cursor(app);
        }
        (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Up) => {
            app.search.field = app.search.field.prev();
            sync_cursor(app);
        }

        // Completion tristate: space or arrows cycle any → done → open
        _ if app.search.field == SearchField::Completed => {
            if matches!(
                key.code,
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            ) {
                app.search.completed = app.search.completed.cycle();
            }
        }

        // Text fields
        _ => {
            let mut cursor = app.search.cursor;
            if let Some(buf) = app.search.focused_text_mut() {
                common::edit_buffer_key(buf, &mut cursor, key);
            }
            app.search.cursor = cursor;
        }
    }
}

fn sync_cursor(app: &mut App) {
    app.search.cursor = app.search.focused_text().map_or(0, str::len);
}
