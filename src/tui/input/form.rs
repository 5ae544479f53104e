use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, FormField, Mode};

use super::common;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: discard the draft (also clears the error channel)
        (_, KeyCode::Esc) => {
            app.form.clear();
            app.error = None;
            app.mode = Mode::Navigate;
        }

        // Submit: create or update depending on the form mode
        (_, KeyCode::Enter) => app.submit_form(),

        // Field navigation
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Down) => {
            app.form.field = app.form.field.next();
            sync_cursor(app);
        }
        (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Up) => {
            app.form.field = app.form.field.prev();
            sync_cursor(app);
        }

        // Checkbox field: space or arrows toggle
        _ if app.form.field == FormField::Completed => {
            if matches!(
                key.code,
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            ) {
                app.form.completed = !app.form.completed;
            }
        }

        // Text fields
        _ => {
            let mut cursor = app.form.cursor;
            if let Some(buf) = app.form.focused_text_mut() {
                common::edit_buffer_key(buf, &mut cursor, key);
            }
            app.form.cursor = cursor;
        }
    }
}

fn sync_cursor(app: &mut App) {
    app.form.cursor = app.form.focused_text().map_or(0, str::len);
}
