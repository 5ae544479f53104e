use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode, SearchField};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,

        // Cursor within the current page
        (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Down) => {
            move_cursor(app, 1);
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::NONE, KeyCode::Up) => {
            move_cursor(app, -1);
        }

        // Paging
        (KeyModifiers::NONE, KeyCode::Char('h')) | (KeyModifiers::NONE, KeyCode::Left) => {
            app.board.prev_page();
            app.clamp_cursor();
        }
        (KeyModifiers::NONE, KeyCode::Char('l')) | (KeyModifiers::NONE, KeyCode::Right) => {
            app.board.next_page();
            app.clamp_cursor();
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.board.page = 1;
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) => {
            app.board.page = app.board.total_pages();
            app.clamp_cursor();
        }

        // Mutations
        (KeyModifiers::NONE, KeyCode::Char('a')) => open_create_form(app),
        (KeyModifiers::NONE, KeyCode::Char('e')) | (KeyModifiers::NONE, KeyCode::Enter) => {
            open_edit_form(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => request_delete(app),
        (KeyModifiers::NONE, KeyCode::Char('x')) => app.toggle_selected(),

        // Search / refresh
        (KeyModifiers::NONE, KeyCode::Char('/')) => open_search(app),
        (KeyModifiers::NONE, KeyCode::Char('c')) => app.clear_search(),
        (KeyModifiers::NONE, KeyCode::Char('r')) => app.refresh(),

        (_, KeyCode::Char('?')) => app.show_help = true,

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i64) {
    let len = app.board.page_tasks().len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    let new = app.cursor as i64 + delta;
    app.cursor = new.clamp(0, len as i64 - 1) as usize;
}

/// Open the form with a fresh draft in create mode. Resetting the draft
/// also clears the error channel.
fn open_create_form(app: &mut App) {
    app.form.clear();
    app.error = None;
    app.mode = Mode::Form;
}

/// Load the selected task's fields into the draft and open the form in
/// edit mode.
fn open_edit_form(app: &mut App) {
    let Some(task) = app.selected_task().cloned() else {
        return;
    };
    app.form.load(&task);
    app.error = None;
    app.mode = Mode::Form;
}

fn request_delete(app: &mut App) {
    let Some(task) = app.selected_task() else {
        return;
    };
    app.confirm_delete = Some(task.id);
    app.mode = Mode::Confirm;
}

fn open_search(app: &mut App) {
    app.search.field = SearchField::Title;
    app.search.cursor = app.search.title.len();
    app.mode = Mode::Search;
}
