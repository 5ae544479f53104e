use std::io;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;
use tracing::warn;

use crate::api::client::{ApiClient, ApiError};
use crate::model::board::Board;
use crate::model::config::BoardConfig;
use crate::model::task::{CompletedFilter, FormMode, Task, TaskDraft, TaskQuery};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Form,
    Search,
    Confirm,
}

/// Which task-form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Completed,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Completed,
            FormField::Completed => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Completed,
            FormField::Description => FormField::Title,
            FormField::Completed => FormField::Description,
        }
    }
}

/// Draft state behind the task form. `mode` decides whether submitting
/// creates a new task or updates an existing one.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub field: FormField,
    /// Byte offset of the edit cursor within the focused text field
    pub cursor: usize,
}

impl FormState {
    /// Reset the draft and return to create mode.
    pub fn clear(&mut self) {
        *self = FormState::default();
    }

    /// Copy a task's fields into the draft and switch to edit mode.
    pub fn load(&mut self, task: &Task) {
        self.mode = FormMode::Editing(task.id);
        self.title = task.title.clone();
        self.description = task.description.clone();
        self.completed = task.completed;
        self.field = FormField::Title;
        self.cursor = self.title.len();
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
        }
    }

    pub fn focused_text(&self) -> Option<&str> {
        match self.field {
            FormField::Title => Some(&self.title),
            FormField::Description => Some(&self.description),
            FormField::Completed => None,
        }
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Completed => None,
        }
    }
}

/// Which search-form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Description,
    Completed,
}

impl SearchField {
    pub fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Description,
            SearchField::Description => SearchField::Completed,
            SearchField::Completed => SearchField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SearchField::Title => SearchField::Completed,
            SearchField::Description => SearchField::Title,
            SearchField::Completed => SearchField::Description,
        }
    }
}

/// Search form state. Inputs survive closing the form, like the web UI's
/// search boxes; only an explicit submit recomputes the view.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub title: String,
    pub description: String,
    pub completed: CompletedFilter,
    pub field: SearchField,
    pub cursor: usize,
}

impl SearchState {
    pub fn query(&self) -> TaskQuery {
        TaskQuery {
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
        }
    }

    pub fn clear(&mut self) {
        *self = SearchState::default();
    }

    pub fn focused_text(&self) -> Option<&str> {
        match self.field {
            SearchField::Title => Some(&self.title),
            SearchField::Description => Some(&self.description),
            SearchField::Completed => None,
        }
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            SearchField::Title => Some(&mut self.title),
            SearchField::Description => Some(&mut self.description),
            SearchField::Completed => None,
        }
    }
}

/// Main application state
pub struct App {
    pub client: ApiClient,
    pub board: Board,
    pub mode: Mode,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub should_quit: bool,
    /// Cursor index within the current page slice
    pub cursor: usize,
    pub form: FormState,
    pub search: SearchState,
    /// Most recent failure from any network operation
    pub error: Option<String>,
    /// Transient feedback from the last successful operation
    pub status_message: Option<String>,
    /// The query behind the current view, kept for match highlighting.
    /// None when the view mirrors the full collection.
    pub active_query: Option<TaskQuery>,
    /// Id awaiting delete confirmation
    pub confirm_delete: Option<u64>,
    pub show_help: bool,
    pub refreshed_at: Option<DateTime<Local>>,
}

impl App {
    pub fn new(client: ApiClient, config: &BoardConfig) -> Self {
        App {
            client,
            board: Board::new(),
            mode: Mode::Navigate,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
            cursor: 0,
            form: FormState::default(),
            search: SearchState::default(),
            error: None,
            status_message: None,
            active_query: None,
            confirm_delete: None,
            show_help: false,
            refreshed_at: None,
        }
    }

    /// Task under the cursor on the current page.
    pub fn selected_task(&self) -> Option<&Task> {
        self.board.page_tasks().get(self.cursor)
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.board.page_tasks().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    // -----------------------------------------------------------------
    // Network operations. Each runs synchronously on the event thread;
    // on failure local state is untouched and the message lands in the
    // single error channel.

    /// Fetch the full collection and replace the board's contents.
    pub fn refresh(&mut self) {
        match self.client.list() {
            Ok(tasks) => {
                let count = tasks.len();
                self.board.replace_all(tasks);
                self.active_query = None;
                self.error = None;
                self.refreshed_at = Some(Local::now());
                self.status_message = Some(format!(
                    "{} task{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
                self.clamp_cursor();
            }
            Err(e) => self.fail(e),
        }
    }

    /// Submit the form: create in `Creating` mode, update in `Editing`.
    /// On failure the form stays open with the draft intact.
    pub fn submit_form(&mut self) {
        let draft = self.form.draft();
        match self.form.mode {
            FormMode::Creating => match self.client.create(&draft) {
                Ok(task) => {
                    let id = task.id;
                    self.board.apply_created(task);
                    self.active_query = None;
                    self.finish_form(format!("created #{id}"));
                }
                Err(e) => self.fail(e),
            },
            FormMode::Editing(id) => match self.client.update(id, &draft) {
                Ok(()) => {
                    self.board.apply_updated(id, &draft);
                    self.active_query = None;
                    self.finish_form(format!("updated #{id}"));
                }
                Err(e) => self.fail(e),
            },
        }
    }

    fn finish_form(&mut self, message: String) {
        self.form.clear();
        self.mode = Mode::Navigate;
        self.error = None;
        self.status_message = Some(message);
        self.clamp_cursor();
    }

    /// Delete the given task on the backend, then locally.
    pub fn delete_task(&mut self, id: u64) {
        match self.client.delete(id) {
            Ok(()) => {
                self.board.apply_removed(id);
                self.active_query = None;
                self.error = None;
                self.status_message = Some(format!("deleted #{id}"));
                self.clamp_cursor();
            }
            Err(e) => self.fail(e),
        }
    }

    /// Flip completion on the selected task through a full update.
    pub fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        let draft = TaskDraft {
            title: task.title,
            description: task.description,
            completed: !task.completed,
        };
        match self.client.update(task.id, &draft) {
            Ok(()) => {
                self.board.apply_updated(task.id, &draft);
                self.active_query = None;
                self.error = None;
                self.status_message = Some(format!(
                    "#{} {}",
                    task.id,
                    if draft.completed { "done" } else { "reopened" }
                ));
                self.clamp_cursor();
            }
            Err(e) => self.fail(e),
        }
    }

    /// Run the search form's query against the local collection.
    /// Purely local; resets the page cursor to 1.
    pub fn run_search(&mut self) {
        let query = self.search.query();
        self.board.run_query(&query);
        let count = self.board.view.len();
        self.active_query = if query.is_empty() { None } else { Some(query) };
        self.mode = Mode::Navigate;
        self.cursor = 0;
        self.status_message = Some(format!(
            "{} match{}",
            count,
            if count == 1 { "" } else { "es" }
        ));
    }

    /// Drop the active query: the view mirrors the full collection again.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.board.run_query(&TaskQuery::default());
        self.active_query = None;
        self.cursor = 0;
        self.status_message = Some("filter cleared".to_string());
    }

    fn fail(&mut self, err: ApiError) {
        warn!(%err, "operation failed");
        self.error = Some(err.to_string());
        self.status_message = None;
    }

    /// Case-insensitive literal regexes for highlighting the active
    /// query's title and description substrings in matching rows.
    pub fn highlight_patterns(&self) -> (Option<Regex>, Option<Regex>) {
        let Some(q) = &self.active_query else {
            return (None, None);
        };
        let build = |needle: &str| {
            if needle.is_empty() {
                None
            } else {
                Regex::new(&format!("(?i){}", regex::escape(needle))).ok()
            }
        };
        (build(&q.title), build(&q.description))
    }
}

/// Run the TUI application
pub fn run(config: &BoardConfig, base_url: String) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(base_url);
    let mut app = App::new(client, config);

    // Initial fetch, mirroring the on-mount fetch of the web UI. A failed
    // fetch lands in the error row instead of aborting the session.
    app.refresh();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            input::handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn app_for(server: &mockito::Server) -> App {
        App::new(ApiClient::new(server.url()), &BoardConfig::default())
    }

    fn three_tasks_body() -> &'static str {
        r#"[{"id":1,"title":"Buy milk","description":"2%","completed":false},
            {"id":2,"title":"Buy bread","description":"whole grain","completed":true},
            {"id":3,"title":"Call plumber","description":"kitchen sink","completed":false}]"#
    }

    fn mock_list(server: &mut mockito::Server) -> mockito::Mock {
        server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(three_tasks_body())
            .create()
    }

    #[test]
    fn refresh_loads_collection_and_view() {
        let mut server = mockito::Server::new();
        let _m = mock_list(&mut server);

        let mut app = app_for(&server);
        app.refresh();

        assert!(app.board.loaded);
        assert_eq!(app.board.tasks.len(), 3);
        assert_eq!(app.board.view.len(), 3);
        assert!(app.error.is_none());
        assert!(app.refreshed_at.is_some());
    }

    #[test]
    fn refresh_is_idempotent_and_resets_the_view() {
        let mut server = mockito::Server::new();
        let _m = mock_list(&mut server);

        let mut app = app_for(&server);
        app.refresh();
        app.search.title = "milk".to_string();
        app.run_search();
        assert_eq!(app.board.view.len(), 1);

        app.refresh();
        assert_eq!(app.board.tasks.len(), 3);
        assert_eq!(app.board.view.len(), 3);
        assert!(app.active_query.is_none());
    }

    #[test]
    fn failed_refresh_keeps_prior_state() {
        let mut server = mockito::Server::new();
        let m = mock_list(&mut server);
        let mut app = app_for(&server);
        app.refresh();
        drop(m);
        server.reset();
        let _err = server.mock("GET", "/tasks").with_status(500).create();

        app.refresh();

        assert_eq!(app.board.tasks.len(), 3);
        assert!(app.error.as_deref().unwrap().contains("500"));
    }

    #[test]
    fn add_key_opens_an_empty_create_form() {
        let server = mockito::Server::new();
        let mut app = app_for(&server);

        input::handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.form.mode, FormMode::Creating);
        assert!(app.form.title.is_empty());
    }

    #[test]
    fn create_via_form_appends_and_returns_to_navigate() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/tasks/")
            .match_body(Matcher::Json(json!({
                "title": "Water plants",
                "description": "",
                "completed": false
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":12,"title":"Water plants","description":"","completed":false}"#)
            .create();

        let mut app = app_for(&server);
        app.board.replace_all(Vec::new());

        input::handle_key(&mut app, key(KeyCode::Char('a')));
        type_str(&mut app, "Water plants");
        input::handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.form.mode, FormMode::Creating);
        assert!(app.form.title.is_empty());
        assert_eq!(app.board.tasks.len(), 1);
        assert_eq!(app.board.tasks[0].id, 12);
        assert_eq!(app.status_message.as_deref(), Some("created #12"));
    }

    #[test]
    fn create_with_blank_title_fails_and_keeps_the_form_open() {
        let server = mockito::Server::new();
        let mut app = app_for(&server);

        input::handle_key(&mut app, key(KeyCode::Char('a')));
        input::handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.error.as_deref(), Some("title is required"));
    }

    #[test]
    fn create_failure_preserves_the_draft_for_retry() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/tasks/").with_status(502).create();

        let mut app = app_for(&server);
        input::handle_key(&mut app, key(KeyCode::Char('a')));
        type_str(&mut app, "Fragile");
        input::handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.form.title, "Fragile");
        assert!(app.error.as_deref().unwrap().contains("502"));
    }

    #[test]
    fn edit_loads_fields_and_update_replaces_in_place() {
        let mut server = mockito::Server::new();
        let _list = mock_list(&mut server);
        let _put = server
            .mock("PUT", "/tasks/1")
            .match_body(Matcher::Json(json!({
                "title": "Buy milk",
                "description": "2%",
                "completed": true
            })))
            .with_status(200)
            .create();

        let mut app = app_for(&server);
        app.refresh();

        // cursor on task 1 → edit, toggle completed, submit
        input::handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.form.mode, FormMode::Editing(1));
        assert_eq!(app.form.title, "Buy milk");

        input::handle_key(&mut app, key(KeyCode::Tab));
        input::handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.form.field, FormField::Completed);
        input::handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.form.completed);
        input::handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.tasks.len(), 3);
        let ids: Vec<u64> = app.board.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(app.board.tasks[0].completed);
    }

    #[test]
    fn cancel_returns_to_navigate_and_clears_the_draft() {
        let server = mockito::Server::new();
        let mut app = app_for(&server);

        input::handle_key(&mut app, key(KeyCode::Char('a')));
        type_str(&mut app, "Scratch");
        input::handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.form.mode, FormMode::Creating);
        assert!(app.form.title.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut server = mockito::Server::new();
        let _list = mock_list(&mut server);
        let del = server.mock("DELETE", "/tasks/1").with_status(204).create();

        let mut app = app_for(&server);
        app.refresh();

        input::handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.confirm_delete, Some(1));

        // n backs out without touching anything
        input::handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.tasks.len(), 3);

        // y goes through
        input::handle_key(&mut app, key(KeyCode::Char('d')));
        input::handle_key(&mut app, key(KeyCode::Char('y')));
        let ids: Vec<u64> = app.board.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
        del.assert();
    }

    #[test]
    fn failed_delete_leaves_the_entry() {
        let mut server = mockito::Server::new();
        let _list = mock_list(&mut server);
        let _del = server.mock("DELETE", "/tasks/1").with_status(404).create();

        let mut app = app_for(&server);
        app.refresh();

        input::handle_key(&mut app, key(KeyCode::Char('d')));
        input::handle_key(&mut app, key(KeyCode::Char('y')));

        assert_eq!(app.board.tasks.len(), 3);
        assert!(app.error.as_deref().unwrap().contains("404"));
    }

    #[test]
    fn search_narrows_view_and_clear_restores_it() {
        let mut server = mockito::Server::new();
        let _list = mock_list(&mut server);

        let mut app = app_for(&server);
        app.refresh();

        input::handle_key(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);
        type_str(&mut app, "buy");
        input::handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.view.len(), 2);
        assert_eq!(app.board.page, 1);
        assert!(app.active_query.is_some());
        // collection untouched
        assert_eq!(app.board.tasks.len(), 3);

        input::handle_key(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.board.view.len(), 3);
        assert!(app.active_query.is_none());
    }

    #[test]
    fn search_by_completed_tristate() {
        let mut server = mockito::Server::new();
        let _list = mock_list(&mut server);

        let mut app = app_for(&server);
        app.refresh();

        input::handle_key(&mut app, key(KeyCode::Char('/')));
        // move to the completed field and cycle any → done
        input::handle_key(&mut app, key(KeyCode::Tab));
        input::handle_key(&mut app, key(KeyCode::Tab));
        input::handle_key(&mut app, key(KeyCode::Char(' ')));
        input::handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.board.view.len(), 1);
        assert_eq!(app.board.view[0].id, 2);
    }

    #[test]
    fn toggle_flips_completion_through_an_update() {
        let mut server = mockito::Server::new();
        let _list = mock_list(&mut server);
        let put = server
            .mock("PUT", "/tasks/1")
            .match_body(Matcher::Json(json!({
                "title": "Buy milk",
                "description": "2%",
                "completed": true
            })))
            .with_status(200)
            .create();

        let mut app = app_for(&server);
        app.refresh();

        input::handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(app.board.tasks[0].completed);
        put.assert();
    }

    #[test]
    fn paging_keys_clamp_at_the_edges() {
        let mut server = mockito::Server::new();
        let body: Vec<serde_json::Value> = (1..=12)
            .map(|i| json!({"id": i, "title": format!("task {i}"), "description": "", "completed": false}))
            .collect();
        let _list = server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .create();

        let mut app = app_for(&server);
        app.refresh();
        assert_eq!(app.board.total_pages(), 3);

        input::handle_key(&mut app, key(KeyCode::Char('h')));
        assert_eq!(app.board.page, 1);
        input::handle_key(&mut app, key(KeyCode::Char('l')));
        input::handle_key(&mut app, key(KeyCode::Char('l')));
        input::handle_key(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.board.page, 3);
        assert_eq!(app.board.page_tasks().len(), 2);

        // cursor clamps onto the shorter last page
        input::handle_key(&mut app, key(KeyCode::Char('j')));
        input::handle_key(&mut app, key(KeyCode::Char('j')));
        input::handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn help_overlay_swallows_the_next_key() {
        let server = mockito::Server::new();
        let mut app = app_for(&server);

        input::handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        input::handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
