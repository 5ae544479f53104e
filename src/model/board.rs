use crate::model::task::{Task, TaskDraft, TaskQuery};
use crate::ops::{paging, query};

/// Client-side mirror of the backend collection.
///
/// `tasks` holds the full collection in fetch/creation order; `view` is
/// the filtered subset currently displayed. Every successful mutation
/// resets `view` to mirror `tasks` — only an explicit query narrows it.
/// `page` is a 1-based cursor over `view`, always within
/// `1..=total_pages`.
#[derive(Debug, Clone)]
pub struct Board {
    pub tasks: Vec<Task>,
    pub view: Vec<Task>,
    pub page: usize,
    pub loaded: bool,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            tasks: Vec::new(),
            view: Vec::new(),
            page: 1,
            loaded: false,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Replace the collection wholesale after a successful fetch.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loaded = true;
        self.reset_view();
    }

    /// Append a freshly created task (with its server-assigned id).
    pub fn apply_created(&mut self, task: Task) {
        self.tasks.push(task);
        self.reset_view();
    }

    /// Rebuild the entry with the given id from the draft, in place.
    /// Position and id are preserved. Returns false if the id is unknown.
    pub fn apply_updated(&mut self, id: u64, draft: &TaskDraft) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.title = draft.title.clone();
        task.description = draft.description.clone();
        task.completed = draft.completed;
        self.reset_view();
        true
    }

    /// Remove the entry with the given id from the collection.
    pub fn apply_removed(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
        self.reset_view();
    }

    /// Narrow the view to the tasks matching `q` and jump to page 1.
    pub fn run_query(&mut self, q: &TaskQuery) {
        self.view = query::filter_tasks(&self.tasks, q);
        self.page = 1;
    }

    fn reset_view(&mut self) {
        self.view = self.tasks.clone();
        self.clamp_page();
    }

    pub fn total_pages(&self) -> usize {
        paging::total_pages(self.view.len())
    }

    /// The slice of the view visible on the current page.
    pub fn page_tasks(&self) -> &[Task] {
        paging::page_slice(&self.view, self.page)
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    /// Go back one page; no-op on page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn clamp_page(&mut self) {
        self.page = paging::clamp_page(self.page, self.view.len());
    }
}
