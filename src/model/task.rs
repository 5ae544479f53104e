use serde::{Deserialize, Serialize};

/// A task as the backend stores it. The client only ever holds a cached
/// copy; `id` is assigned server-side on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// The transient, locally-edited fields submitted on create and update.
/// Serializes to the POST/PUT request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TaskDraft {
    /// Copy an existing task's fields into a draft (entering edit mode).
    pub fn from_task(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            description: task.description.clone(),
            completed: task.completed,
        }
    }
}

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(u64),
}

/// Tristate completion filter used by search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletedFilter {
    #[default]
    Any,
    Completed,
    NotCompleted,
}

impl CompletedFilter {
    /// Whether a task with the given completion flag passes the filter.
    pub fn matches(self, completed: bool) -> bool {
        match self {
            CompletedFilter::Any => true,
            CompletedFilter::Completed => completed,
            CompletedFilter::NotCompleted => !completed,
        }
    }

    /// Advance to the next filter state (search form cycling).
    pub fn cycle(self) -> Self {
        match self {
            CompletedFilter::Any => CompletedFilter::Completed,
            CompletedFilter::Completed => CompletedFilter::NotCompleted,
            CompletedFilter::NotCompleted => CompletedFilter::Any,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompletedFilter::Any => "any",
            CompletedFilter::Completed => "done",
            CompletedFilter::NotCompleted => "open",
        }
    }

    /// From an optional CLI flag: absent means "any".
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => CompletedFilter::Any,
            Some(true) => CompletedFilter::Completed,
            Some(false) => CompletedFilter::NotCompleted,
        }
    }
}

/// A search request over the local collection. Empty strings match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub title: String,
    pub description: String,
    pub completed: CompletedFilter,
}

impl TaskQuery {
    /// An empty query matches every task.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.completed == CompletedFilter::Any
    }
}
