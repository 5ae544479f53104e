use crate::model::task::{Task, TaskQuery};

/// Filter tasks against a query.
///
/// A task matches when its title contains the title query AND its
/// description contains the description query (both case-insensitive
/// substring checks) AND its completion flag passes the tristate filter.
/// Empty query strings match everything. Pure: the input slice is never
/// touched.
pub fn filter_tasks(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    let title_q = query.title.to_lowercase();
    let description_q = query.description.to_lowercase();

    tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&title_q)
                && task.description.to_lowercase().contains(&description_q)
                && query.completed.matches(task.completed)
        })
        .cloned()
        .collect()
}
