use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<TaskJson>,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        completed: task.completed,
    }
}

pub fn tasks_to_json(tasks: &[Task]) -> TaskListJson {
    TaskListJson {
        tasks: tasks.iter().map(task_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One task as a text line: `[x] #12  Title — description`
pub fn task_line(task: &Task) -> String {
    let checkbox = if task.completed { 'x' } else { ' ' };
    if task.description.is_empty() {
        format!("[{}] #{:<4} {}", checkbox, task.id, task.title)
    } else {
        format!(
            "[{}] #{:<4} {} \u{2014} {}",
            checkbox, task.id, task.title, task.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: 3,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: true,
        }
    }

    #[test]
    fn text_line_includes_state_id_and_fields() {
        assert_eq!(task_line(&task()), "[x] #3    Buy milk \u{2014} 2%");
        let mut open = task();
        open.completed = false;
        open.description.clear();
        assert_eq!(task_line(&open), "[ ] #3    Buy milk");
    }

    #[test]
    fn json_shape_matches_the_wire_format() {
        let json = serde_json::to_value(task_to_json(&task())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "Buy milk",
                "description": "2%",
                "completed": true
            })
        );
    }
}
