use crate::filter::Filter;
use crate::task::Task;

/// Class on the row's checkbox input.
pub const TOGGLE_CLASS: &str = "todo-checkbox";
/// Class on the styled stand-in drawn over the hidden checkbox.
pub const TOGGLE_PROXY_CLASS: &str = "custom-checkbox";
pub const DELETE_CLASS: &str = "delete-btn";
/// Row attribute carrying the task id.
pub const ROW_ID_ATTR: &str = "data-id";

/// Display descriptor for one visible task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
        }
    }

    pub fn row_class(&self) -> &'static str {
        if self.completed {
            "d-flex justify-content-between align-items-center completed"
        } else {
            "d-flex justify-content-between align-items-center"
        }
    }

    pub fn text_class(&self) -> &'static str {
        if self.completed {
            "todo-text text-decoration-line-through text-muted"
        } else {
            "todo-text"
        }
    }

    /// Changes with the completion state, so a toggled row is rebuilt
    /// rather than patched and its checkbox never keeps a stale native state.
    pub fn key(&self) -> String {
        format!("{}-{}", self.id, self.completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub filter: Filter,
    pub rows: Vec<TaskRow>,
    pub total: usize,
    pub left: usize,
    pub total_label: String,
    pub left_label: String,
    pub has_completed: bool,
}

impl ListView {
    /// The clear control stays clickable either way; with nothing to clear it
    /// is only dimmed.
    pub fn clear_button_class(&self) -> &'static str {
        if self.has_completed {
            "btn"
        } else {
            "btn btn-idle"
        }
    }
}

/// Projects `tasks` through `filter`. The counters always cover the whole
/// list.
pub fn render(tasks: &[Task], filter: Filter) -> ListView {
    let rows: Vec<TaskRow> = filter.apply(tasks).map(TaskRow::from_task).collect();
    let total = tasks.len();
    let left = tasks.iter().filter(|t| t.is_active()).count();

    ListView {
        filter,
        rows,
        total,
        left,
        total_label: total_label(total),
        left_label: left_label(left),
        has_completed: left < total,
    }
}

pub fn count_tasks(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}

pub fn total_label(count: usize) -> String {
    format!("Total: {}", count_tasks(count))
}

pub fn left_label(count: usize) -> String {
    format!("{} left", count_tasks(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        let mut tasks = vec![
            Task::new_active(1, "A".to_string()),
            Task::new_active(2, "B".to_string()),
            Task::new_active(4, "C".to_string()),
        ];
        tasks[0].completed = true;
        tasks
    }

    #[test]
    fn labels_pluralize_everything_but_one() {
        assert_eq!(total_label(0), "Total: 0 tasks");
        assert_eq!(total_label(1), "Total: 1 task");
        assert_eq!(total_label(2), "Total: 2 tasks");
        assert_eq!(left_label(0), "0 tasks left");
        assert_eq!(left_label(1), "1 task left");
        assert_eq!(left_label(12), "12 tasks left");
    }

    #[test]
    fn empty_list_renders_zero_counters() {
        let view = render(&[], Filter::All);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_label, "Total: 0 tasks");
        assert_eq!(view.left_label, "0 tasks left");
        assert!(!view.has_completed);
        assert_eq!(view.clear_button_class(), "btn btn-idle");
    }

    #[test]
    fn counters_ignore_active_filter() {
        let tasks = tasks();
        for filter in Filter::ALL {
            let view = render(&tasks, filter);
            assert_eq!(view.total, 3);
            assert_eq!(view.left, 2);
            assert!(view.has_completed);
            assert_eq!(view.clear_button_class(), "btn");
        }
    }

    #[test]
    fn rows_follow_filter_and_mark_completed() {
        let tasks = tasks();

        let completed = render(&tasks, Filter::Completed);
        assert_eq!(completed.rows.len(), 1);
        assert!(completed.rows[0].completed);
        assert!(completed.rows[0].row_class().ends_with("completed"));
        assert!(completed.rows[0].text_class().contains("text-decoration-line-through"));

        let active = render(&tasks, Filter::Active);
        let ids: Vec<u64> = active.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(active.rows[0].text_class(), "todo-text");
    }

    #[test]
    fn row_key_tracks_completion() {
        let mut tasks = tasks();
        let before = render(&tasks, Filter::All).rows[1].key();
        tasks[1].completed = true;
        let after = render(&tasks, Filter::All).rows[1].key();

        assert_eq!(before, "2-false");
        assert_eq!(after, "2-true");
    }
}
