use serde::{Deserialize, Serialize};

/// One entry of the persisted task list.
///
/// The serialized shape is `{"id": 1, "text": "...", "completed": false}` and
/// is shared with anything else that has written the storage key before.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new_active(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// First id above every id in `tasks`, or `None` when the highest id leaves
/// no room.
pub fn next_id_after(tasks: &[Task]) -> Option<u64> {
    tasks.iter().map(|t| t.id).max().unwrap_or(0).checked_add(1)
}
