use anyhow::Context;
use tracing::{debug, info, warn};

use crate::error::TaskError;
use crate::storage::Storage;
use crate::task::{Task, next_id_after};

/// Ordered task list backed by a [`Storage`] key.
///
/// Every mutation is applied to a copy of the list, written to storage, and
/// only then swapped in, so a failed write leaves both memory and storage as
/// they were.
#[derive(Debug)]
pub struct TaskStore<S> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
    next_id: u64,
}

impl<S: Storage> TaskStore<S> {
    /// Loads the list stored under `key`. Missing, unreadable, or malformed
    /// data starts an empty list.
    #[tracing::instrument(skip_all)]
    pub fn load(storage: S, key: impl AsRef<str>) -> Self {
        let key = key.as_ref().to_string();
        let tasks = match storage.read(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(error = %err, "stored tasks are malformed; starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("no stored tasks; first run");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "failed reading stored tasks; starting empty");
                Vec::new()
            }
        };

        let (tasks, next_id) = match next_id_after(&tasks) {
            Some(next_id) => (tasks, next_id),
            None => {
                warn!("stored task ids leave no room for new ones; starting empty");
                (Vec::new(), 1)
            }
        };
        info!(key = %key, count = tasks.len(), next_id, "loaded tasks");

        Self {
            storage,
            key,
            tasks,
            next_id,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.active_count()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[tracing::instrument(skip(self, text))]
    pub fn add(&mut self, text: &str) -> Result<Task, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let following = self.next_id.checked_add(1).ok_or(TaskError::IdsExhausted)?;
        let task = Task::new_active(self.next_id, text.to_string());
        let mut candidate = self.tasks.clone();
        candidate.push(task.clone());
        self.commit(candidate)?;
        self.next_id = following;

        info!(id = task.id, "added task");
        Ok(task)
    }

    /// Flips the completion flag and returns the new state. A missing `id`
    /// is [`TaskError::NotFound`] and writes nothing.
    #[tracing::instrument(skip(self))]
    pub fn toggle(&mut self, id: u64) -> Result<bool, TaskError> {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            debug!("toggle target missing");
            return Err(TaskError::NotFound(id));
        };

        let mut candidate = self.tasks.clone();
        candidate[idx].completed = !candidate[idx].completed;
        let completed = candidate[idx].completed;
        self.commit(candidate)?;

        info!(completed, "toggled task");
        Ok(completed)
    }

    /// Returns whether a task was removed.
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: u64) -> Result<bool, TaskError> {
        let candidate: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        if candidate.len() == self.tasks.len() {
            debug!("delete target missing");
            return Ok(false);
        }

        self.commit(candidate)?;
        info!("deleted task");
        Ok(true)
    }

    /// Removes every completed task and returns how many were removed.
    #[tracing::instrument(skip(self))]
    pub fn clear_completed(&mut self) -> Result<usize, TaskError> {
        let before = self.tasks.len();
        let candidate: Vec<Task> = self.tasks.iter().filter(|t| t.is_active()).cloned().collect();
        let removed = before - candidate.len();
        if removed == 0 {
            return Ok(0);
        }

        self.commit(candidate)?;
        info!(before, removed, "cleared completed tasks");
        Ok(removed)
    }

    /// Writes the current list to storage.
    #[tracing::instrument(skip(self))]
    pub fn persist(&mut self) -> Result<(), TaskError> {
        write_tasks(&mut self.storage, &self.key, &self.tasks)
    }

    fn commit(&mut self, candidate: Vec<Task>) -> Result<(), TaskError> {
        write_tasks(&mut self.storage, &self.key, &candidate)?;
        self.tasks = candidate;
        Ok(())
    }
}

fn write_tasks<S: Storage>(storage: &mut S, key: &str, tasks: &[Task]) -> Result<(), TaskError> {
    let serialized = serde_json::to_string(tasks).context("failed to serialize tasks")?;
    debug!(key, count = tasks.len(), "persisting tasks");
    storage
        .write(key, &serialized)
        .with_context(|| format!("failed to persist tasks under {key}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "todos";

    fn empty_store() -> TaskStore<MemoryStorage> {
        TaskStore::load(MemoryStorage::new(), KEY)
    }

    fn stored(store: &TaskStore<MemoryStorage>) -> Vec<Task> {
        let raw = store.storage().get(KEY).expect("stored value");
        serde_json::from_str(raw).expect("stored json")
    }

    /// Reads succeed, every write fails.
    #[derive(Debug, Default)]
    struct ReadOnlyStorage {
        inner: MemoryStorage,
    }

    impl Storage for ReadOnlyStorage {
        fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
            self.inner.read(key)
        }

        fn write(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("quota exceeded"))
        }
    }

    #[test]
    fn add_assigns_sequential_ids_and_persists() {
        let mut store = empty_store();
        let first = store.add("Buy milk").expect("add");
        let second = store.add("  Walk dog  ").expect("add");

        assert_eq!(first, Task::new_active(1, "Buy milk".to_string()));
        assert_eq!(second.id, 2);
        assert_eq!(second.text, "Walk dog");
        assert_eq!(store.next_id(), 3);
        assert_eq!(stored(&store), store.tasks());
    }

    #[test]
    fn add_rejects_blank_text_without_writing() {
        let mut store = empty_store();
        let err = store.add("   ").expect_err("blank");

        assert!(matches!(err, TaskError::EmptyDescription));
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.storage().get(KEY), None);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = empty_store();
        store.add("a").expect("add");
        let b = store.add("b").expect("add");
        assert!(store.delete(b.id).expect("delete"));

        let c = store.add("c").expect("add");
        assert_eq!(c.id, 3);
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn toggle_flips_and_reports_missing() {
        let mut store = empty_store();
        let a = store.add("a").expect("add");

        assert!(store.toggle(a.id).expect("toggle"));
        assert!(stored(&store)[0].completed);
        assert!(!store.toggle(a.id).expect("toggle"));
        assert!(matches!(store.toggle(42), Err(TaskError::NotFound(42))));
        assert_eq!(store.active_count(), 1);
    }

    #[test]
    fn delete_missing_leaves_store_untouched() {
        let mut store = empty_store();
        store.add("a").expect("add");
        let before = store.tasks().to_vec();

        assert!(!store.delete(999).expect("delete"));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn clear_completed_keeps_order_of_remaining() {
        let mut store = empty_store();
        let a = store.add("a").expect("add");
        store.add("b").expect("add");
        let c = store.add("c").expect("add");
        store.add("d").expect("add");
        store.toggle(a.id).expect("toggle");
        store.toggle(c.id).expect("toggle");

        assert_eq!(store.completed_count(), 2);
        assert_eq!(store.clear_completed().expect("clear"), 2);
        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "d"]);
        assert_eq!(store.clear_completed().expect("clear again"), 0);
        assert_eq!(stored(&store), store.tasks());
    }

    #[test]
    fn persist_writes_loaded_list_back_under_key() {
        let raw = r#"[{"id":2,"text":"two","completed":false}]"#;
        let mut store = TaskStore::load(MemoryStorage::with_entry(KEY, raw), KEY);
        store.persist().expect("persist");
        assert_eq!(stored(&store), store.tasks());
    }

    #[test]
    fn load_resumes_ids_after_highest_stored() {
        let storage = MemoryStorage::with_entry(KEY, r#"[{"id":5,"text":"five","completed":true}]"#);
        let store = TaskStore::load(storage, KEY);

        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), 6);
        assert_eq!(store.get(5).map(|t| t.completed), Some(true));
    }

    #[test]
    fn load_treats_malformed_data_as_first_run() {
        for raw in [
            "not json",
            "{}",
            "null",
            r#"[{"id":-1,"text":"x","completed":false}]"#,
            r#"[{"id":1,"text":"a","completed":false},{"id":18446744073709551615,"text":"b","completed":false}]"#,
        ] {
            let store = TaskStore::load(MemoryStorage::with_entry(KEY, raw), KEY);
            assert!(store.is_empty(), "{raw} should load empty");
            assert_eq!(store.next_id(), 1);
        }
    }

    #[test]
    fn add_refuses_to_wrap_the_id_counter() {
        let raw = format!(r#"[{{"id":{},"text":"near","completed":false}}]"#, u64::MAX - 1);
        let mut store = TaskStore::load(MemoryStorage::with_entry(KEY, &raw), KEY);
        assert_eq!(store.next_id(), u64::MAX);

        assert!(matches!(store.add("one more"), Err(TaskError::IdsExhausted)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), u64::MAX);
        assert_eq!(stored(&store), store.tasks());
    }

    #[test]
    fn failed_write_keeps_memory_unchanged() {
        let mut inner = MemoryStorage::new();
        inner
            .write(
                KEY,
                r#"[{"id":1,"text":"a","completed":false},{"id":2,"text":"b","completed":true}]"#,
            )
            .expect("seed");
        let mut store = TaskStore::load(ReadOnlyStorage { inner }, KEY);
        let before = store.tasks().to_vec();

        assert!(matches!(store.add("c"), Err(TaskError::Storage(_))));
        assert!(matches!(store.toggle(1), Err(TaskError::Storage(_))));
        assert!(matches!(store.delete(1), Err(TaskError::Storage(_))));
        assert!(matches!(store.clear_completed(), Err(TaskError::Storage(_))));
        assert_eq!(store.tasks(), before.as_slice());
        assert_eq!(store.next_id(), 3);
    }
}
