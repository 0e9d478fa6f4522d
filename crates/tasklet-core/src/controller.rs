use tracing::{error, info};

use crate::config::Config;
use crate::error::TaskError;
use crate::filter::Filter;
use crate::notify::{Notice, NoticeKind, NoticeTicket, Notifier};
use crate::render::{ListView, render};
use crate::storage::Storage;
use crate::store::TaskStore;

pub const MSG_ADDED: &str = "Task added successfully";
pub const MSG_EMPTY: &str = "Task description cannot be empty";
pub const MSG_MARKED_COMPLETED: &str = "Task is marked as completed!";
pub const MSG_MARKED_ACTIVE: &str = "Task is marked as active!";
pub const MSG_TOGGLE_MISSING: &str = "Error: Task not found";
pub const MSG_DELETED: &str = "Task deleted successfully!";
pub const MSG_DELETE_MISSING: &str = "Error: Task not found for deletion";
pub const MSG_CLEARED: &str = "Completed tasks cleared!";
pub const MSG_NOTHING_TO_CLEAR: &str = "No completed tasks to clear.";
pub const MSG_SAVE_FAILED: &str = "Could not save tasks";
pub const MSG_IDS_EXHAUSTED: &str = "Error: No task ids left";

/// What the frontend should do after a handler ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub rerender: bool,
    pub clear_input: bool,
    /// Ticket of the message just shown; schedule its expiry.
    pub notice: Option<NoticeTicket>,
}

/// Action resolved from a click inside the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    Toggle(u64),
    Delete(u64),
}

/// A click captured on the list container, reduced to what the handler
/// needs: the id attribute of the nearest row, and whether the target sits
/// inside a toggle or a delete control.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListClick<'a> {
    pub row_id: Option<&'a str>,
    pub on_toggle: bool,
    pub on_delete: bool,
}

impl ListClick<'_> {
    /// Toggle clicks must not flip the native checkbox or let the wrapping
    /// label forward a second click; the next render sets `checked`.
    pub fn suppresses_default(&self) -> bool {
        self.on_toggle
    }

    pub fn intent(&self) -> Option<ListIntent> {
        let id = self.row_id?.trim().parse::<u64>().ok()?;
        if self.on_toggle {
            Some(ListIntent::Toggle(id))
        } else if self.on_delete {
            Some(ListIntent::Delete(id))
        } else {
            None
        }
    }
}

/// Owns the store, the active filter and the message region, and turns user
/// actions into mutations plus feedback.
#[derive(Debug)]
pub struct Controller<S> {
    store: TaskStore<S>,
    filter: Filter,
    notifier: Notifier,
}

impl<S: Storage> Controller<S> {
    pub fn load(storage: S, cfg: &Config) -> Self {
        Self {
            store: TaskStore::load(storage, &cfg.storage_key),
            filter: Filter::default(),
            notifier: Notifier::new(cfg.notice_timeout_ms),
        }
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notifier.current()
    }

    pub fn notice_timeout_ms(&self) -> u32 {
        self.notifier.timeout_ms()
    }

    pub fn view(&self) -> ListView {
        render(self.store.tasks(), self.filter)
    }

    pub fn add(&mut self, input: &str) -> Outcome {
        match self.store.add(input) {
            Ok(_) => Outcome {
                rerender: true,
                clear_input: true,
                notice: Some(self.notifier.notify(MSG_ADDED, NoticeKind::Success)),
            },
            Err(err) => self.failed(err),
        }
    }

    pub fn toggle(&mut self, id: u64) -> Outcome {
        match self.store.toggle(id) {
            Ok(completed) => {
                let message = if completed {
                    MSG_MARKED_COMPLETED
                } else {
                    MSG_MARKED_ACTIVE
                };
                self.changed(message, NoticeKind::Neutral)
            }
            Err(err) => self.failed(err),
        }
    }

    pub fn delete(&mut self, id: u64) -> Outcome {
        match self.store.delete(id) {
            Ok(true) => self.changed(MSG_DELETED, NoticeKind::Success),
            Ok(false) => self.message(MSG_DELETE_MISSING, NoticeKind::Error),
            Err(err) => self.failed(err),
        }
    }

    pub fn clear_completed(&mut self) -> Outcome {
        match self.store.clear_completed() {
            Ok(0) => self.message(MSG_NOTHING_TO_CLEAR, NoticeKind::Info),
            Ok(_) => self.changed(MSG_CLEARED, NoticeKind::Success),
            Err(err) => self.failed(err),
        }
    }

    pub fn set_filter(&mut self, filter: Filter) -> Outcome {
        info!(%filter, "filter selected");
        self.filter = filter;
        Outcome {
            rerender: true,
            ..Outcome::default()
        }
    }

    pub fn dispatch(&mut self, intent: ListIntent) -> Outcome {
        match intent {
            ListIntent::Toggle(id) => self.toggle(id),
            ListIntent::Delete(id) => self.delete(id),
        }
    }

    pub fn expire_notice(&mut self, ticket: NoticeTicket) -> bool {
        self.notifier.expire(ticket)
    }

    fn changed(&mut self, message: &str, kind: NoticeKind) -> Outcome {
        Outcome {
            rerender: true,
            clear_input: false,
            notice: Some(self.notifier.notify(message, kind)),
        }
    }

    fn message(&mut self, message: &str, kind: NoticeKind) -> Outcome {
        Outcome {
            notice: Some(self.notifier.notify(message, kind)),
            ..Outcome::default()
        }
    }

    fn failed(&mut self, err: TaskError) -> Outcome {
        let message = match &err {
            TaskError::EmptyDescription => MSG_EMPTY,
            TaskError::NotFound(_) => MSG_TOGGLE_MISSING,
            TaskError::IdsExhausted => MSG_IDS_EXHAUSTED,
            TaskError::Storage(_) => {
                error!(error = %format!("{err:#}"), "task change was not saved");
                MSG_SAVE_FAILED
            }
        };
        self.message(message, NoticeKind::Error)
    }
}
