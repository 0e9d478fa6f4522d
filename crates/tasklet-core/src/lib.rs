pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod notify;
pub mod render;
pub mod storage;
pub mod store;
pub mod task;

pub use config::Config;
pub use controller::{
  Controller,
  ListClick,
  ListIntent,
  Outcome
};
pub use error::TaskError;
pub use filter::Filter;
pub use notify::{
  Notice,
  NoticeKind,
  NoticeTicket,
  Notifier
};
pub use render::{
  ListView,
  TaskRow
};
pub use storage::{
  MemoryStorage,
  Storage
};
pub use store::TaskStore;
pub use task::Task;
