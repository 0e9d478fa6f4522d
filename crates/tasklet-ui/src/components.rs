mod filter_bar;
mod message_area;
mod task_input;
mod task_list;
mod task_list_row;
mod task_summary;

pub use filter_bar::FilterBar;
pub use message_area::MessageArea;
pub use task_input::TaskInput;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use task_summary::TaskSummary;
