use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task description cannot be empty")]
    EmptyDescription,

    #[error("task not found: {0}")]
    NotFound(u64),

    #[error("no task ids left to assign")]
    IdsExhausted,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
