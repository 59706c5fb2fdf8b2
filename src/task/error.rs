use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Please enter a task.")]
    EmptyInput,

    #[error("Please select a task.")]
    NoSelection,
}

impl TaskError {
    /// Dialog title shown when this error reaches the user
    pub fn title(&self) -> &'static str {
        match self {
            TaskError::EmptyInput => "Input Error",
            TaskError::NoSelection => "Selection Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
