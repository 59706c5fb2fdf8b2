//! Task data model

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable task identity, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// First eight hex digits, enough to tell rows apart in logs
impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        f.write_str(&simple[..8])
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Incomplete,
    Completed,
}

impl TaskStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single to-do entry. Its status lives in the owning list's completed
/// set, see [`TaskList::status_of`](super::TaskList::status_of).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

impl Task {
    /// Callers are expected to pass trimmed text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            text: text.into(),
        }
    }
}

/// How the presentation layer points at "the currently selected task".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRef {
    /// Zero-based row, as used by the list presentation
    Index(usize),
    /// One-based display line, as used by the text presentation
    Line(usize),
    Id(TaskId),
}

impl From<TaskId> for TaskRef {
    fn from(id: TaskId) -> Self {
        Self::Id(id)
    }
}

/// What the completed set is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum CompletionTracking {
    /// One entry per task id; duplicates with the same text stay independent
    #[default]
    #[serde(rename = "id")]
    #[value(name = "id")]
    ById,
    /// One entry per task text; rows with identical text share completion
    #[serde(rename = "text")]
    #[value(name = "text")]
    ByText,
}

/// One row of the snapshot the presentation layer redraws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub id: TaskId,
    pub text: String,
    pub status: TaskStatus,
}
