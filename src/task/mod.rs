//! Task list model
//!
//! An ordered collection of to-do entries with a completed/incomplete status
//! per entry. Nothing here knows about the terminal; the presentation layer
//! calls these operations and redraws from [`TaskList::entries`].

mod error;
mod list;
mod model;

pub use error::{Result, TaskError};
pub use list::TaskList;
pub use model::{CompletionTracking, Task, TaskEntry, TaskId, TaskRef, TaskStatus};
