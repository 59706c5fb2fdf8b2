//! Ordered task collection with completion tracking

use std::collections::HashSet;
use tracing::debug;

use super::error::{Result, TaskError};
use super::model::{CompletionTracking, Task, TaskEntry, TaskId, TaskRef, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CompletionKey {
    Id(TaskId),
    Text(String),
}

/// The task list model. Owns the rows and the completed set; the
/// presentation layer only ever goes through these operations.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    completed: HashSet<CompletionKey>,
    tracking: CompletionTracking,
}

impl TaskList {
    pub fn new(tracking: CompletionTracking) -> Self {
        Self {
            tasks: Vec::new(),
            completed: HashSet::new(),
            tracking,
        }
    }

    pub fn tracking(&self) -> CompletionTracking {
        self.tracking
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Append a task. The text is trimmed; blank input is rejected.
    pub fn add(&mut self, text: &str) -> Result<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyInput);
        }

        let task = Task::new(text);
        let id = task.id;
        debug!("Adding task {} at position {}", id, self.tasks.len());
        self.tasks.push(task);
        Ok(id)
    }

    /// Mark the referenced task completed.
    ///
    /// Returns `false` when its completion key was already recorded, in which
    /// case nothing changes. With [`CompletionTracking::ByText`] the key is the
    /// text, so completing one row also covers every row with the same text.
    pub fn complete(&mut self, task_ref: Option<TaskRef>) -> Result<bool> {
        let index = self.resolve(task_ref)?;
        let key = self.key_for(&self.tasks[index]);
        if self.completed.contains(&key) {
            return Ok(false);
        }

        debug!("Completed task {} at position {}", self.tasks[index].id, index);
        self.completed.insert(key);
        Ok(true)
    }

    /// Remove the referenced task and drop its completion key.
    ///
    /// With [`CompletionTracking::ByText`] the key is dropped even if a
    /// surviving row shares the text, which un-marks that row.
    pub fn remove(&mut self, task_ref: Option<TaskRef>) -> Result<Task> {
        let index = self.resolve(task_ref)?;
        let task = self.tasks.remove(index);
        let key = self.key_for(&task);
        self.completed.remove(&key);
        debug!("Removed task {} from position {}", task.id, index);
        Ok(task)
    }

    pub fn status_of(&self, task_ref: Option<TaskRef>) -> Result<TaskStatus> {
        let index = self.resolve(task_ref)?;
        Ok(self.status_at(index))
    }

    /// Map a reference to a position in display order.
    pub fn resolve(&self, task_ref: Option<TaskRef>) -> Result<usize> {
        let index = match task_ref.ok_or(TaskError::NoSelection)? {
            TaskRef::Index(index) => Some(index),
            TaskRef::Line(line) => line.checked_sub(1),
            TaskRef::Id(id) => self.tasks.iter().position(|t| t.id == id),
        };

        index
            .filter(|&i| i < self.tasks.len())
            .ok_or(TaskError::NoSelection)
    }

    /// Full ordered snapshot for redrawing.
    pub fn entries(&self) -> Vec<TaskEntry> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskEntry {
                id: task.id,
                text: task.text.clone(),
                status: self.status_at(index),
            })
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        (0..self.tasks.len())
            .filter(|&i| self.status_at(i).is_completed())
            .count()
    }

    fn status_at(&self, index: usize) -> TaskStatus {
        if self.completed.contains(&self.key_for(&self.tasks[index])) {
            TaskStatus::Completed
        } else {
            TaskStatus::Incomplete
        }
    }

    fn key_for(&self, task: &Task) -> CompletionKey {
        match self.tracking {
            CompletionTracking::ById => CompletionKey::Id(task.id),
            CompletionTracking::ByText => CompletionKey::Text(task.text.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_id() -> TaskList {
        TaskList::new(CompletionTracking::ById)
    }

    fn by_text() -> TaskList {
        TaskList::new(CompletionTracking::ByText)
    }

    #[test]
    fn test_add_rejects_blank_input() {
        let mut list = by_id();
        assert_eq!(list.add(""), Err(TaskError::EmptyInput));
        assert_eq!(list.add("   "), Err(TaskError::EmptyInput));
        assert_eq!(list.add("\t\n"), Err(TaskError::EmptyInput));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_appends_incomplete_task() {
        let mut list = by_id();
        list.add("Buy milk").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(
            list.status_of(Some(TaskRef::Index(0))),
            Ok(TaskStatus::Incomplete)
        );
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = by_id();
        list.add("  Walk the dog \n").unwrap();
        assert_eq!(list.get(0).unwrap().text, "Walk the dog");
    }

    #[test]
    fn test_add_returns_resolvable_id() {
        let mut list = by_id();
        list.add("first").unwrap();
        let id = list.add("second").unwrap();
        assert_eq!(list.resolve(Some(id.into())), Ok(1));
    }

    #[test]
    fn test_complete_marks_completed() {
        let mut list = by_id();
        list.add("task").unwrap();
        assert_eq!(list.complete(Some(TaskRef::Index(0))), Ok(true));
        assert_eq!(
            list.status_of(Some(TaskRef::Index(0))),
            Ok(TaskStatus::Completed)
        );
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut list = by_id();
        list.add("task").unwrap();
        list.complete(Some(TaskRef::Index(0))).unwrap();
        let once = list.entries();
        assert_eq!(list.complete(Some(TaskRef::Index(0))), Ok(false));
        assert_eq!(list.entries(), once);
    }

    #[test]
    fn test_complete_without_selection() {
        let mut list = by_id();
        list.add("task").unwrap();
        assert_eq!(list.complete(None), Err(TaskError::NoSelection));
        assert_eq!(
            list.complete(Some(TaskRef::Index(3))),
            Err(TaskError::NoSelection)
        );
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_remove_without_selection() {
        let mut list = by_id();
        list.add("task").unwrap();
        assert_eq!(list.remove(None), Err(TaskError::NoSelection));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_status_of_without_selection() {
        let list = by_id();
        assert_eq!(list.status_of(None), Err(TaskError::NoSelection));
        assert_eq!(
            list.status_of(Some(TaskRef::Index(0))),
            Err(TaskError::NoSelection)
        );
    }

    #[test]
    fn test_remove_drops_row_and_completion() {
        let mut list = by_id();
        list.add("a").unwrap();
        list.add("b").unwrap();
        list.complete(Some(TaskRef::Index(0))).unwrap();

        let removed = list.remove(Some(TaskRef::Index(0))).unwrap();
        assert_eq!(removed.text, "a");
        assert_eq!(list.len(), 1);
        assert_eq!(list.completed_count(), 0);
        assert_eq!(
            list.status_of(Some(TaskRef::Index(0))),
            Ok(TaskStatus::Incomplete)
        );
    }

    #[test]
    fn test_line_refs_are_one_based() {
        let mut list = by_id();
        list.add("first").unwrap();
        list.add("second").unwrap();
        assert_eq!(list.resolve(Some(TaskRef::Line(1))), Ok(0));
        assert_eq!(list.resolve(Some(TaskRef::Line(2))), Ok(1));
        assert_eq!(
            list.resolve(Some(TaskRef::Line(0))),
            Err(TaskError::NoSelection)
        );
        assert_eq!(
            list.resolve(Some(TaskRef::Line(3))),
            Err(TaskError::NoSelection)
        );
    }

    #[test]
    fn test_unknown_id_does_not_resolve() {
        let mut list = by_id();
        let id = list.add("gone").unwrap();
        list.remove(Some(id.into())).unwrap();
        assert_eq!(list.resolve(Some(id.into())), Err(TaskError::NoSelection));
    }

    #[test]
    fn test_duplicates_independent_by_id() {
        let mut list = by_id();
        list.add("X").unwrap();
        list.add("X").unwrap();
        list.complete(Some(TaskRef::Index(0))).unwrap();
        assert_eq!(
            list.status_of(Some(TaskRef::Index(1))),
            Ok(TaskStatus::Incomplete)
        );
        assert_eq!(list.complete(Some(TaskRef::Index(1))), Ok(true));
    }

    #[test]
    fn test_duplicates_collapse_by_text() {
        let mut list = by_text();
        list.add("X").unwrap();
        list.add("X").unwrap();
        list.complete(Some(TaskRef::Index(0))).unwrap();

        // Only the first row was acted on, but both read as completed.
        assert_eq!(
            list.status_of(Some(TaskRef::Index(1))),
            Ok(TaskStatus::Completed)
        );
        assert_eq!(list.complete(Some(TaskRef::Index(1))), Ok(false));
    }

    #[test]
    fn test_remove_by_text_unmarks_surviving_duplicate() {
        let mut list = by_text();
        list.add("X").unwrap();
        list.add("X").unwrap();
        list.complete(Some(TaskRef::Index(0))).unwrap();
        list.complete(Some(TaskRef::Index(1))).unwrap();

        list.remove(Some(TaskRef::Index(0))).unwrap();
        assert_eq!(
            list.status_of(Some(TaskRef::Index(0))),
            Ok(TaskStatus::Incomplete)
        );
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_entries_reflect_order_and_status() {
        let mut list = by_id();
        list.add("A").unwrap();
        list.add("B").unwrap();
        list.complete(Some(TaskRef::Index(1))).unwrap();

        let entries = list.entries();
        let rows: Vec<(&str, TaskStatus)> = entries
            .iter()
            .map(|e| (e.text.as_str(), e.status))
            .collect();
        assert_eq!(
            rows,
            vec![("A", TaskStatus::Incomplete), ("B", TaskStatus::Completed)]
        );
    }

    #[test]
    fn test_entries_and_status_of_agree_after_duplicate_removal() {
        let mut list = by_text();
        list.add("X").unwrap();
        list.add("X").unwrap();
        list.add("Y").unwrap();
        list.complete(Some(TaskRef::Index(1))).unwrap();
        list.remove(Some(TaskRef::Index(0))).unwrap();

        for (index, entry) in list.entries().iter().enumerate() {
            assert_eq!(list.status_of(Some(TaskRef::Index(index))), Ok(entry.status));
            assert_eq!(list.get(index).map(|t| t.id), Some(entry.id));
        }
        assert_eq!(
            list.status_of(Some(TaskRef::Index(0))),
            Ok(TaskStatus::Incomplete)
        );
        assert_eq!(list.completed_count(), 0);
    }
}
