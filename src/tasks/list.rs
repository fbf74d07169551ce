//! The ordered task list.
//!
//! Users address tasks by 1-based index; storage is a 0-based `Vec`. Every
//! index is validated before anything is mutated.

use serde::{Deserialize, Serialize};

use crate::error::{ChatterboxError, Result};

use super::Task;

/// Stable identity of a task within one [`TaskList`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

/// Tasks in insertion order, which is also display and persisted order.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    entries: Vec<(TaskId, Task)>,
    next_id: u64,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a task and return its id.
    pub fn push(&mut self, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, task));
        id
    }

    /// Tasks in order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.entries.iter().map(|(_, task)| task)
    }

    /// Map a 1-based user index to a storage offset.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for 0 or anything past the end.
    pub fn resolve(&self, user_index: usize) -> Result<usize> {
        user_index
            .checked_sub(1)
            .filter(|offset| *offset < self.entries.len())
            .ok_or(ChatterboxError::IndexOutOfRange {
                index: user_index,
                size: self.entries.len(),
            })
    }

    /// Task at a 1-based index.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the index is invalid.
    pub fn get(&self, user_index: usize) -> Result<&Task> {
        let offset = self.resolve(user_index)?;
        Ok(&self.entries[offset].1)
    }

    /// Id of the task at a 1-based index.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the index is invalid.
    pub fn id_at(&self, user_index: usize) -> Result<TaskId> {
        let offset = self.resolve(user_index)?;
        Ok(self.entries[offset].0)
    }

    /// Look a task up by id.
    #[must_use]
    pub fn by_id(&self, id: TaskId) -> Option<&Task> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, task)| task)
    }

    /// Current 1-based index of a task.
    #[must_use]
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .map(|offset| offset + 1)
    }

    /// Set the done flag of the task at a 1-based index.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the index is invalid; nothing changes.
    pub fn set_done(&mut self, user_index: usize, done: bool) -> Result<&Task> {
        let offset = self.resolve(user_index)?;
        let task = &mut self.entries[offset].1;
        task.set_done(done);
        Ok(task)
    }

    /// Remove the task at a 1-based index, shifting later tasks down.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the index is invalid; nothing changes.
    pub fn remove(&mut self, user_index: usize) -> Result<(TaskId, Task)> {
        let offset = self.resolve(user_index)?;
        Ok(self.entries.remove(offset))
    }

    /// Tasks whose description contains `keyword`, case-insensitively,
    /// paired with their 1-based index.
    #[must_use]
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.to_lowercase();
        self.iter()
            .enumerate()
            .filter(|(_, task)| task.description().to_lowercase().contains(&needle))
            .map(|(offset, task)| (offset + 1, task))
            .collect()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut list = Self::new();
        for task in iter {
            list.push(task);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> TaskList {
        names.iter().map(|n| Task::todo(*n).unwrap()).collect()
    }

    fn descriptions(list: &TaskList) -> Vec<&str> {
        list.iter().map(Task::description).collect()
    }

    #[test]
    fn test_push_preserves_order() {
        let list = list_of(&["a", "b", "c"]);
        assert_eq!(list.len(), 3);
        assert_eq!(descriptions(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_resolve_is_one_based() {
        let list = list_of(&["a", "b"]);
        assert_eq!(list.resolve(1).unwrap(), 0);
        assert_eq!(list.resolve(2).unwrap(), 1);
        assert!(matches!(
            list.resolve(0),
            Err(ChatterboxError::IndexOutOfRange { index: 0, size: 2 })
        ));
        assert!(matches!(
            list.resolve(3),
            Err(ChatterboxError::IndexOutOfRange { index: 3, size: 2 })
        ));
    }

    #[test]
    fn test_mark_then_unmark_restores_flag() {
        let mut list = list_of(&["a", "b"]);
        let before = list.get(2).unwrap().is_done();
        list.set_done(2, true).unwrap();
        assert!(list.get(2).unwrap().is_done());
        list.set_done(2, false).unwrap();
        assert_eq!(list.get(2).unwrap().is_done(), before);
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut list = list_of(&["a", "b", "c"]);
        let (_, removed) = list.remove(2).unwrap();
        assert_eq!(removed.description(), "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2).unwrap().description(), "c");
    }

    #[test]
    fn test_remove_out_of_range_leaves_list_unchanged() {
        let mut list = list_of(&["a", "b"]);
        assert!(list.remove(5).is_err());
        assert!(list.remove(0).is_err());
        assert_eq!(list.len(), 2);
        assert_eq!(descriptions(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_ids_are_stable_and_not_reused() {
        let mut list = list_of(&["a", "b", "c"]);
        let c = list.id_at(3).unwrap();
        let (b, _) = list.remove(2).unwrap();
        assert_eq!(list.position_of(c), Some(2));
        assert_eq!(list.position_of(b), None);

        let d = list.push(Task::todo("d").unwrap());
        assert_ne!(d, b);
        assert_eq!(list.by_id(d).unwrap().description(), "d");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let list = list_of(&["Read Book", "return book", "buy milk"]);
        let found: Vec<usize> = list.find("book").into_iter().map(|(i, _)| i).collect();
        assert_eq!(found, vec![1, 2]);
        assert!(list.find("cheese").is_empty());
    }
}
