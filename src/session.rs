//! The host that ties the grammar, executor and storage together.
//!
//! A [`Session`] owns the task and tag lists. Each input line is classified,
//! executed and, if it changed anything, saved before the next line is read.
//! Every method takes `&mut self`, so mutations are serialised by
//! construction.

use tracing::{debug, info, warn};

use crate::commands::{CommandExecutor, Reply};
use crate::core::classify;
use crate::error::{ChatterboxError, Result};
use crate::storage::{Snapshot, TaskStore};
use crate::tasks::{TagList, TaskList};

/// Result of handling one line.
#[derive(Debug)]
pub struct Exchange {
    /// What the command produced.
    pub outcome: Result<Reply>,
    /// Set when the command succeeded but saving afterwards failed. The
    /// in-memory change is kept.
    pub save_error: Option<ChatterboxError>,
}

impl Exchange {
    /// Whether the session should stop reading input.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        matches!(self.outcome, Ok(Reply::Exit))
    }

    /// Text to show the user, or `None` on exit.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        let mut text = match &self.outcome {
            Ok(Reply::Exit) => return None,
            Ok(Reply::Message(message)) => message.clone(),
            Err(e) => format!("Sorry there was an error: {e}"),
        };
        if let Some(e) = &self.save_error {
            text.push_str(&format!("\nWarning: changes were not saved: {e}"));
        }
        Some(text)
    }
}

/// One interactive session over a task store.
pub struct Session<S: TaskStore> {
    executor: CommandExecutor,
    store: S,
    tasks: TaskList,
    tags: TagList,
}

impl<S: TaskStore> Session<S> {
    /// Open a session, loading whatever the store holds.
    ///
    /// A store with nothing saved yet, or one that cannot be read, yields an
    /// empty session.
    pub fn open(store: S, executor: CommandExecutor) -> Self {
        let Snapshot { tasks, tags } = match store.load(executor.parser()) {
            Ok(snapshot) => snapshot,
            Err(e) if e.is_not_found() => {
                info!("No saved tasks found, starting empty");
                Snapshot::default()
            },
            Err(e) => {
                warn!(error = %e, "Failed to load saved tasks, starting empty");
                Snapshot::default()
            },
        };

        Self {
            executor,
            store,
            tasks,
            tags,
        }
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub const fn tags(&self) -> &TagList {
        &self.tags
    }

    #[must_use]
    pub const fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Whether there is anything in the task list.
    #[must_use]
    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Execute one line and save if it changed the lists.
    pub fn handle_line(&mut self, line: &str) -> Exchange {
        let line = line.trim();
        let kind = classify(line);
        let outcome = self
            .executor
            .execute_kind(kind, line, &mut self.tasks, &mut self.tags);

        let save_error = match &outcome {
            Ok(_) if kind.is_mutating() => self.save().err(),
            _ => None,
        };

        if let Err(e) = &outcome {
            debug!(%kind, error = %e, "Command failed");
        }

        Exchange {
            outcome,
            save_error,
        }
    }

    /// Execute one line and return the text to show, or `None` on exit.
    pub fn respond(&mut self, line: &str) -> Option<String> {
        self.handle_line(line).render()
    }

    /// Save the current lists.
    ///
    /// # Errors
    ///
    /// Returns the store's error; the in-memory lists are unaffected.
    pub fn save(&self) -> Result<()> {
        self.store
            .save(self.executor.parser(), &self.tasks, &self.tags)
            .inspect_err(|e| warn!(error = %e, "Failed to save tasks"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockTaskStore;
    use crate::tasks::Task;

    fn empty_store() -> MockTaskStore {
        let mut store = MockTaskStore::new();
        store
            .expect_load()
            .returning(|_| Err(ChatterboxError::NotFound("tasks.txt".to_string())));
        store
    }

    #[test]
    fn test_open_missing_store_starts_empty() {
        let session = Session::open(empty_store(), CommandExecutor::default());
        assert!(!session.has_tasks());
        assert!(session.tags().is_empty());
    }

    #[test]
    fn test_open_unreadable_store_starts_empty() {
        let mut store = MockTaskStore::new();
        store
            .expect_load()
            .returning(|_| Err(ChatterboxError::Parse("corrupt".to_string())));

        let session = Session::open(store, CommandExecutor::default());
        assert!(!session.has_tasks());
    }

    #[test]
    fn test_open_uses_loaded_tasks() {
        let mut store = MockTaskStore::new();
        store.expect_load().returning(|_| {
            let mut tasks = TaskList::new();
            tasks.push(Task::todo("from disk").unwrap());
            Ok(Snapshot {
                tasks,
                tags: TagList::new(),
            })
        });

        let mut session = Session::open(store, CommandExecutor::default());
        assert_eq!(
            session.respond("list").unwrap(),
            "Current Tasks in List:\n1. [T][ ] from disk"
        );
    }

    #[test]
    fn test_saves_after_mutation_only() {
        let mut store = empty_store();
        store.expect_save().times(2).returning(|_, _, _| Ok(()));

        let mut session = Session::open(store, CommandExecutor::default());
        session.handle_line("todo a");
        session.handle_line("list");
        session.handle_line("find a");
        session.handle_line("mark 1");
    }

    #[test]
    fn test_failed_command_is_not_saved() {
        let mut store = empty_store();
        store.expect_save().never();

        let mut session = Session::open(store, CommandExecutor::default());
        let exchange = session.handle_line("mark 4");
        assert!(exchange.outcome.is_err());
        assert!(exchange.save_error.is_none());
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let mut store = empty_store();
        store.expect_save().returning(|_, _, _| {
            Err(ChatterboxError::Io(std::io::Error::other("disk full")))
        });

        let mut session = Session::open(store, CommandExecutor::default());
        let exchange = session.handle_line("todo keep me");

        assert!(exchange.outcome.is_ok());
        assert!(exchange.save_error.is_some());
        assert_eq!(session.tasks().len(), 1);
        let text = exchange.render().unwrap();
        assert!(text.starts_with("Added Todo to Tasks"));
        assert!(text.contains("Warning: changes were not saved"));
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let mut store = empty_store();
        store.expect_save().returning(|_, _, _| Ok(()));

        let mut session = Session::open(store, CommandExecutor::default());
        assert_eq!(
            session.respond("hello").unwrap(),
            "Sorry there was an error: Error: Unknown command"
        );
        assert_eq!(
            session.respond("deadline x").unwrap(),
            "Sorry there was an error: Missing parameter: Deadline date"
        );
        assert!(session.respond("todo still works").is_some());
        assert_eq!(session.tasks().len(), 1);
    }

    #[test]
    fn test_bye_exits() {
        let mut session = Session::open(empty_store(), CommandExecutor::default());
        let exchange = session.handle_line("bye");
        assert!(exchange.is_exit());
        assert_eq!(exchange.render(), None);
    }
}
