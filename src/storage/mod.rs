//! Storage layer for chatterbox.
//!
//! The session loads a [`Snapshot`] once at start-up and saves after every
//! command that changes it. Saving always overwrites the previous state.

mod codec;
mod file;

pub use codec::{decode, encode};
pub use file::FileStore;

use crate::core::DateTimeParser;
use crate::error::Result;
use crate::tasks::{TagList, TaskList};

/// Everything that is persisted.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub tasks: TaskList,
    pub tags: TagList,
}

/// Where a session loads from and saves to.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Load the stored tasks and tags.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing has been saved yet, or an IO/parse
    /// error if the stored data cannot be read.
    fn load(&self, parser: &DateTimeParser) -> Result<Snapshot>;

    /// Replace the stored state with `tasks` and `tags`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn save(&self, parser: &DateTimeParser, tasks: &TaskList, tags: &TagList) -> Result<()>;
}
