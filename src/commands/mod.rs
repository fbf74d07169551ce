//! Command execution.
//!
//! Each command kind maps to one function that applies the command to the
//! task and tag lists and returns the text to show the user.

mod tag;
mod task;

pub use tag::{all_tags, find_tag, remove_tag, tag};
pub use task::{add_deadline, add_event, add_todo, delete, find, list, mark, unmark};

use tracing::debug;

use crate::core::{classify, grammar, CommandKind, DateTimeParser};
use crate::error::{ChatterboxError, Result};
use crate::tasks::{TagList, TaskList};

/// The outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user.
    Message(String),
    /// End the interaction; nothing further to show.
    Exit,
}

impl Reply {
    /// The message text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(text) => Some(text),
            Self::Exit => None,
        }
    }
}

/// Applies command lines to a task list and tag list.
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    parser: DateTimeParser,
}

impl CommandExecutor {
    #[must_use]
    pub const fn new(parser: DateTimeParser) -> Self {
        Self { parser }
    }

    #[must_use]
    pub const fn parser(&self) -> &DateTimeParser {
        &self.parser
    }

    /// Classify and execute one line.
    ///
    /// # Errors
    ///
    /// Returns the grammar or model error for the command. The lists are
    /// left untouched when an error is returned.
    pub fn execute(&self, line: &str, tasks: &mut TaskList, tags: &mut TagList) -> Result<Reply> {
        let line = line.trim();
        let kind = classify(line);
        debug!(%kind, "Classified command");
        self.execute_kind(kind, line, tasks, tags)
    }

    /// Execute a line already classified as `kind`.
    ///
    /// # Errors
    ///
    /// Returns the grammar or model error for the command.
    pub fn execute_kind(
        &self,
        kind: CommandKind,
        line: &str,
        tasks: &mut TaskList,
        tags: &mut TagList,
    ) -> Result<Reply> {
        let parser = &self.parser;
        let text = match kind {
            CommandKind::Bye => return Ok(Reply::Exit),
            CommandKind::List => list(parser, tasks),
            CommandKind::Mark => mark(parser, tasks, grammar::extract_index(line)?)?,
            CommandKind::Unmark => unmark(parser, tasks, grammar::extract_index(line)?)?,
            CommandKind::Todo => add_todo(tasks, &grammar::extract_todo_description(line))?,
            CommandKind::Deadline => {
                let (description, due) = grammar::extract_deadline(line)?;
                add_deadline(parser, tasks, &description, &due)?
            },
            CommandKind::Event => {
                let (description, start, end) = grammar::extract_event(line)?;
                add_event(parser, tasks, &description, &start, &end)?
            },
            CommandKind::Delete => delete(parser, tasks, tags, grammar::extract_index(line)?)?,
            CommandKind::Find => find(parser, tasks, &grammar::extract_find_keywords(line)),
            CommandKind::FindTag => {
                find_tag(parser, tasks, tags, &grammar::extract_find_tag_name(line))
            },
            CommandKind::Tag => {
                let (index, name) = grammar::extract_tag_association(line)?;
                tag(parser, tasks, tags, index, &name)?
            },
            CommandKind::AllTags => all_tags(tags),
            CommandKind::RemoveTag => {
                let (index, name) = grammar::extract_remove_tag_association(line)?;
                remove_tag(parser, tasks, tags, index, &name)?
            },
            CommandKind::Invalid => return Err(ChatterboxError::UnknownCommand),
        };
        Ok(Reply::Message(text))
    }
}
