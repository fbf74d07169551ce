//! Task entities: the three task variants and their date fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::DateTimeParser;
use crate::error::{ChatterboxError, Result};

/// A date field: parsed when recognised, otherwise the user's text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// A recognised date-time.
    Parsed(NaiveDateTime),
    /// Unrecognised input, kept for display.
    Raw(String),
}

impl DateValue {
    /// Parse `text`, falling back to the raw text on no match.
    #[must_use]
    pub fn resolve(parser: &DateTimeParser, text: &str) -> Self {
        parser
            .parse(text)
            .map_or_else(|| Self::Raw(text.to_string()), Self::Parsed)
    }

    /// Render with the parser's display format, or echo raw text.
    #[must_use]
    pub fn render(&self, parser: &DateTimeParser) -> String {
        match self {
            Self::Parsed(value) => parser.format(value),
            Self::Raw(text) => text.clone(),
        }
    }

    /// Whether the value was recognised as a date.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

/// Variant-specific task data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskKind {
    Todo,
    Deadline { due: DateValue },
    Event { start: DateValue, end: DateValue },
}

/// A tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    done: bool,
    #[serde(flatten)]
    kind: TaskKind,
}

impl Task {
    /// Create a task of the given kind.
    ///
    /// # Errors
    ///
    /// Returns `NoInput` if the description is empty or only whitespace.
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ChatterboxError::NoInput);
        }
        Ok(Self {
            description,
            done: false,
            kind,
        })
    }

    /// Create a todo.
    ///
    /// # Errors
    ///
    /// Returns `NoInput` if the description is empty.
    pub fn todo(description: impl Into<String>) -> Result<Self> {
        Self::new(description, TaskKind::Todo)
    }

    /// Create a deadline due at `due`.
    ///
    /// # Errors
    ///
    /// Returns `NoInput` if the description is empty.
    pub fn deadline(description: impl Into<String>, due: DateValue) -> Result<Self> {
        Self::new(description, TaskKind::Deadline { due })
    }

    /// Create an event spanning `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `NoInput` if the description is empty.
    pub fn event(description: impl Into<String>, start: DateValue, end: DateValue) -> Result<Self> {
        Self::new(description, TaskKind::Event { start, end })
    }

    /// The description as entered, without any date annotation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// One-letter variant tag: `T`, `D` or `E`.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// `X` when done, a space otherwise.
    #[must_use]
    pub const fn done_flag(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// Description followed by the variant's date annotation.
    ///
    /// - `read book`
    /// - `return book ( by Dec 02 2019, 18:00 )`
    /// - `meeting ( from Feb 02 2024, 14:00 to Feb 02 2024, 16:00 )`
    #[must_use]
    pub fn display(&self, parser: &DateTimeParser) -> String {
        match &self.kind {
            TaskKind::Todo => self.description.clone(),
            TaskKind::Deadline { due } => {
                format!("{} ( by {} )", self.description, due.render(parser))
            },
            TaskKind::Event { start, end } => format!(
                "{} ( from {} to {} )",
                self.description,
                start.render(parser),
                end.render(parser)
            ),
        }
    }

    /// `[S][X] display`, as shown in listings.
    #[must_use]
    pub fn status_line(&self, parser: &DateTimeParser) -> String {
        format!(
            "[{}][{}] {}",
            self.symbol(),
            self.done_flag(),
            self.display(parser)
        )
    }
}
