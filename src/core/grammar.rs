//! Command grammar: keyword classification and parameter extraction.
//!
//! Lines look like:
//! - `todo read book`
//! - `deadline return book /by 2-12-2019 1800`
//! - `event meeting /from 2/2/2024 1400 /to 2/2/2024 1600`
//! - `tag /i 2 /t work`
//!
//! Extraction works on the trimmed raw line with its case preserved. Only
//! classification is case-insensitive.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ChatterboxError, Result};

/// The classified intent of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Bye,
    List,
    Mark,
    Unmark,
    Todo,
    Deadline,
    Event,
    Delete,
    FindTag,
    Find,
    Tag,
    AllTags,
    RemoveTag,
    Invalid,
}

/// Keywords in match order. `findtag` must precede `find`.
const KEYWORDS: &[(&str, CommandKind)] = &[
    ("bye", CommandKind::Bye),
    ("list", CommandKind::List),
    ("mark", CommandKind::Mark),
    ("unmark", CommandKind::Unmark),
    ("todo", CommandKind::Todo),
    ("deadline", CommandKind::Deadline),
    ("event", CommandKind::Event),
    ("delete", CommandKind::Delete),
    ("findtag", CommandKind::FindTag),
    ("find", CommandKind::Find),
    ("tag", CommandKind::Tag),
    ("alltags", CommandKind::AllTags),
    ("removetag", CommandKind::RemoveTag),
];

impl CommandKind {
    /// Whether executing this command can change the task or tag lists.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Mark
                | Self::Unmark
                | Self::Todo
                | Self::Deadline
                | Self::Event
                | Self::Delete
                | Self::Tag
                | Self::RemoveTag
        )
    }

    /// The keyword for this kind, or `None` for [`CommandKind::Invalid`].
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(keyword, _)| *keyword)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword().unwrap_or("invalid"))
    }
}

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").unwrap_or_else(|e| panic!("Invalid digits regex: {e}")));

const BY_MARKER: &str = "/by";
const FROM_MARKER: &str = "/from";
const TO_MARKER: &str = "/to";
const INDEX_MARKER: &str = "/i";
const TAG_MARKER: &str = "/t";

/// Classify a line by case-insensitive keyword prefix. First match wins.
#[must_use]
pub fn classify(line: &str) -> CommandKind {
    let text = line.trim().to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| text.starts_with(keyword))
        .map_or(CommandKind::Invalid, |(_, kind)| *kind)
}

/// Extract the trailing number of a `mark`/`unmark`/`delete` line.
///
/// Scans backwards from the end of the line and stops at the first
/// non-digit, so `mark3a-2` reads as `-2`.
///
/// # Errors
///
/// Returns `InvalidInput` if there is no trailing digit run, if a `-`
/// immediately precedes it, or if it does not fit in a `usize`.
pub fn extract_index(line: &str) -> Result<usize> {
    let line = line.trim();
    let digits_start = line
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);

    let Some(start) = digits_start else {
        return Err(ChatterboxError::InvalidInput("No number found".to_string()));
    };

    if line[..start].ends_with('-') {
        return Err(ChatterboxError::InvalidInput(
            "Negative number found".to_string(),
        ));
    }

    line[start..]
        .parse()
        .map_err(|_| ChatterboxError::InvalidInput("Number too large".to_string()))
}

/// Text after the `todo` keyword, trimmed. May be empty.
#[must_use]
pub fn extract_todo_description(line: &str) -> String {
    after(line.trim(), "todo".len()).trim().to_string()
}

/// Split a deadline line into `(description, date text)`.
///
/// # Errors
///
/// Returns `MissingParameter("Deadline date")` if `/by` is absent.
pub fn extract_deadline(line: &str) -> Result<(String, String)> {
    let line = line.trim();
    let by = line
        .find(BY_MARKER)
        .ok_or_else(|| ChatterboxError::MissingParameter("Deadline date".to_string()))?;

    let description = between(line, "deadline".len(), by);
    let due = after(line, by + BY_MARKER.len());

    Ok((description.trim().to_string(), due.trim().to_string()))
}

/// Split an event line into `(description, start text, end text)`.
///
/// # Errors
///
/// Returns `MissingParameter` naming the missing boundary, or `WrongOrder`
/// if `/to` comes before `/from`.
pub fn extract_event(line: &str) -> Result<(String, String, String)> {
    let line = line.trim();
    let from = line
        .find(FROM_MARKER)
        .ok_or_else(|| ChatterboxError::MissingParameter("Event Start Date".to_string()))?;
    let to = line
        .find(TO_MARKER)
        .ok_or_else(|| ChatterboxError::MissingParameter("Event End Date".to_string()))?;

    if to < from {
        return Err(ChatterboxError::WrongOrder(
            "/from must come before /to".to_string(),
        ));
    }

    let description = between(line, "event".len(), from);
    let start = between(line, from + FROM_MARKER.len(), to);
    let end = after(line, to + TO_MARKER.len());

    Ok((
        description.trim().to_string(),
        start.trim().to_string(),
        end.trim().to_string(),
    ))
}

/// Tag name after the `findtag` keyword, trimmed.
#[must_use]
pub fn extract_find_tag_name(line: &str) -> String {
    after(line.trim(), "findtag".len()).trim().to_string()
}

/// Keywords after the `find` keyword, untrimmed.
#[must_use]
pub fn extract_find_keywords(line: &str) -> String {
    after(line.trim(), "find".len()).to_string()
}

/// Parse `tag /i <index> /t <name>` into `(index, name)`.
///
/// # Errors
///
/// Returns `MissingParameter` if a marker, the index or the tag text is
/// missing or malformed.
pub fn extract_tag_association(line: &str) -> Result<(usize, String)> {
    let line = line.trim();
    let (Some(i), Some(t)) = (line.find(INDEX_MARKER), line.find(TAG_MARKER)) else {
        return Err(ChatterboxError::MissingParameter(
            "tag / index missing".to_string(),
        ));
    };

    let index = parse_marker_index(line, i, t, "missing index")?;
    let name = parse_tag_name(line, t)?;
    Ok((index, name))
}

/// Parse `removetag /i <index> /t <name>` into `(index, name)`.
///
/// # Errors
///
/// Same as [`extract_tag_association`], plus `WrongOrder` when `/i` comes
/// after `/t`.
pub fn extract_remove_tag_association(line: &str) -> Result<(usize, String)> {
    let line = line.trim();
    let (Some(i), Some(t)) = (line.find(INDEX_MARKER), line.find(TAG_MARKER)) else {
        return Err(ChatterboxError::MissingParameter(
            "Tag input missing".to_string(),
        ));
    };

    if i > t {
        return Err(ChatterboxError::WrongOrder(
            "/i must come before /t".to_string(),
        ));
    }

    let index = parse_marker_index(line, i, t, "missing tag index")?;
    let name = parse_tag_name(line, t)?;
    Ok((index, name))
}

fn parse_marker_index(line: &str, i: usize, t: usize, missing: &str) -> Result<usize> {
    let raw = between(line, i + INDEX_MARKER.len(), t).trim();
    if !DIGITS.is_match(raw) {
        return Err(ChatterboxError::MissingParameter(missing.to_string()));
    }
    raw.parse()
        .map_err(|_| ChatterboxError::InvalidInput("Number too large".to_string()))
}

fn parse_tag_name(line: &str, t: usize) -> Result<String> {
    let name = after(line, t + TAG_MARKER.len()).trim();
    if name.is_empty() {
        return Err(ChatterboxError::MissingParameter(
            "Tag text missing".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// `line[start..]`, or empty when `start` is past the end or not on a char
/// boundary.
fn after(line: &str, start: usize) -> &str {
    line.get(start..).unwrap_or("")
}

/// `line[start..end]`, or empty when the range is inverted or invalid.
fn between(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("")
}
