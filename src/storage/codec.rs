//! Line format of the task file: `symbol | doneFlag | rendered task`.
//!
//! ```text
//! T | X | read book
//! D |   | return book ( by Dec 02 2019, 18:00 )
//! E |   | meeting ( from Feb 02 2024, 14:00 to Feb 02 2024, 16:00 )
//! ```
//!
//! Decoding splits the date annotation back off and re-parses each date, so
//! anything rendered in the display format comes back as a parsed value.
//! Raw event text containing ` to ` cannot be split unambiguously.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::DateTimeParser;
use crate::error::{ChatterboxError, Result};
use crate::tasks::{DateValue, Task};

const FIELD_SEPARATOR: &str = " | ";

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([TDE]) \| (X| ) \| (.*)$").unwrap_or_else(|e| panic!("Invalid line regex: {e}"))
});

static DEADLINE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*) \( by (.*) \)$").unwrap_or_else(|e| panic!("Invalid deadline regex: {e}"))
});

static EVENT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*) \( from (.*) to (.*) \)$")
        .unwrap_or_else(|e| panic!("Invalid event regex: {e}"))
});

/// Encode one task as a line, without the trailing newline.
#[must_use]
pub fn encode(task: &Task, parser: &DateTimeParser) -> String {
    [
        task.symbol().to_string(),
        task.done_flag().to_string(),
        task.display(parser),
    ]
    .join(FIELD_SEPARATOR)
}

/// Decode one line back into a task.
///
/// # Errors
///
/// Returns `Parse` if the line does not have the three fields, or if a
/// deadline/event line lacks its date annotation. Returns `NoInput` if the
/// description is empty.
pub fn decode(line: &str, parser: &DateTimeParser) -> Result<Task> {
    let caps = LINE_PATTERN
        .captures(line)
        .ok_or_else(|| ChatterboxError::Parse(format!("Malformed task line: {line:?}")))?;

    let symbol = &caps[1];
    let done = &caps[2] == "X";
    let rendered = &caps[3];

    let mut task = match symbol {
        "D" => {
            let parts = DEADLINE_SUFFIX
                .captures(rendered)
                .ok_or_else(|| missing_annotation("deadline", rendered))?;
            Task::deadline(&parts[1], DateValue::resolve(parser, &parts[2]))?
        },
        "E" => {
            let parts = EVENT_SUFFIX
                .captures(rendered)
                .ok_or_else(|| missing_annotation("event", rendered))?;
            Task::event(
                &parts[1],
                DateValue::resolve(parser, &parts[2]),
                DateValue::resolve(parser, &parts[3]),
            )?
        },
        _ => Task::todo(rendered)?,
    };

    task.set_done(done);
    Ok(task)
}

fn missing_annotation(kind: &str, rendered: &str) -> ChatterboxError {
    ChatterboxError::Parse(format!("No {kind} dates in {rendered:?}"))
}
