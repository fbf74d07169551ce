//! Date and time parsing for deadline and event boundaries.
//!
//! Input is matched against a fixed, ordered table of formats. A miss is a
//! routine outcome: callers keep the user's raw text instead.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Display format for parsed dates, e.g. `Dec 02 2019, 18:00`.
pub const DISPLAY_FORMAT: &str = "%b %d %Y, %H:%M";

/// Ordered format tables used by [`DateTimeParser`].
///
/// chrono accepts one or two digits for `%d` and `%m` when parsing, so each
/// separator style covers both `02/12/2019` and `2/12/2019`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormats {
    /// Formats carrying a time of day, tried first.
    pub date_time: Vec<String>,
    /// Date-only formats, resolved to midnight.
    pub date_only: Vec<String>,
    /// Format used to render parsed values.
    pub display: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            date_time: vec![
                "%d-%m-%Y %H%M".to_string(),
                "%d/%m/%Y %H%M".to_string(),
                DISPLAY_FORMAT.to_string(),
            ],
            date_only: vec!["%d-%m-%Y".to_string(), "%d/%m/%Y".to_string()],
            display: DISPLAY_FORMAT.to_string(),
        }
    }
}

/// Parses user-entered dates against a [`DateFormats`] table.
#[derive(Debug, Clone, Default)]
pub struct DateTimeParser {
    formats: DateFormats,
}

impl DateTimeParser {
    /// Create a parser over the given format table.
    #[must_use]
    pub const fn new(formats: DateFormats) -> Self {
        Self { formats }
    }

    /// Parse `text` with the first matching format.
    ///
    /// Date-time formats are tried before date-only ones. Returns `None`
    /// when nothing matches.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();

        self.formats
            .date_time
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .or_else(|| {
                self.formats.date_only.iter().find_map(|fmt| {
                    NaiveDate::parse_from_str(text, fmt)
                        .ok()
                        .map(|date| date.and_time(NaiveTime::MIN))
                })
            })
    }

    /// Render a parsed value with the display format.
    #[must_use]
    pub fn format(&self, value: &NaiveDateTime) -> String {
        value.format(&self.formats.display).to_string()
    }
}
