//! Core parsing for chatterbox.
//!
//! This module holds the command grammar and the date parser shared by the
//! executor and the storage layer.

mod datetime;
pub mod grammar;

pub use datetime::{DateFormats, DateTimeParser, DISPLAY_FORMAT};
pub use grammar::{classify, CommandKind};
