//! chatterbox - a line-oriented personal task tracker
//!
//! Commands are typed one per line. Each line is classified by its leading
//! keyword, executed against an in-memory task list and tag list, and saved
//! to plain files after every change.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod repl;
pub mod session;
pub mod storage;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use commands::{CommandExecutor, Reply};
pub use error::ChatterboxError;
pub use session::Session;
