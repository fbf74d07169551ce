use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::HOME_ENV;

#[derive(Parser, Debug)]
#[command(name = "chatterbox")]
#[command(about = "A line-oriented personal task tracker")]
#[command(long_about = "chatterbox - a personal task tracker

Type one command per line to manage todos, deadlines and events.
Tasks are saved after every change.

COMMANDS (inside the console):
  todo <text>                          Add a todo
  deadline <text> /by <date>           Add a deadline
  event <text> /from <date> /to <date> Add an event
  list                                 Show all tasks
  mark <n> | unmark <n> | delete <n>   Update a task by its list number
  find <text>                          Search descriptions
  tag /i <n> /t <name>                 Tag a task
  removetag /i <n> /t <name>           Untag a task
  findtag <name> | alltags             Browse tags
  bye                                  Quit

DATES:
  2-12-2019 1800, 02/12/2019 1800, 2/12/2019 (midnight).
  Anything else is kept as written.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Directory holding config and data files
    #[arg(long, global = true, env = HOME_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to config.yaml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log level implied by the `-v` count.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Output format for exported tasks.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive console (default)
    Repl,

    /// Run command lines without the console
    ///
    /// Each argument is one command line. Execution stops at `bye`.
    ///
    /// # Examples
    ///
    ///   chatterbox run "todo read book" "mark 1" list
    Run {
        /// Command lines, in order
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Print the saved task list
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Generate shell completions
    ///
    /// Example: chatterbox completions bash > ~/.bash_completion.d/chatterbox
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
