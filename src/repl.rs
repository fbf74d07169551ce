//! Interactive console: reads one command per line and prints the reply.

use std::path::PathBuf;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::session::{Exchange, Session};
use crate::storage::TaskStore;

const LINE_SEPARATOR: &str = "____________________________________________________________";

/// Greeting shown when the console starts.
#[must_use]
pub fn greeting(bot_name: &str) -> String {
    format!("{LINE_SEPARATOR}\n Hello! I'm {bot_name}\n What can I do for you?")
}

/// Farewell shown when the console exits.
#[must_use]
pub fn goodbye() -> String {
    format!("{LINE_SEPARATOR}\n Bye. Hope to see you again soon!\n{LINE_SEPARATOR}")
}

/// Readline loop over a [`Session`].
pub struct Repl<S: TaskStore> {
    session: Session<S>,
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    bot_name: String,
}

impl<S: TaskStore> Repl<S> {
    /// Create a console. History is loaded from `history_path` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor cannot be initialised.
    pub fn new(
        session: Session<S>,
        history_path: Option<PathBuf>,
        bot_name: impl Into<String>,
    ) -> rustyline::Result<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &history_path {
            // Missing history is normal on first run
            let _ = editor.load_history(path);
        }

        Ok(Self {
            session,
            editor,
            history_path,
            bot_name: bot_name.into(),
        })
    }

    /// Run until `bye`, Ctrl-D or a terminal error.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be updated.
    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("{}", greeting(&self.bot_name));

        loop {
            match self.editor.readline("> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line.as_str())?;

                    let exchange = self.session.handle_line(&line);
                    debug!(exit = exchange.is_exit(), "Handled line");

                    if exchange.is_exit() {
                        break;
                    }
                    self.print(&exchange);
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                },
                Err(ReadlineError::Eof) => {
                    break;
                },
                Err(err) => {
                    eprintln!("{}: {err:?}", "error".red().bold());
                    break;
                },
            }
        }

        self.save_history();

        println!("{}", goodbye());
        Ok(())
    }

    /// Write the input history, if a history file is configured. Returns
    /// whether the file was written; failures are logged.
    fn save_history(&mut self) -> bool {
        let Some(path) = &self.history_path else {
            return false;
        };
        match self.editor.save_history(path) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to save console history");
                false
            },
        }
    }

    fn print(&self, exchange: &Exchange) {
        let Some(text) = exchange.render() else {
            return;
        };
        println!("{LINE_SEPARATOR}");
        if exchange.outcome.is_err() || exchange.save_error.is_some() {
            println!("{}", text.red());
        } else {
            println!("{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandExecutor;
    use crate::error::ChatterboxError;
    use crate::storage::MockTaskStore;
    use tempfile::TempDir;

    #[test]
    fn test_greeting_names_bot() {
        let text = greeting("Duke");
        assert!(text.starts_with(LINE_SEPARATOR));
        assert!(text.contains("Hello! I'm Duke"));
        assert!(text.ends_with("What can I do for you?"));
    }

    fn repl_with_history(path: PathBuf) -> Repl<MockTaskStore> {
        let mut store = MockTaskStore::new();
        store
            .expect_load()
            .returning(|_| Err(ChatterboxError::NotFound("tasks.txt".to_string())));
        let session = Session::open(store, CommandExecutor::default());
        Repl::new(session, Some(path), "Chatterbox").unwrap()
    }

    #[test]
    fn test_history_save_failure_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let mut repl = repl_with_history(temp_dir.path().join("missing").join("history.txt"));

        assert!(!repl.save_history());
    }

    #[test]
    fn test_history_is_saved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.txt");
        let mut repl = repl_with_history(path.clone());
        repl.editor.add_history_entry("todo read book").unwrap();

        assert!(repl.save_history());
        assert!(path.exists());
    }

    #[test]
    fn test_goodbye_is_framed() {
        let text = goodbye();
        assert!(text.contains("Bye. Hope to see you again soon!"));
        assert!(text.ends_with(LINE_SEPARATOR));
    }
}
