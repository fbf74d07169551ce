//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::{ChatterboxError, Result};

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `ChatterboxError::Parse` if the script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "chatterbox", &mut buf);
    String::from_utf8(buf).map_err(|e| ChatterboxError::Parse(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_binary() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("chatterbox"));
    }

    #[test]
    fn test_zsh_completions_list_subcommands() {
        let script = generate_completions(Shell::Zsh).unwrap();
        assert!(script.contains("export"));
        assert!(script.contains("completions"));
    }
}
