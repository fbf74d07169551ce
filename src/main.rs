use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatterbox::cli::args::{Cli, Commands};
use chatterbox::cli::completions::generate_completions;
use chatterbox::cli::export::export;
use chatterbox::cli::Environment;
use chatterbox::repl::Repl;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Some(Commands::Completions { shell }) = &cli.command {
        print!("{}", generate_completions(*shell)?);
        return Ok(());
    }

    let env = Environment::resolve(&cli).context("failed to load configuration")?;
    env.config.general.color.apply();
    debug!(root = %env.paths.root.display(), "Resolved data directory");

    match cli.command {
        None | Some(Commands::Repl) => {
            env.paths.ensure_dirs()?;
            let session = env.open_session();
            let mut repl = Repl::new(
                session,
                Some(env.paths.history_file.clone()),
                env.config.general.bot_name.clone(),
            )
            .context("failed to start console")?;
            repl.run().context("console failed")?;
        },
        Some(Commands::Run { lines }) => {
            let mut session = env.open_session();
            for line in &lines {
                match session.respond(line) {
                    Some(text) => println!("{text}"),
                    None => break,
                }
            }
        },
        Some(Commands::Export { output }) => {
            let session = env.open_session();
            let text = export(session.tasks(), session.executor().parser(), output)?;
            println!("{text}");
        },
        Some(Commands::Completions { .. }) => {},
    }

    Ok(())
}
