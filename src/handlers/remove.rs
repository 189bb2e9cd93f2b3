use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};
use crate::cli::Cli;
use crate::config::load_config;
use crate::remover::{remove, FsRemover, Outcome, RemoveOptions};

/// Merges config file defaults with the command line, then runs the removal
/// against stdout, stdin and the real filesystem.
pub fn handle_remove(cli: Cli) -> Result<Outcome> {
    let config = load_config(&cli.path, cli.config.as_deref())?;
    let section = config.remove;

    let options = RemoveOptions {
        recursive: cli.recursive || section.recursive,
        confirm: !(cli.non_interactive || section.non_interactive),
        dry_run: cli.dry_run,
        silent: cli.silent || section.silent,
        exclude: section.exclude_patterns()?,
    };
    debug!("Removing under {:?} with {:?}", cli.path, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let outcome = remove(&cli.path, &options, &mut out, &mut input, &mut FsRemover)
        .context("Failed to write to stdout")?;
    out.flush()?;
    Ok(outcome)
}
