pub mod classify;
pub mod confirm;
pub mod detect;
pub mod error;
pub mod execute;
pub mod plan;
pub mod walk;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::path::Path;

use glob::Pattern;
use log::{debug, info};

use self::confirm::{ask_for_confirmation, Mode};
use self::execute::{execute, ErrorList, ExecutionReport};
use self::plan::DeletionPlan;
use self::walk::walk;

pub use self::execute::{FsRemover, Remover};

#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    pub recursive: bool,
    pub confirm: bool,
    pub dry_run: bool,
    pub silent: bool,
    pub exclude: Vec<Pattern>,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    TraversalFailed,
    NothingToRemove,
    DryRun,
    Declined,
    Completed(ExecutionReport),
}

/// Finds pegomock-generated files under `root` and deletes them, together with
/// `matchers` directories that held nothing else.
///
/// Every result is reported as text on `out`. The returned `Err` only means
/// writing to `out` failed.
pub fn remove(
    root: &Path,
    options: &RemoveOptions,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    remover: &mut dyn Remover,
) -> io::Result<Outcome> {
    let found = match walk(root, options.recursive, &options.exclude) {
        Ok(found) => found,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(Outcome::TraversalFailed);
        }
    };

    for failure in &found.failures {
        writeln!(out, "{}", failure)?;
    }

    if found.files.is_empty() {
        writeln!(out, "No files to remove.")?;
        return Ok(Outcome::NothingToRemove);
    }

    let plan = DeletionPlan::new(found.files, &found.matcher_dirs);
    debug!(
        "Planned {} file(s), {} fully generated directory(ies), {} candidate(s)",
        plan.files.len(),
        plan.dirs.len(),
        plan.candidates.len()
    );
    let mode = Mode::select(options.dry_run, options.confirm, options.silent);

    if let Some(heading) = mode.heading() {
        writeln!(out, "{}", heading)?;
        writeln!(out, "{}", plan.render())?;
    }

    match mode {
        Mode::DryRun => return Ok(Outcome::DryRun),
        Mode::Confirm => match ask_for_confirmation("Continue?", input, out)? {
            Ok(true) => {}
            Ok(false) => return Ok(Outcome::Declined),
            Err(e) => {
                writeln!(out, "Could not get confirmation from StdIn {}", e)?;
                return Ok(Outcome::Declined);
            }
        },
        Mode::Announce | Mode::Silent => {}
    }

    let report = execute(&plan, remover);
    info!(
        "Removed {} path(s), {} failure(s), {} directory(ies) left in place",
        report.removed,
        report.errors.len(),
        report.skipped_dirs
    );

    if !report.is_clean() {
        writeln!(
            out,
            "There were some errors when trying to delete files: {}",
            ErrorList(&report.errors)
        )?;
    }

    Ok(Outcome::Completed(report))
}
