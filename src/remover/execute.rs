// Executor

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use super::classify::is_empty;
use super::error::RemoveError;
use super::plan::DeletionPlan;

/// Deletes a single path. The executor never touches the filesystem except
/// through this trait and the emptiness re-check.
pub trait Remover {
    fn remove(&mut self, path: &Path) -> io::Result<()>;
}

impl<F> Remover for F
where
    F: FnMut(&Path) -> io::Result<()>,
{
    fn remove(&mut self, path: &Path) -> io::Result<()> {
        self(path)
    }
}

/// Removes files with `remove_file` and directories with `remove_dir`.
/// Never recursive: a non-empty directory fails instead of being wiped.
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove(&mut self, path: &Path) -> io::Result<()> {
        if fs::symlink_metadata(path)?.is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    }
}

#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub removed: usize,
    pub skipped_dirs: usize,
    pub errors: Vec<RemoveError>,
}

impl ExecutionReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn record(&mut self, path: &Path, result: io::Result<()>) {
        match result {
            Ok(()) => self.removed += 1,
            Err(error) => self.errors.push(RemoveError {
                path: path.to_path_buf(),
                error,
            }),
        }
    }
}

/// Renders as `[first error second error]`, the way pegomock has always
/// printed the batch.
pub struct ErrorList<'a>(pub &'a [RemoveError]);

impl fmt::Display for ErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}

/// Files first, in discovery order, then every candidate `matchers` directory
/// that is actually empty once its files are gone, deepest first so a nested
/// `matchers/matchers` is gone before its parent is checked. Failures never
/// stop the batch.
pub fn execute(plan: &DeletionPlan, remover: &mut dyn Remover) -> ExecutionReport {
    let mut report = ExecutionReport::default();

    for file in &plan.files {
        report.record(file, remover.remove(file));
    }

    for dir in &plan.candidates {
        if !is_empty(dir) {
            debug!("Leaving {}: not empty after removing its files", dir.display());
            report.skipped_dirs += 1;
            continue;
        }
        report.record(dir, remover.remove(dir));
    }

    report
}
