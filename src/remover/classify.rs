// Directory classification

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// True iff every entry in `dir` is one of the `known` generated files.
/// A directory that cannot be listed is never fully generated.
pub fn is_fully_generated(dir: &Path, known: &HashSet<PathBuf>) -> bool {
    check_fully_generated(dir, known).unwrap_or_else(|e| {
        debug!("Keeping {}: could not list entries: {}", dir.display(), e);
        false
    })
}

/// True iff `dir` can be listed and has no entries. Read errors count as "not empty".
pub fn is_empty(dir: &Path) -> bool {
    check_empty(dir).unwrap_or_else(|e| {
        debug!("Keeping {}: could not list entries: {}", dir.display(), e);
        false
    })
}

pub fn check_fully_generated(dir: &Path, known: &HashSet<PathBuf>) -> io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        let path = dir.join(entry?.file_name());
        if !known.contains(&path) {
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn check_empty(dir: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(dir)?.next().transpose()?.is_none())
}
