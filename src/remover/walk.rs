// Path walker

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use walkdir::{DirEntry, WalkDir};

use super::detect::{detect, Detection};
use super::error::{DetectError, TraversalError};

/// Only files with this extension are inspected.
pub const SOURCE_EXTENSION: &str = "go";

/// Base name of the directories pegomock fills with argument matchers.
pub const MATCHERS_DIR: &str = "matchers";

/// Everything a walk turned up.
#[derive(Debug, Default)]
pub struct Discovered {
    /// Generated files, in the order they were visited.
    pub files: Vec<PathBuf>,
    /// `matchers` directories that hold at least one generated file.
    pub matcher_dirs: BTreeSet<PathBuf>,
    /// Files that could not be inspected. They are left out of `files`.
    pub failures: Vec<DetectError>,
}

pub fn walk(root: &Path, recursive: bool, exclude: &[Pattern]) -> Result<Discovered, TraversalError> {
    // The root must be listable up front; anything below it is best effort.
    fs::read_dir(root).map_err(|error| TraversalError {
        path: root.to_path_buf(),
        error,
    })?;

    debug!("Walking {} (recursive: {})", root.display(), recursive);

    let mut walker = WalkDir::new(root).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut found = Discovered::default();
    let entries = walker
        .into_iter()
        .filter_entry(|entry| !is_excluded(root, entry, exclude));

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() || !is_source_file(entry.path()) {
            continue;
        }

        match detect(entry.path()) {
            Detection::Generated => {
                let path = entry.into_path();
                if let Some(parent) = matchers_parent(&path) {
                    found.matcher_dirs.insert(parent.to_path_buf());
                }
                found.files.push(path);
            }
            Detection::NotGenerated => {}
            Detection::Failed(e) => found.failures.push(e),
        }
    }

    Ok(found)
}

fn is_source_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(SOURCE_EXTENSION))
}

fn matchers_parent(path: &Path) -> Option<&Path> {
    path.parent()
        .filter(|parent| parent.file_name() == Some(OsStr::new(MATCHERS_DIR)))
}

fn is_excluded(root: &Path, entry: &DirEntry, exclude: &[Pattern]) -> bool {
    if exclude.is_empty() {
        return false;
    }
    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    exclude.iter().any(|pattern| pattern.matches_path(relative))
}
