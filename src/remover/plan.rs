// Deletion planning

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use super::classify::is_fully_generated;

/// What a run will delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPlan {
    /// Generated files in discovery order. Deleted in this order.
    pub files: Vec<PathBuf>,
    /// `matchers` directories whose every entry is a generated file.
    pub dirs: Vec<PathBuf>,
    /// Every `matchers` directory that held a generated file, deepest first.
    /// Re-checked for emptiness once the files are gone.
    pub candidates: Vec<PathBuf>,
    /// Files and directories together, sorted and deduplicated, for display.
    pub listing: Vec<PathBuf>,
}

impl DeletionPlan {
    pub fn new(files: Vec<PathBuf>, candidates: &BTreeSet<PathBuf>) -> Self {
        let known: HashSet<PathBuf> = files.iter().cloned().collect();

        let dirs: Vec<PathBuf> = candidates
            .iter()
            .filter(|dir| is_fully_generated(dir, &known))
            .cloned()
            .collect();

        let mut listing: Vec<PathBuf> = files.iter().chain(dirs.iter()).cloned().collect();
        // Byte order of the path string, not component order.
        listing.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        listing.dedup();

        // Reverse byte order puts `a/matchers/matchers` ahead of `a/matchers`.
        let mut candidates: Vec<PathBuf> = candidates.iter().cloned().collect();
        candidates.sort_by(|a, b| b.as_os_str().cmp(a.as_os_str()));

        Self {
            files,
            dirs,
            candidates,
            listing,
        }
    }

    /// One path per line.
    pub fn render(&self) -> String {
        self.listing
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
