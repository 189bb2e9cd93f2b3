//! Error types for the removal pipeline.

use std::{io, path::PathBuf};

/// The root path could not be listed. Fatal for the whole run.
#[derive(thiserror::Error, Debug)]
#[error("Could not get files in path {}", path.display())]
pub struct TraversalError {
    pub path: PathBuf,
    #[source]
    pub error: io::Error,
}

/// Failed to inspect a file header while looking for the generator marker.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("Could not open file {}. Error: {error}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("Could not read from file {}. Error: {error}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
}

/// Failed to delete a single path.
#[derive(thiserror::Error, Debug)]
#[error("remove {}: {error}", path.display())]
pub struct RemoveError {
    pub path: PathBuf,
    #[source]
    pub error: io::Error,
}

/// The confirmation answer could not be read.
#[derive(thiserror::Error, Debug)]
pub enum ConfirmError {
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Input closed before a full answer line arrived.
    #[error("EOF")]
    Eof,
}
