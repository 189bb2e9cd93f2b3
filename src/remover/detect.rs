// Generated file detection

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::DetectError;

/// Header line pegomock writes at the top of every file it generates.
pub const GENERATED_MARKER: &str = "// Code generated by pegomock. DO NOT EDIT.";

/// Only this many leading bytes are inspected for the marker.
pub const HEADER_LEN: u64 = 50;

/// Result of inspecting one file.
#[derive(Debug)]
pub enum Detection {
    Generated,
    NotGenerated,
    Failed(DetectError),
}

pub fn detect(path: &Path) -> Detection {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(error) => {
            return Detection::Failed(DetectError::Open {
                path: path.to_path_buf(),
                error,
            })
        }
    };

    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    if let Err(error) = file.take(HEADER_LEN).read_to_end(&mut header) {
        return Detection::Failed(DetectError::Read {
            path: path.to_path_buf(),
            error,
        });
    }

    if String::from_utf8_lossy(&header).contains(GENERATED_MARKER) {
        Detection::Generated
    } else {
        Detection::NotGenerated
    }
}
