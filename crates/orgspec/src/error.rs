//! Error types for the orgspec crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering, loading, or merging fragments
#[derive(Error, Debug)]
pub enum Error {
    /// Fragment file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fragment path escapes the configured base directory
    #[error("{} is not contained in {}", .path.display(), .basedir.display())]
    PathViolation { path: PathBuf, basedir: PathBuf },

    /// Fragment failed strict schema validation (unknown field, wrong type)
    #[error("failed to parse {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Directory traversal failed while discovering fragments
    #[error("failed to discover config files: {source}")]
    Discover {
        #[from]
        source: walkdir::Error,
    },
}

/// Result type for orgspec operations
pub type Result<T> = std::result::Result<T, Error>;
