//! # Orgspec
//!
//! Desired-state model for a GitHub organization, loaded from declarative
//! YAML fragments.
//!
//! This crate provides functionality to:
//! - Discover fragment files under a root (single file or directory tree)
//! - Strictly validate each fragment against the schema
//! - Merge fragments into one [`Config`] aggregate by concatenation
//! - Deduplicate fragment loads within a session
//!
//! ## Example
//!
//! ```no_run
//! use orgspec::Parser;
//! use std::path::Path;
//!
//! // One parser per synchronization run
//! let mut parser = Parser::new();
//! parser.parse_dir(Path::new("/path/to/org-data"))?;
//!
//! let config = parser.into_config();
//! println!(
//!     "{} teams, {} repositories",
//!     config.teams.len(),
//!     config.repositories.len()
//! );
//! # Ok::<(), orgspec::Error>(())
//! ```

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
    BranchProtection, Collaborator, Config, CustomRole, Pages, RepoTeamRef, RepoTemplate,
    Repository, Team, User, UserTeamRef, slug,
};

use log::debug;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A loading session: accumulates fragments into one [`Config`]
///
/// The session owns the set of already-loaded paths, so fragments that
/// cross-reference each other are merged exactly once. Create one parser per
/// synchronization run and discard it afterwards.
#[derive(Debug, Default)]
pub struct Parser {
    config: Config,
    parsed: HashSet<PathBuf>,
}

impl Parser {
    /// Create a new, empty loading session
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one fragment file and merge it into the aggregate
    ///
    /// Loading the same path twice in one session is a no-op the second
    /// time. Fails with [`Error::PathViolation`] if `path` does not have
    /// `basedir` as a prefix, with [`Error::Io`] if the file cannot be
    /// read, and with [`Error::Schema`] if the content does not strictly
    /// match the schema.
    pub fn parse_file(&mut self, path: &Path, basedir: &Path) -> Result<()> {
        if self.parsed.contains(path) {
            debug!("skipping already-loaded fragment {}", path.display());
            return Ok(());
        }
        self.parsed.insert(path.to_path_buf());

        if !path.starts_with(basedir) {
            return Err(Error::PathViolation {
                path: path.to_path_buf(),
                basedir: basedir.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let fragment: Config =
            serde_yaml::from_str(&content).map_err(|source| Error::Schema {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("loaded fragment {}", path.display());
        self.config.merge(fragment);
        Ok(())
    }

    /// Discover and load every `**/*.yaml` fragment under `root`
    ///
    /// Traversal order is sorted by file name, so the merged aggregate is
    /// stable across runs on an unchanged filesystem. `root` doubles as the
    /// containment base for every discovered fragment.
    pub fn parse_dir(&mut self, root: &Path) -> Result<()> {
        let walker = WalkDir::new(root).sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            self.parse_file(entry.path(), root)?;
        }

        Ok(())
    }

    /// The aggregate merged so far
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the session and hand over the merged aggregate
    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Load a single fragment file in a one-shot session
pub fn parse_file(path: &Path) -> Result<Config> {
    let mut parser = Parser::new();
    parser.parse_file(path, path.parent().unwrap_or(path))?;
    Ok(parser.into_config())
}

/// Load every fragment under a directory in a one-shot session
pub fn parse_dir(path: &Path) -> Result<Config> {
    let mut parser = Parser::new();
    parser.parse_dir(path)?;
    Ok(parser.into_config())
}

// ============================================================================
// Tests
// ============================================================================
