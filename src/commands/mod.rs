//! CLI command implementations

pub mod plan;
pub mod validate;

use anyhow::{Context as AnyhowContext, Result};
use log::info;
use orgspec::{Config, Parser};
use std::path::Path;

/// Load the desired-state documents from a file or directory root
///
/// A single file is loaded on its own; a directory is walked for every
/// `**/*.yaml` fragment beneath it.
pub fn load_data(data: &Path) -> Result<Config> {
    let metadata = std::fs::metadata(data)
        .with_context(|| format!("failed to stat {}", data.display()))?;

    let mut parser = Parser::new();
    if metadata.is_dir() {
        parser.parse_dir(data)?;
    } else {
        // A single file is contained by its parent directory.
        let basedir = data.parent().unwrap_or(data);
        parser.parse_file(data, basedir)?;
    }

    let config = parser.into_config();
    info!(
        "loaded {} roles, {} users, {} teams, {} repositories from {}",
        config.custom_roles.len(),
        config.users.len(),
        config.teams.len(),
        config.repositories.len(),
        data.display()
    );
    Ok(config)
}

// ============================================================================
// Tests
// ============================================================================
