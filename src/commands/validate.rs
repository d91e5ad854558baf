//! `orgsync validate` - load, merge, and report on the documents

use crate::Context;
use crate::ui;
use anyhow::Result;
use std::path::Path;

pub fn run(ctx: &Context, data: &Path) -> Result<()> {
    let config = super::load_data(data)?;

    ui::header("Validation");

    if config.is_empty() {
        ui::warn("Documents loaded, but no resources are declared");
        return Ok(());
    }

    ui::kv("Custom roles", &config.custom_roles.len().to_string());
    ui::kv("Users", &config.users.len().to_string());
    ui::kv("Teams", &config.teams.len().to_string());
    ui::kv("Repositories", &config.repositories.len().to_string());

    if !ctx.quiet {
        ui::section("Repositories");
        for repo in &config.repositories {
            println!("  {}", repo.name);
            ui::dim(&format!(
                "  {} protections, {} collaborators, {} teams",
                repo.branches_protection.len(),
                repo.collaborators.len(),
                repo.teams.len()
            ));
        }
    }

    println!();
    ui::success("Documents are valid");
    Ok(())
}
