//! `orgsync plan` - build the declaration graph and render it

use crate::Context;
use crate::builder;
use crate::directory::ConfigDirectory;
use crate::engine::RecordingEngine;
use crate::ui;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(ctx: &Context, data: &Path, json: bool) -> Result<()> {
    let config = super::load_data(data)?;
    let directory = ConfigDirectory::new(&config);
    let mut engine = RecordingEngine::new();

    builder::build(&config, &directory, &mut engine)?;
    let declarations = engine.into_declarations();

    if json {
        println!("{}", serde_json::to_string_pretty(&declarations)?);
        return Ok(());
    }

    ui::header("Plan");

    if declarations.is_empty() {
        ui::warn("No declarations - the loaded documents are empty");
        return Ok(());
    }

    if !ctx.quiet {
        for declaration in &declarations {
            let marker = if declaration.protect {
                " protected".yellow().to_string()
            } else {
                String::new()
            };
            println!(
                "  {} {}{}",
                format!("{:<17}", declaration.kind()).cyan(),
                declaration.key.bold(),
                marker
            );
        }
        println!();
    }

    if ctx.verbose > 0 {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for declaration in &declarations {
            match counts.iter_mut().find(|(kind, _)| *kind == declaration.kind()) {
                Some((_, count)) => *count += 1,
                None => counts.push((declaration.kind(), 1)),
            }
        }
        for (kind, count) in counts {
            ui::kv(kind, &count.to_string());
        }
        println!();
    }

    ui::success(&format!("{} declarations", declarations.len()));
    Ok(())
}
