use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orgsync")]
#[command(version)]
#[command(about = "Declarative GitHub organization sync", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview the full set of resource declarations
    Plan(PlanArgs),

    /// Load and validate the declarative documents
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Org data directory, or a single fragment file
    #[arg(short, long, env = "ORGSYNC_DATA")]
    pub data: PathBuf,

    /// Emit the plan as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Org data directory, or a single fragment file
    #[arg(short, long, env = "ORGSYNC_DATA")]
    pub data: PathBuf,
}
