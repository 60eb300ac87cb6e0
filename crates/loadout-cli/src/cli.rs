use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "loadout",
    about = "Loadout: clone-and-patch content merges for game server databases",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge a patch set into a host database
    Merge(MergeArgs),
    /// Load and validate a patch set
    Check(CheckArgs),
    /// Print the default configuration as TOML
    Config,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Host database: a directory tree of JSON files or a single JSON file
    #[arg(long)]
    pub host: PathBuf,
    /// Patch database directory (a mod's `database/` folder)
    #[arg(long)]
    pub patch: PathBuf,
    /// Merge configuration (TOML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Write the merged host database to this file
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Patch database directory
    #[arg(long)]
    pub patch: PathBuf,
}
