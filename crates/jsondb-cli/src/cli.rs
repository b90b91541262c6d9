use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jsondb",
    about = "Read and write values inside JSON files by path",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with store settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the value at a path (the whole document if no path is given)
    Get(GetArgs),
    /// Store a value at a path, creating the file and missing objects
    Set(SetArgs),
    /// Report whether a path resolves; fails if it does not
    Exists(ExistsArgs),
}

#[derive(Args)]
pub struct GetArgs {
    pub file: PathBuf,
    #[arg(default_value = "")]
    pub path: String,
}

#[derive(Args)]
pub struct SetArgs {
    pub file: PathBuf,
    pub path: String,
    /// JSON text, or a plain string with --raw
    pub value: String,
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct ExistsArgs {
    pub file: PathBuf,
    pub path: String,
}
