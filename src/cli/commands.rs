use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tod", about = concat!("tod v", env!("CARGO_PKG_VERSION"), " - pick a task, read it, act on it"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ./tod.toml, else built-in sample tasks)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Stop the cursor at the ends of the list instead of wrapping
    #[arg(long, global = true)]
    pub no_wrap: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the task list and exit
    List(ListArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Show every task expanded, with its description
    #[arg(short, long)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
