use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// COS Explorer - browse the object tree of a PDF-style document
#[derive(Parser, Debug)]
#[command(name = "cos-explorer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the object tree of a document
    Tree(TreeArgs),

    /// Launch the interactive object tree explorer
    Tui(TuiArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Document file (JSON object dump)
    pub file: PathBuf,

    /// Maximum depth to expand
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Don't prefix rows with icon tags
    #[arg(long)]
    pub no_icons: bool,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Document file (JSON object dump)
    pub file: PathBuf,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}
