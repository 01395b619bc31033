use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convtree")]
#[command(about = "Rebuild and render branching conversation trees from chat exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one conversation as a readable tree
    Show {
        /// Export file: a single conversation object or an array of them
        file: PathBuf,

        /// Which conversation to render when the file is an array
        #[arg(long)]
        index: Option<usize>,

        /// Print full content, depth-indented, instead of the chain view
        #[arg(long)]
        full: bool,

        /// Show node id prefixes in the chain view
        #[arg(long)]
        ids: bool,
    },

    /// List the conversations contained in an export file
    List {
        /// Export file: a single conversation object or an array of them
        file: PathBuf,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}
