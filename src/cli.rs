use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quicklaunch")]
#[command(about = "Search and launch installed applications", long_about = None)]
pub struct Cli {
    /// Extra application scan roots (repeatable)
    #[arg(short = 'p', long = "path")]
    pub paths: Vec<PathBuf>,

    /// Print catalog/search details (stderr)
    #[arg(long, global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Rank applications for a query
    Search {
        query: String,
        /// Max results to return (default 50)
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// List the built catalog in base order
    List {
        #[arg(long)]
        json: bool,
    },

    /// Launch the best match for a query
    Launch { query: String },

    /// Register an app name as single-instance (reuse its window)
    Mark { name: String },

    /// Show catalog and registry counts
    Status {
        #[arg(long)]
        json: bool,
    },
}
