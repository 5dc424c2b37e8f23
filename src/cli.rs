use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "A line-oriented personal task assistant", long_about = None)]
pub struct Cli {
    /// Override the tasks file location
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Repl,

    /// Run a single command line and exit
    Exec {
        /// The command line, e.g. "todo Read book"
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
}
