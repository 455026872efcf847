//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keepsake - store uploaded and remote media on local disk
#[derive(Parser, Debug)]
#[command(name = "keepsake")]
#[command(about = "Store uploaded and remote media in a date-partitioned upload tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the bundled defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a remote asset and print its public URL
    ///
    /// Prints the original URL if the download fails.
    Fetch {
        /// URL of the asset to store
        url: String,
    },

    /// Store a local file and print its descriptor as JSON
    Upload {
        /// File to store
        file: PathBuf,

        /// Declared MIME type (guessed from the file name when omitted)
        #[arg(long)]
        mimetype: Option<String>,
    },

    /// Delete a stored file by its on-disk path
    Remove {
        /// Path of the stored file
        path: String,
    },

    /// Print the effective configuration as TOML
    Config,
}
