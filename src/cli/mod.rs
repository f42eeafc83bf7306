//! Command-line interface definitions

pub mod setup;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "codesniff")]
#[command(about = "Detect the programming language of source text and check declared languages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the nearest .codesniff.toml)
    #[arg(long, global = true, env = "CODESNIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify files (or standard input) by language
    Detect {
        /// Files to classify; reads standard input when empty
        paths: Vec<PathBuf>,

        /// Extension hint, overriding each file's own extension
        #[arg(long)]
        ext: Option<String>,

        /// List every candidate instead of the top three
        #[arg(long)]
        all: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check that content matches a declared language
    Validate {
        /// Declared language (id, display name or alias)
        #[arg(short, long = "lang")]
        lang: String,

        /// File to check; reads standard input when omitted
        path: Option<PathBuf>,

        /// Extension hint, overriding the file's own extension
        #[arg(long)]
        ext: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Exit with a failure status on mismatch
        #[arg(long)]
        strict: bool,
    },

    /// List supported languages and their signature counts
    Languages {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Initialize a .codesniff.toml configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
