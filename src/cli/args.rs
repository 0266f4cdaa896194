// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::{FilenameScheme, FormatOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to configuration file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (convert, preview, or init-config)
    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for the `[format]` section of the configuration
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct FormatArgs {
    /// How note file names start
    #[arg(long, value_enum, value_name = "SCHEME")]
    pub filename_scheme: Option<FilenameScheme>,

    /// Leave out the DOI mirror link
    #[arg(long)]
    pub no_mirror_links: bool,

    /// Leave out the reading progress checklist
    #[arg(long)]
    pub no_progress: bool,

    /// Keep whitespace around keywords and affiliations as exported
    #[arg(long)]
    pub no_trim: bool,

    /// Render the title as a link to the PDF followed by the year
    #[arg(long)]
    pub linked_title: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert export files into one Markdown note per paper
    Convert {
        /// Directories containing CSV exports (default: from config)
        #[arg(value_name = "SOURCE_DIR")]
        sources: Vec<PathBuf>,

        /// Directory notes are written to
        #[arg(short, long, value_name = "OUTPUT_DIR")]
        output: Option<PathBuf>,

        /// Descend into subdirectories of the source directories
        #[arg(short, long)]
        recursive: bool,

        /// Abort on the first malformed record or failed write
        #[arg(long)]
        fail_fast: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Print the notes of one export file without writing them
    Preview {
        /// CSV export file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only format the first N rows
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Write a configuration file with default values
    InitConfig {
        /// Target path (default: per-user config location)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

impl FormatArgs {
    /// Apply command line overrides on top of configured options
    pub fn apply(&self, mut options: FormatOptions) -> FormatOptions {
        if let Some(scheme) = self.filename_scheme {
            options.filename_scheme = scheme;
        }
        if self.no_mirror_links {
            options.mirror_links = false;
        }
        if self.no_progress {
            options.progress_marker = false;
        }
        if self.no_trim {
            options.trim_whitespace = false;
        }
        if self.linked_title {
            options.linked_title = true;
        }
        options
    }
}
