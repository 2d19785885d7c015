use avinfo::config::{OutputFormat, ReportView};
use avinfo::probe::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "avinfo")]
#[command(author, version, about = "Inspect media containers: format, streams, chapters and tags")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe media files and print one report per file
    Probe {
        /// Files to probe
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as compact JSON
        #[arg(long, conflicts_with = "pretty")]
        json: bool,

        /// Output as indented JSON
        #[arg(long)]
        pretty: bool,

        /// Shape of JSON output
        #[arg(long, value_enum)]
        view: Option<ReportView>,

        /// FFmpeg log level while probing (default: quiet)
        #[arg(long)]
        log_level: Option<LogLevel>,
    },

    /// Show the versions of the linked FFmpeg libraries
    Versions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },
}

impl Commands {
    /// Output format requested on the command line, if any.
    pub fn format_override(json: bool, pretty: bool) -> Option<OutputFormat> {
        if pretty {
            Some(OutputFormat::Pretty)
        } else if json {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }
}
