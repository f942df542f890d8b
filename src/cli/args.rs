//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, info::InfoArgs, list::ListArgs, lookup::LookupArgs,
    makes::MakesArgs,
};
use crate::core::Config;

#[derive(Parser)]
#[command(name = "dtcq")]
#[command(author, version, about = "DTC lookup toolkit")]
#[command(
    long_about = "A command-line tool for querying diagnostic trouble code reference datasets: codes, code types, part types, system categories, and vehicle makes."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Data directory holding the JSON tables (default: ./data)
    #[arg(long, global = true, env = "DTCQ_DATA")]
    pub data: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Resolve `auto` through the config default, falling back to the
    /// text table.
    pub fn effective_format(&self, config: &Config) -> OutputFormat {
        match self.format {
            OutputFormat::Auto => config
                .default_format
                .as_deref()
                .and_then(OutputFormat::from_config_str)
                .unwrap_or(OutputFormat::Tsv),
            f => f,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one or more codes, optionally restricted to a make
    Lookup(LookupArgs),

    /// List the joined code table
    List(ListArgs),

    /// List vehicle makes
    Makes(MakesArgs),

    /// Show dataset build metadata from site.json
    Info(InfoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect (config default, else tsv)
    #[default]
    Auto,
    /// Text table (for terminals)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// HTML table fragment
    Html,
    /// Just code strings, one per line
    Id,
}

impl OutputFormat {
    /// Parse a config-file format name; unknown names are ignored.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Some(OutputFormat::Auto),
            "tsv" => Some(OutputFormat::Tsv),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            "md" => Some(OutputFormat::Md),
            "html" => Some(OutputFormat::Html),
            "id" => Some(OutputFormat::Id),
            _ => None,
        }
    }
}
