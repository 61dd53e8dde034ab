//! Command line argument parsing for the Concord CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::index::CollisionPolicy;
use crate::index::builder::IndexConfig;

/// Concord - a keyword concordance indexer
#[derive(Parser, Debug, Clone)]
#[command(name = "concord")]
#[command(about = "A keyword concordance index with Boyer-Moore search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ConcordArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Collision-resolution policy for the index table
    #[arg(long, default_value = "chaining")]
    pub policy: PolicyArg,

    /// Compare probing keys through the Boyer-Moore matcher instead of
    /// direct string equality
    #[arg(long)]
    pub matcher_equality: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConcordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Index configuration derived from the global flags.
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            policy: self.policy.into(),
            matcher_equality: self.matcher_equality,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Collision-resolution policy options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum PolicyArg {
    /// Separate chaining, physical deletion
    Chaining,
    /// Linear probing with tombstones
    Probing,
}

impl From<PolicyArg> for CollisionPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Chaining => CollisionPolicy::Chaining,
            PolicyArg::Probing => CollisionPolicy::LinearProbe,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the keyword index and write the table dump
    Build(BuildArgs),

    /// Locate a word in the document text with Boyer-Moore
    Search(SearchArgs),

    /// Append a word to the document and index it
    Add(AddArgs),

    /// Remove a word from the index
    Remove(RemoveArgs),

    /// Show the index table
    Show(ShowArgs),
}

/// Document and vocabulary source files
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the document text file
    #[arg(short, long)]
    pub text: PathBuf,

    /// Path to the keyword vocabulary file (whitespace-separated words)
    #[arg(short, long)]
    pub words: PathBuf,
}

/// Arguments for building an index
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file for the table dump
    #[arg(short, long, default_value = "table.txt")]
    pub output: PathBuf,
}

/// Arguments for searching the document
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Word to search for
    pub word: String,
}

/// Arguments for appending a word
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Word to append and index
    pub word: String,

    /// Output file for the table dump
    #[arg(short, long, default_value = "table.txt")]
    pub output: PathBuf,
}

/// Arguments for removing a word
#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Word to remove from the index
    pub word: String,

    /// Output file for the table dump
    #[arg(short, long, default_value = "table.txt")]
    pub output: PathBuf,
}

/// Arguments for showing the table
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
