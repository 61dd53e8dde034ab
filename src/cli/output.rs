//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ConcordArgs, OutputFormat};
use crate::error::Result;

/// Result structure for index builds.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub keywords: usize,
    pub output: String,
}

/// Result structure for document searches.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub word: String,
    pub positions: Vec<usize>,
}

/// Result structure for word addition.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddResult {
    pub word: String,
    pub position: usize,
    pub dropped: bool,
}

/// Result structure for word removal.
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveResult {
    pub word: String,
    pub removed: bool,
}

/// A listed index table.
#[derive(Debug, Serialize, Deserialize)]
pub struct TableResult {
    pub entries: Vec<TableEntry>,
}

/// One live table entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct TableEntry {
    pub keyword: String,
    pub locations: Vec<usize>,
}

/// Output a build result.
pub fn output_build(result: &BuildResult, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("Indexed {} keywords", result.keywords);
            println!("Table written to {}", result.output);
            Ok(())
        }
    }
}

/// Output a search result.
pub fn output_search(result: &SearchResult, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if result.positions.is_empty() {
                println!("Word not found.");
            } else {
                let positions: Vec<String> =
                    result.positions.iter().map(|p| p.to_string()).collect();
                println!("Found at positions: {}", positions.join(" "));
            }
            Ok(())
        }
    }
}

/// Output an add result.
pub fn output_add(result: &AddResult, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("Word added at position {}", result.position);
            if result.dropped {
                println!("Index table is full; the word was not indexed.");
            }
            Ok(())
        }
    }
}

/// Output a remove result.
pub fn output_remove(result: &RemoveResult, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if result.removed {
                println!("Removed.");
            } else {
                println!("Not found.");
            }
            Ok(())
        }
    }
}

/// Output the index table.
pub fn output_table(result: &TableResult, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            for entry in &result.entries {
                let locations: Vec<String> =
                    entry.locations.iter().map(|l| l.to_string()).collect();
                println!("{}: {}", entry.keyword, locations.join(" "));
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ConcordArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
