//! Command implementations for the Concord CLI.

use std::fs;
use std::path::Path;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::session::Session;

/// Execute a CLI command.
pub fn execute_command(args: ConcordArgs) -> Result<()> {
    match &args.command {
        Command::Build(build_args) => build_index(build_args.clone(), &args),
        Command::Search(search_args) => search_document(search_args.clone(), &args),
        Command::Add(add_args) => add_word(add_args.clone(), &args),
        Command::Remove(remove_args) => remove_word(remove_args.clone(), &args),
        Command::Show(show_args) => show_table(show_args.clone(), &args),
    }
}

/// Load the document and vocabulary files and build a session.
fn load_session(source: &SourceArgs, cli_args: &ConcordArgs) -> Result<Session> {
    if cli_args.verbosity() > 1 {
        println!("Loading document from: {}", source.text.display());
        println!("Loading vocabulary from: {}", source.words.display());
    }

    let text = fs::read_to_string(&source.text)?;
    let vocabulary = load_vocabulary(&source.words)?;
    Session::build(text, &vocabulary, cli_args.index_config())
}

/// Read a vocabulary file: whitespace-separated words.
fn load_vocabulary(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)?;
    Ok(raw.split_whitespace().map(str::to_string).collect())
}

/// Build the index and write the table dump.
fn build_index(args: BuildArgs, cli_args: &ConcordArgs) -> Result<()> {
    let session = load_session(&args.source, cli_args)?;
    session.save_to(&args.output)?;

    output_build(
        &BuildResult {
            keywords: session.index().len(),
            output: args.output.display().to_string(),
        },
        cli_args,
    )
}

/// Locate a word in the document text.
fn search_document(args: SearchArgs, cli_args: &ConcordArgs) -> Result<()> {
    let session = load_session(&args.source, cli_args)?;
    let positions = session.search(&args.word);

    output_search(
        &SearchResult {
            word: args.word,
            positions,
        },
        cli_args,
    )
}

/// Append a word to the document, index it, and persist both.
fn add_word(args: AddArgs, cli_args: &ConcordArgs) -> Result<()> {
    let mut session = load_session(&args.source, cli_args)?;
    let (position, outcome) = session.add_word(&args.word);

    // The document file is rewritten in place with the appended word
    fs::write(&args.source.text, session.document().as_str())?;
    session.save_to(&args.output)?;

    output_add(
        &AddResult {
            word: args.word,
            position,
            dropped: outcome.is_table_full(),
        },
        cli_args,
    )
}

/// Remove a word from the index and rewrite the table dump.
fn remove_word(args: RemoveArgs, cli_args: &ConcordArgs) -> Result<()> {
    let mut session = load_session(&args.source, cli_args)?;
    let removed = session.remove_word(&args.word);
    session.save_to(&args.output)?;

    output_remove(
        &RemoveResult {
            word: args.word,
            removed,
        },
        cli_args,
    )
}

/// Show the live index table.
fn show_table(args: ShowArgs, cli_args: &ConcordArgs) -> Result<()> {
    let session = load_session(&args.source, cli_args)?;
    let entries = session
        .entries()
        .into_iter()
        .map(|(keyword, locations)| TableEntry {
            keyword: keyword.to_string(),
            locations: locations.to_vec(),
        })
        .collect();

    output_table(&TableResult { entries }, cli_args)
}
