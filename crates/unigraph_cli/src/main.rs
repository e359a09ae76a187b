//! CLI entry point for the unigraph pipeline.
//!
//! # Responsibility
//! - Read the four sources, run the merge, write the unified document.
//! - Abort before writing anything when a source cannot be loaded.

use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use unigraph_core::{
    assemble, default_log_level, init_logging, load_associations, load_fieldmap, load_flashcards,
    load_organisations, SourceSet,
};

/// Merges the fieldmap dataset, organisation registry, association registry
/// and flashcard table into one JSON-LD knowledge-graph document.
#[derive(Debug, Parser)]
#[command(name = "unigraph", version)]
struct Args {
    /// Primary hierarchical dataset (JSON).
    #[arg(long, default_value = "data/fieldmap.json")]
    fieldmap: PathBuf,

    /// Organisation registry (JSON array).
    #[arg(long, default_value = "data/organisations.json")]
    organisations: PathBuf,

    /// Association registry export (delimited text).
    #[arg(long, default_value = "data/associations.csv")]
    associations: PathBuf,

    /// Flashcard table export (delimited text).
    #[arg(long, default_value = "data/flashcards.csv")]
    flashcards: PathBuf,

    /// Output path for the unified document.
    #[arg(long, short, default_value = "public/unigraph-unified.json")]
    output: PathBuf,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level).map_err(anyhow::Error::msg)?;

    let sources = SourceSet {
        fieldmap: load_fieldmap(&args.fieldmap)?,
        organisations: load_organisations(&args.organisations)?,
        associations: load_associations(&args.associations)?,
        flashcards: load_flashcards(&args.flashcards)?,
    };

    let date_modified = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let document = assemble(&sources, date_modified);

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory `{}`", parent.display()))?;
        }
    }
    let payload =
        serde_json::to_string_pretty(&document).context("serializing unified document")?;
    fs::write(&args.output, payload)
        .with_context(|| format!("writing `{}`", args.output.display()))?;
    info!(
        "event=run_complete module=cli output={}",
        args.output.display()
    );

    println!("unified graph written to {}", args.output.display());
    println!("  zones:      {}", document.statistics.zones);
    println!("  entities:   {}", document.statistics.entities);
    println!("  relations:  {}", document.statistics.relations);
    println!("  flashcards: {}", document.statistics.flashcards);
    Ok(())
}
