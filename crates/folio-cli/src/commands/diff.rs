//! Diff command
//!
//! Usage: folio diff --original <FILE> --edited <FILE> [--summary] [--output <FILE>]

use clap::Args;
use folio_core::changeset::io::patch_to_json;
use folio_core::changeset::{diff, render_patch_summary};
use folio_core::errors::ExError;
use std::path::PathBuf;

use super::{emit, load_form, load_project, CommandResult, EXIT_OK};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Persisted project JSON
    #[arg(long)]
    pub original: PathBuf,

    /// Edit-form snapshot JSON
    #[arg(long)]
    pub edited: PathBuf,

    /// Print a Markdown summary instead of the PATCH body
    #[arg(long)]
    pub summary: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> CommandResult {
    let original = load_project(&args.original)?;
    let edited = load_form(&args.edited)?;

    let patch = diff(&original, &edited);
    let rendered = if args.summary {
        render_patch_summary(&patch)
    } else {
        patch_to_json(&patch).map_err(|e| ExError::from(e).with_op("diff"))?
    };

    emit(args.output.as_deref(), &rendered)?;
    Ok(EXIT_OK)
}
