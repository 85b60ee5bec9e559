//! Check command
//!
//! Usage: folio check --original <FILE> --edited <FILE>
//!
//! Mirrors the submit-button gate: exits 0 when the edit has changes and 2
//! when submitting would be a no-op.

use clap::Args;
use folio_core::changeset::has_changes;
use std::path::PathBuf;

use super::{load_form, load_project, CommandResult, EXIT_NO_CHANGES, EXIT_OK};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Persisted project JSON
    #[arg(long)]
    pub original: PathBuf,

    /// Edit-form snapshot JSON
    #[arg(long)]
    pub edited: PathBuf,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: CheckArgs) -> CommandResult {
    let original = load_project(&args.original)?;
    let edited = load_form(&args.edited)?;

    let changed = has_changes(&original, &edited);
    if !args.quiet {
        println!("{}", if changed { "changed" } else { "unchanged" });
    }

    Ok(if changed { EXIT_OK } else { EXIT_NO_CHANGES })
}
