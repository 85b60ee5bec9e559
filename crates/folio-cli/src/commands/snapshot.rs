//! Snapshot command
//!
//! Usage: folio snapshot --project <FILE> [--output <FILE>]

use clap::Args;
use folio_core::errors::{ExError, FolioError};
use folio_core::ProjectForm;
use std::path::PathBuf;

use super::{emit, load_project, CommandResult, EXIT_OK};

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Persisted project JSON
    #[arg(long)]
    pub project: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: SnapshotArgs) -> CommandResult {
    let project = load_project(&args.project)?;
    let form = ProjectForm::from_project(&project);

    let rendered = serde_json::to_string_pretty(&form)
        .map_err(|e| ExError::from(FolioError::from(e)).with_op("snapshot"))?;
    emit(args.output.as_deref(), &rendered)?;
    Ok(EXIT_OK)
}
