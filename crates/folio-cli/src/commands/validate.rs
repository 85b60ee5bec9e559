//! Validate command
//!
//! Usage: folio validate --edited <FILE>

use clap::Args;
use folio_core::errors::ExError;
use folio_core::rules::collect_violations;
use std::path::PathBuf;

use super::{load_form, CommandResult, EXIT_OK};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Edit-form snapshot JSON
    #[arg(long)]
    pub edited: PathBuf,
}

/// Print every violation; fail with the first one
pub fn execute(args: ValidateArgs) -> CommandResult {
    let form = load_form(&args.edited)?;
    let violations = collect_violations(&form);

    for violation in &violations {
        eprintln!("- {}", violation);
    }

    match violations.into_iter().next() {
        Some(first) => Err(ExError::from(first).with_op("validate")),
        None => {
            println!("valid");
            Ok(EXIT_OK)
        }
    }
}
