//! Folio CLI
//!
//! Compute, inspect and validate project change sets from JSON documents.

use std::time::Instant;

use clap::{Parser, Subcommand};
use folio_core::logging_facility::{init, Profile};
use folio_core::log_op_error;
use folio_core_types::{RequestContext, TraceId};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Folio - project change sets for the portfolio admin", long_about = None)]
struct Cli {
    /// Emit JSON structured logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    /// Session id stamped on errors and log events of this invocation
    #[arg(long, global = true, value_name = "ID")]
    trace_id: Option<TraceId>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the PATCH body for an edit
    Diff(commands::diff::DiffArgs),
    /// Exit 0 when an edit has changes, 2 when it has none
    Check(commands::check::CheckArgs),
    /// Print the no-edit form snapshot of a project
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Validate an edit form
    Validate(commands::validate::ValidateArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let ctx = RequestContext::new(cli.trace_id.clone());
    let started = Instant::now();
    tracing::debug!(
        request_id = ctx.request_id.as_str(),
        trace_id = ctx.trace_id_str(),
        "folio cli invoked"
    );

    let (op, result) = match cli.command {
        Commands::Diff(args) => ("cli_diff", commands::diff::execute(args)),
        Commands::Check(args) => ("cli_check", commands::check::execute(args)),
        Commands::Snapshot(args) => ("cli_snapshot", commands::snapshot::execute(args)),
        Commands::Validate(args) => ("cli_validate", commands::validate::execute(args)),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let mut err = e.with_request_id(ctx.request_id.clone());
            if let Some(trace_id) = &ctx.trace_id {
                err = err.with_trace_id(trace_id.clone());
            }
            log_op_error!(
                op,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64,
                request_id = ctx.request_id.as_str(),
                trace_id = ctx.trace_id_str()
            );
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
