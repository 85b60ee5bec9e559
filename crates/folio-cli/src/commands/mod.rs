pub mod check;
pub mod diff;
pub mod snapshot;
pub mod validate;

use std::path::Path;

use folio_core::changeset::io::{parse_form_bytes, parse_project_bytes};
use folio_core::errors::{ExError, FolioError};
use folio_core::{Project, ProjectForm};

/// Exit code for a successful command
pub const EXIT_OK: i32 = 0;

/// Exit code for `check` when the edit changes nothing
pub const EXIT_NO_CHANGES: i32 = 2;

/// Every command returns a process exit code or a structured error
pub type CommandResult = Result<i32, ExError>;

fn read_document(path: &Path) -> Result<Vec<u8>, FolioError> {
    std::fs::read(path).map_err(|e| FolioError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

pub fn load_project(path: &Path) -> Result<Project, ExError> {
    let bytes = read_document(path)?;
    parse_project_bytes(&bytes)
        .map_err(|e| ExError::from(e).with_entity_id(path.display().to_string()))
}

pub fn load_form(path: &Path) -> Result<ProjectForm, ExError> {
    let bytes = read_document(path)?;
    parse_form_bytes(&bytes)
        .map_err(|e| ExError::from(e).with_entity_id(path.display().to_string()))
}

/// Write to `output` if given, otherwise to stdout
pub fn emit(output: Option<&Path>, content: &str) -> Result<(), ExError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| {
            ExError::from(FolioError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
