//! Folio Core - project content model and partial-update change sets
//!
//! This crate provides:
//! - The persisted project entity and its locale-keyed translations
//! - The positional edit-form snapshot
//! - The change-set engine computing minimal PATCH payloads
//! - Form validation rules applied before a submit
//! - Structured errors and the logging facility

pub mod changeset;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use changeset::{diff, has_changes, ProjectPatch};
pub use errors::{ExError, ExErrorKind, FolioError, Result};
pub use model::{Project, ProjectForm, ProjectTranslation};
