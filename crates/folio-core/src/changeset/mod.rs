//! Partial-update change sets for projects.
//!
//! Compares a persisted [`Project`](crate::model::Project) against an edit
//! form snapshot and produces the PATCH body for the update endpoint.
//!
//! ## Entry point
//!
//! ```
//! use folio_core::changeset::{diff, has_changes};
//! use folio_core::model::{Project, ProjectForm};
//!
//! let project = Project::new("p1", "Lead Dev");
//! let mut form = ProjectForm::from_project(&project);
//! assert!(!has_changes(&project, &form));
//!
//! form.role = "Staff Engineer".to_string();
//! let patch = diff(&project, &form);
//! assert_eq!(patch.role.as_deref(), Some("Staff Engineer"));
//! ```
//!
//! ## Guarantees
//!
//! - **Minimality**: unchanged top-level fields never appear in the patch.
//! - **Set semantics**: `techStack` and translation `features` ignore order.
//! - **Unset equivalence**: `None` and `""` are the same optional value.
//! - **Locale matching**: translations are matched by locale, not position;
//!   a locale missing from the form is "no edit".
//! - **Full replacement**: see [`FULL_REPLACEMENT_FIELDS`].
//! - **Purity**: inputs are borrowed immutably; no I/O.

pub mod compare;
pub mod engine;
pub mod human_summary;
pub mod io;
pub mod model;

pub use engine::{diff, has_changes};
pub use human_summary::render_patch_summary;
pub use model::{PatchField, ProjectPatch, FULL_REPLACEMENT_FIELDS};
