//! Project content model
//!
//! [`Project`] is the persisted, server-known record; [`ProjectForm`] is the
//! in-progress edit held by a form session.

pub mod form;
pub mod project;
pub mod translation;

pub use form::ProjectForm;
pub use project::Project;
pub use translation::ProjectTranslation;
