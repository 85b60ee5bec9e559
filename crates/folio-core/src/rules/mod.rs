//! Form rules checked before a submit.
//!
//! The change-set engine assumes schema-valid input; these checks are what
//! the form layer runs to make that assumption hold.

pub mod invariants;
pub mod validation;

pub use validation::{collect_violations, validate_form};
