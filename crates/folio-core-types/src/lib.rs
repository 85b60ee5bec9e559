//! Core types shared across Folio crates
//!
//! - **Correlation types**: RequestId, TraceId, RequestContext
//! - **Schema constants**: canonical log field keys, event names and locales

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
