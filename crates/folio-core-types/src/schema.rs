//! Canonical schema constants for structured logging and the locale convention
//!
//! Field names emitted by the `log_op_*` macros and the `diff` operation.
//! `tracing` takes field names as identifiers, so the macros spell them out;
//! these constants are what readers of captured events key on.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Change-set shape
pub const FIELD_PROJECT_ID: &str = "project_id";
pub const FIELD_CHANGED_FIELDS: &str = "changed_fields";
pub const FIELD_CHANGED_LOCALES: &str = "changed_locales";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Locales
pub const LOCALE_EN: &str = "en";
pub const LOCALE_AR: &str = "ar";

/// Positional convention of the edit form: index 0 is English, index 1 Arabic.
pub const CANONICAL_LOCALES: [&str; 2] = [LOCALE_EN, LOCALE_AR];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_canonical_locale_order() {
        assert_eq!(CANONICAL_LOCALES[0], LOCALE_EN);
        assert_eq!(CANONICAL_LOCALES[1], LOCALE_AR);
    }
}
