use crate::errors::{FolioError, Result};
use crate::model::ProjectForm;

use super::invariants;

/// Validate an edit form before submit
///
/// Checks, in order:
///
/// 1. Role is not blank
/// 2. Every locale is a language tag
/// 3. No locale appears twice
/// 4. Every translation has a title, summary and description
///
/// # Errors
/// Returns the first violation. Use [`collect_violations`] to report all.
pub fn validate_form(form: &ProjectForm) -> Result<()> {
    match collect_violations(form).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every rule violation in the form, in check order
pub fn collect_violations(form: &ProjectForm) -> Vec<FolioError> {
    let mut violations = Vec::new();

    if invariants::role_is_blank(form) {
        violations.push(FolioError::RequiredFieldEmpty {
            field: "role".to_string(),
            locale: None,
        });
    }

    for locale in invariants::find_invalid_locales(&form.translations) {
        violations.push(FolioError::UnknownLocale { locale });
    }

    for locale in invariants::find_duplicate_locales(&form.translations) {
        violations.push(FolioError::DuplicateLocale { locale });
    }

    for (locale, field) in invariants::find_blank_required_fields(&form.translations) {
        violations.push(FolioError::RequiredFieldEmpty {
            field: field.to_string(),
            locale: Some(locale),
        });
    }

    violations
}
