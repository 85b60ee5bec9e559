//! Project change-set computation.
//!
//! [`diff`] builds the PATCH body for an edit; [`has_changes`] answers the
//! same question without building it and is cheap enough to run on every
//! keystroke.

use std::time::Instant;

use crate::changeset::compare::{
    any_locale_changed, changed_locales, index_by_locale, normalize_optional, optional_changed,
    set_equal, LocaleRecord,
};
use crate::changeset::model::ProjectPatch;
use crate::model::{Project, ProjectForm, ProjectTranslation};
use crate::{log_op_end, log_op_start};

impl LocaleRecord for ProjectTranslation {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn content_differs(&self, other: &Self) -> bool {
        self.title != other.title
            || self.summary != other.summary
            || self.description != other.description
            || optional_changed(self.architecture.as_deref(), other.architecture.as_deref())
            || !set_equal(&self.features, &other.features)
    }
}

/// Report whether `edited` differs from `original` in any patchable field.
///
/// Equivalent to `!diff(original, edited).is_empty()`, but stops at the
/// first changed field and allocates nothing beyond the locale indexes.
pub fn has_changes(original: &Project, edited: &ProjectForm) -> bool {
    original.role != edited.role
        || optional_changed(original.github_url.as_deref(), edited.github_url.as_deref())
        || optional_changed(
            original.github_backend_url.as_deref(),
            edited.github_backend_url.as_deref(),
        )
        || optional_changed(original.live_url.as_deref(), edited.live_url.as_deref())
        || optional_changed(original.main_image.as_deref(), edited.main_image.as_deref())
        || original.is_published != edited.is_published
        || !set_equal(&original.tech_stack, &edited.tech_stack)
        || original.images != edited.images
        || translations_changed(&original.translations, &edited.translations)
}

/// Compute the minimal partial update turning `original` into `edited`.
///
/// Only differing fields are set. `tech_stack`, `images` and `translations`
/// carry their complete new value when set. Neither input is modified.
pub fn diff(original: &Project, edited: &ProjectForm) -> ProjectPatch {
    let started = Instant::now();
    log_op_start!("diff_project", project_id = original.id.as_str());

    let mut patch = ProjectPatch::default();

    if original.role != edited.role {
        patch.role = Some(edited.role.clone());
    }
    patch.github_url = optional_update(original.github_url.as_deref(), edited.github_url.as_deref());
    patch.github_backend_url = optional_update(
        original.github_backend_url.as_deref(),
        edited.github_backend_url.as_deref(),
    );
    patch.live_url = optional_update(original.live_url.as_deref(), edited.live_url.as_deref());
    patch.main_image = optional_update(original.main_image.as_deref(), edited.main_image.as_deref());
    if original.is_published != edited.is_published {
        patch.is_published = Some(edited.is_published);
    }
    if !set_equal(&original.tech_stack, &edited.tech_stack) {
        patch.tech_stack = Some(edited.tech_stack.clone());
    }
    // Order is meaningful for images: a drag-and-drop reorder is an edit.
    if original.images != edited.images {
        patch.images = Some(edited.images.clone());
    }

    let before = index_by_locale(&original.translations);
    let after = index_by_locale(&edited.translations);
    let locales = changed_locales(&before, &after);
    if !locales.is_empty() {
        patch.translations = Some(replacement_translations(
            &original.translations,
            &edited.translations,
        ));
    }

    let duration_ms = started.elapsed().as_millis() as u64;
    let changed_locale_list = locales.join(",");
    log_op_end!(
        "diff_project",
        duration_ms = duration_ms,
        changed_fields = patch.len(),
        changed_locales = changed_locale_list.as_str()
    );
    patch
}

fn translations_changed(original: &[ProjectTranslation], edited: &[ProjectTranslation]) -> bool {
    any_locale_changed(&index_by_locale(original), &index_by_locale(edited))
}

/// `None` when unchanged, otherwise the normalized edited value.
fn optional_update(original: Option<&str>, edited: Option<&str>) -> Option<Option<String>> {
    if optional_changed(original, edited) {
        Some(normalize_optional(edited).map(str::to_string))
    } else {
        None
    }
}

/// The complete translation list sent when any locale changed.
///
/// Every edited record is emitted in form order (first occurrence per
/// locale), followed by original records whose locale the form did not
/// carry, so the replacement never drops a locale.
fn replacement_translations(
    original: &[ProjectTranslation],
    edited: &[ProjectTranslation],
) -> Vec<ProjectTranslation> {
    let mut emitted: Vec<ProjectTranslation> = Vec::with_capacity(edited.len().max(original.len()));
    for record in edited.iter().chain(original.iter()) {
        if emitted.iter().all(|t| t.locale != record.locale) {
            emitted.push(normalize_translation(record));
        }
    }
    emitted
}

fn normalize_translation(record: &ProjectTranslation) -> ProjectTranslation {
    ProjectTranslation {
        architecture: normalize_optional(record.architecture.as_deref()).map(str::to_string),
        ..record.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        let mut project = Project::new("p1", "Lead Dev");
        project.tech_stack = vec!["React".to_string(), "Node".to_string()];
        project.translations = vec![
            ProjectTranslation::new("en", "T", "S", "D"),
            ProjectTranslation::new("ar", "ع", "م", "و"),
        ];
        project
    }

    #[test]
    fn test_replacement_appends_locales_missing_from_form() {
        let original = project();
        let edited = vec![ProjectTranslation::new("en", "T2", "S", "D")];
        let emitted = replacement_translations(&original.translations, &edited);
        let locales: Vec<&str> = emitted.iter().map(|t| t.locale.as_str()).collect();
        assert_eq!(locales, vec!["en", "ar"]);
        assert_eq!(emitted[0].title, "T2");
        assert_eq!(emitted[1], original.translations[1]);
    }

    #[test]
    fn test_replacement_normalizes_empty_architecture() {
        let edited = vec![ProjectTranslation::new("en", "T", "S", "D").with_architecture("")];
        let emitted = replacement_translations(&[], &edited);
        assert_eq!(emitted[0].architecture, None);
    }

    #[test]
    fn test_empty_architecture_matches_missing_architecture() {
        let a = ProjectTranslation::new("en", "T", "S", "D");
        let b = a.clone().with_architecture("");
        assert!(!a.content_differs(&b));
    }

    #[test]
    fn test_optional_update_emits_cleared_for_empty_string() {
        assert_eq!(optional_update(Some("x"), Some("")), Some(None));
        assert_eq!(optional_update(None, Some("")), None);
        assert_eq!(optional_update(None, Some("y")), Some(Some("y".to_string())));
    }
}
