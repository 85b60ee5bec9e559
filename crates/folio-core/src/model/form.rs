use folio_core_types::schema::CANONICAL_LOCALES;
use serde::{Deserialize, Serialize};

use super::project::Project;
use super::translation::ProjectTranslation;

/// Edit-form snapshot of a project
///
/// Same fields as [`Project`] minus the identifier and server timestamps.
/// `translations` is positional: the form renders one tab per entry of
/// [`CANONICAL_LOCALES`], so index 0 holds `en` and index 1 holds `ar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub role: String,

    #[serde(default)]
    pub github_url: Option<String>,

    #[serde(default)]
    pub github_backend_url: Option<String>,

    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub main_image: Option<String>,

    #[serde(default)]
    pub is_published: bool,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub translations: Vec<ProjectTranslation>,
}

impl ProjectForm {
    /// Project a persisted entity into form shape with no edits applied
    ///
    /// Existing translations are laid out in canonical locale order, followed
    /// by any other locale in stored order. Missing canonical locales are not
    /// filled in, so the snapshot diffs as empty against its source.
    pub fn from_project(project: &Project) -> Self {
        let mut translations: Vec<ProjectTranslation> = CANONICAL_LOCALES
            .iter()
            .filter_map(|locale| project.translation(locale).cloned())
            .collect();
        translations.extend(
            project
                .translations
                .iter()
                .filter(|t| !CANONICAL_LOCALES.contains(&t.locale.as_str()))
                .cloned(),
        );

        Self {
            role: project.role.clone(),
            github_url: project.github_url.clone(),
            github_backend_url: project.github_backend_url.clone(),
            live_url: project.live_url.clone(),
            main_image: project.main_image.clone(),
            is_published: project.is_published,
            tech_stack: project.tech_stack.clone(),
            images: project.images.clone(),
            translations,
        }
    }

    /// Mutable access to the record for a locale, if the form holds one
    pub fn translation_mut(&mut self, locale: &str) -> Option<&mut ProjectTranslation> {
        self.translations.iter_mut().find(|t| t.locale == locale)
    }

    /// Replace the record for `translation.locale`, or append it
    pub fn with_translation(mut self, translation: ProjectTranslation) -> Self {
        match self.translation_mut(&translation.locale) {
            Some(existing) => *existing = translation,
            None => self.translations.push(translation),
        }
        self
    }
}
