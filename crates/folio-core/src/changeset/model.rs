//! Change-set output types.
//!
//! A [`ProjectPatch`] serializes to exactly the PATCH body the update endpoint
//! accepts: unchanged fields are absent, cleared optional fields are `null`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{Project, ProjectTranslation};

/// Top-level fields a patch can carry, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatchField {
    Role,
    GithubUrl,
    GithubBackendUrl,
    LiveUrl,
    MainImage,
    IsPublished,
    TechStack,
    Images,
    Translations,
}

/// Fields always emitted as a complete replacement value, never as an
/// element-level delta. The update endpoint overwrites these wholesale.
pub const FULL_REPLACEMENT_FIELDS: [PatchField; 3] = [
    PatchField::TechStack,
    PatchField::Images,
    PatchField::Translations,
];

impl PatchField {
    pub const ALL: [PatchField; 9] = [
        PatchField::Role,
        PatchField::GithubUrl,
        PatchField::GithubBackendUrl,
        PatchField::LiveUrl,
        PatchField::MainImage,
        PatchField::IsPublished,
        PatchField::TechStack,
        PatchField::Images,
        PatchField::Translations,
    ];

    /// JSON key of this field in the PATCH body
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchField::Role => "role",
            PatchField::GithubUrl => "githubUrl",
            PatchField::GithubBackendUrl => "githubBackendUrl",
            PatchField::LiveUrl => "liveUrl",
            PatchField::MainImage => "mainImage",
            PatchField::IsPublished => "isPublished",
            PatchField::TechStack => "techStack",
            PatchField::Images => "images",
            PatchField::Translations => "translations",
        }
    }

    pub fn is_full_replacement(&self) -> bool {
        FULL_REPLACEMENT_FIELDS.contains(self)
    }
}

impl std::fmt::Display for PatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial update for a project.
///
/// Optional string fields use a double `Option`: the outer level says whether
/// the field is part of the patch, the inner level distinguishes a new value
/// from "cleared".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub github_url: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub github_backend_url: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub live_url: Option<Option<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub main_image: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<ProjectTranslation>>,
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ProjectPatch {
    /// Fields carried by this patch, in wire order
    pub fn changed_fields(&self) -> Vec<PatchField> {
        PatchField::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }

    pub fn contains(&self, field: PatchField) -> bool {
        match field {
            PatchField::Role => self.role.is_some(),
            PatchField::GithubUrl => self.github_url.is_some(),
            PatchField::GithubBackendUrl => self.github_backend_url.is_some(),
            PatchField::LiveUrl => self.live_url.is_some(),
            PatchField::MainImage => self.main_image.is_some(),
            PatchField::IsPublished => self.is_published.is_some(),
            PatchField::TechStack => self.tech_stack.is_some(),
            PatchField::Images => self.images.is_some(),
            PatchField::Translations => self.translations.is_some(),
        }
    }

    pub fn len(&self) -> usize {
        self.changed_fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the project the server holds after applying this patch.
    ///
    /// Replacement fields overwrite wholesale; the identifier and timestamps
    /// are carried over untouched.
    pub fn apply_to(&self, project: &Project) -> Project {
        let mut next = project.clone();
        if let Some(role) = &self.role {
            next.role = role.clone();
        }
        if let Some(url) = &self.github_url {
            next.github_url = url.clone();
        }
        if let Some(url) = &self.github_backend_url {
            next.github_backend_url = url.clone();
        }
        if let Some(url) = &self.live_url {
            next.live_url = url.clone();
        }
        if let Some(image) = &self.main_image {
            next.main_image = image.clone();
        }
        if let Some(published) = self.is_published {
            next.is_published = published;
        }
        if let Some(tech_stack) = &self.tech_stack {
            next.tech_stack = tech_stack.clone();
        }
        if let Some(images) = &self.images {
            next.images = images.clone();
        }
        if let Some(translations) = &self.translations {
            next.translations = translations.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_patch_serializes_to_empty_object() {
        let patch = ProjectPatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({}));
    }

    #[test]
    fn test_cleared_field_serializes_as_null() {
        let patch = ProjectPatch {
            live_url: Some(None),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"liveUrl": null}));
        assert_eq!(patch.changed_fields(), vec![PatchField::LiveUrl]);
    }

    #[test]
    fn test_null_survives_deserialization_as_cleared() {
        let patch: ProjectPatch =
            serde_json::from_value(json!({"liveUrl": null, "role": "Dev"})).unwrap();
        assert_eq!(patch.live_url, Some(None));
        assert_eq!(patch.github_url, None);
        assert_eq!(patch.role.as_deref(), Some("Dev"));
    }

    #[test]
    fn test_full_replacement_policy() {
        let replaced: Vec<PatchField> = PatchField::ALL
            .into_iter()
            .filter(PatchField::is_full_replacement)
            .collect();
        assert_eq!(
            replaced,
            vec![PatchField::TechStack, PatchField::Images, PatchField::Translations]
        );
    }

    #[test]
    fn test_apply_to_keeps_identity() {
        let mut project = Project::new("p1", "Dev");
        project.live_url = Some("https://old.example".to_string());
        let patch = ProjectPatch {
            role: Some("Lead".to_string()),
            live_url: Some(None),
            images: Some(vec!["a.png".to_string()]),
            ..Default::default()
        };
        let next = patch.apply_to(&project);
        assert_eq!(next.id, "p1");
        assert_eq!(next.role, "Lead");
        assert_eq!(next.live_url, None);
        assert_eq!(next.images, vec!["a.png"]);
        assert_eq!(project.role, "Dev");
    }
}
