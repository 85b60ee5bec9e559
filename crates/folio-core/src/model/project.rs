use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::translation::ProjectTranslation;

/// Project - a portfolio entry as persisted by the server
///
/// Read-only input to the change-set engine; nothing in this crate mutates a
/// `Project` except [`ProjectPatch::apply_to`](crate::changeset::ProjectPatch::apply_to),
/// which builds a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned identifier, immutable
    pub id: String,

    /// Role held on the project (e.g. "Lead Dev")
    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_backend_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    /// Reference to the primary image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    #[serde(default)]
    pub is_published: bool,

    /// Technology tags; order carries no meaning
    #[serde(default)]
    pub tech_stack: Vec<String>,

    /// Gallery image references in display order
    #[serde(default)]
    pub images: Vec<String>,

    /// At most one record per locale
    #[serde(default)]
    pub translations: Vec<ProjectTranslation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Create an unpublished project with no links, images or translations
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            github_url: None,
            github_backend_url: None,
            live_url: None,
            main_image: None,
            is_published: false,
            tech_stack: Vec::new(),
            images: Vec::new(),
            translations: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Look up the translation for a locale
    pub fn translation(&self, locale: &str) -> Option<&ProjectTranslation> {
        self.translations.iter().find(|t| t.locale == locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_camel_case_wire_shape() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "role": "Lead Dev",
            "githubUrl": "https://github.com/acme/app",
            "isPublished": true,
            "techStack": ["React", "Node"],
            "images": ["a.png"],
            "translations": [
                {"locale": "en", "title": "T", "summary": "S", "description": "D"}
            ],
            "createdAt": "2025-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(project.github_url.as_deref(), Some("https://github.com/acme/app"));
        assert_eq!(project.github_backend_url, None);
        assert!(project.is_published);
        assert_eq!(project.tech_stack, vec!["React", "Node"]);
        assert!(project.created_at.is_some());
        assert_eq!(project.translation("en").map(|t| t.title.as_str()), Some("T"));
        assert!(project.translation("ar").is_none());
    }
}
