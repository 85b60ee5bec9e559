use serde::{Deserialize, Serialize};

/// One locale's text content for a project
///
/// `locale` is the matching key and never changes once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTranslation {
    pub locale: String,

    pub title: String,

    pub summary: String,

    pub description: String,

    /// Free-form architecture notes (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,

    /// Feature tags; order carries no meaning
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProjectTranslation {
    /// Create a translation with the required text fields and no features
    pub fn new(
        locale: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            title: title.into(),
            summary: summary.into(),
            description: description.into(),
            architecture: None,
            features: Vec::new(),
        }
    }

    /// An empty record for a locale, as a blank form tab would hold it
    pub fn blank(locale: impl Into<String>) -> Self {
        Self::new(locale, "", "", "")
    }

    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}
