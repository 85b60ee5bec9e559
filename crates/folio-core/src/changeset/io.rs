//! Document boundary: decoding projects and form snapshots, encoding patches.

use serde::de::DeserializeOwned;

use crate::changeset::model::ProjectPatch;
use crate::errors::{FolioError, Result};
use crate::model::{Project, ProjectForm};

/// Decode a persisted project from JSON bytes.
///
/// # Errors
///
/// - `InvalidJson`: bytes are not UTF-8, not JSON, or not a project
pub fn parse_project_bytes(bytes: &[u8]) -> Result<Project> {
    parse_document(bytes, "project")
}

/// Decode an edit-form snapshot from JSON bytes.
///
/// # Errors
///
/// - `InvalidJson`: bytes are not UTF-8, not JSON, or not a form snapshot
pub fn parse_form_bytes(bytes: &[u8]) -> Result<ProjectForm> {
    parse_document(bytes, "form")
}

/// Encode a patch as the pretty-printed PATCH request body.
///
/// # Errors
///
/// - `Serialization`: JSON encoding failed
pub fn patch_to_json(patch: &ProjectPatch) -> Result<String> {
    Ok(serde_json::to_string_pretty(patch)?)
}

fn parse_document<T: DeserializeOwned>(bytes: &[u8], document: &str) -> Result<T> {
    let text = std::str::from_utf8(bytes).map_err(|e| FolioError::InvalidJson {
        document: document.to_string(),
        reason: format!("not valid UTF-8: {}", e),
    })?;

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| FolioError::InvalidJson {
            document: document.to_string(),
            reason: format!("not valid JSON: {}", e),
        })?;

    if !value.is_object() {
        return Err(FolioError::InvalidJson {
            document: document.to_string(),
            reason: "JSON root must be an object".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| FolioError::InvalidJson {
        document: document.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_rejects_non_utf8() {
        let err = parse_project_bytes(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, FolioError::InvalidJson { ref document, .. } if document == "project"));
    }

    #[test]
    fn test_parse_form_rejects_array_root() {
        let err = parse_form_bytes(b"[]").unwrap_err();
        assert_eq!(
            err,
            FolioError::InvalidJson {
                document: "form".to_string(),
                reason: "JSON root must be an object".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_form_requires_role() {
        let err = parse_form_bytes(br#"{"techStack": []}"#).unwrap_err();
        assert!(err.to_string().contains("role"));
    }

    #[test]
    fn test_parse_minimal_form() {
        let form = parse_form_bytes(br#"{"role": "Dev"}"#).unwrap();
        assert_eq!(form.role, "Dev");
        assert!(form.translations.is_empty());
    }

    #[test]
    fn test_patch_to_json_empty() {
        assert_eq!(patch_to_json(&ProjectPatch::default()).unwrap(), "{}");
    }
}
