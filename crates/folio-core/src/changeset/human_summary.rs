//! Human-readable summary renderer for project patches.

use crate::changeset::model::{PatchField, ProjectPatch};

/// Render a Markdown summary of a [`ProjectPatch`].
///
/// Informational only; the patch itself is the source of truth.
pub fn render_patch_summary(patch: &ProjectPatch) -> String {
    let mut out = String::new();

    out.push_str("## Project Changes\n\n");

    if patch.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str(&format!("**Changed fields**: {}\n\n", patch.len()));

    for field in patch.changed_fields() {
        let line = match field {
            PatchField::Role => text_line(field, patch.role.as_deref()),
            PatchField::GithubUrl => optional_line(field, &patch.github_url),
            PatchField::GithubBackendUrl => optional_line(field, &patch.github_backend_url),
            PatchField::LiveUrl => optional_line(field, &patch.live_url),
            PatchField::MainImage => optional_line(field, &patch.main_image),
            PatchField::IsPublished => match patch.is_published {
                Some(true) => format!("- **{}**: published\n", field),
                _ => format!("- **{}**: unpublished\n", field),
            },
            PatchField::TechStack => {
                let tags = patch.tech_stack.as_deref().unwrap_or_default();
                replaced_line(field, tags.len(), "items", &tags.join(", "))
            }
            PatchField::Images => {
                let images = patch.images.as_deref().unwrap_or_default();
                replaced_line(field, images.len(), "images", &images.join(", "))
            }
            PatchField::Translations => {
                let translations = patch.translations.as_deref().unwrap_or_default();
                let locales: Vec<&str> = translations.iter().map(|t| t.locale.as_str()).collect();
                replaced_line(field, locales.len(), "locales", &locales.join(", "))
            }
        };
        out.push_str(&line);
    }

    out
}

fn text_line(field: PatchField, value: Option<&str>) -> String {
    format!("- **{}**: `{}`\n", field, value.unwrap_or_default())
}

fn optional_line(field: PatchField, value: &Option<Option<String>>) -> String {
    match value {
        Some(Some(v)) => format!("- **{}**: `{}`\n", field, v),
        _ => format!("- **{}**: cleared\n", field),
    }
}

fn replaced_line(field: PatchField, count: usize, noun: &str, members: &str) -> String {
    if members.is_empty() {
        format!("- **{}** (replaced, {} {})\n", field, count, noun)
    } else {
        format!("- **{}** (replaced, {} {}): {}\n", field, count, noun, members)
    }
}
