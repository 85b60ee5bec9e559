use std::collections::BTreeSet;

use crate::model::{ProjectForm, ProjectTranslation};

/// Locales that appear more than once, each reported once, in form order
pub fn find_duplicate_locales(translations: &[ProjectTranslation]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for t in translations {
        if !seen.insert(t.locale.as_str()) && !duplicates.contains(&t.locale) {
            duplicates.push(t.locale.clone());
        }
    }
    duplicates
}

/// Locales that are not plausible language tags (`en`, `ar`, `pt-BR`)
pub fn find_invalid_locales(translations: &[ProjectTranslation]) -> Vec<String> {
    translations
        .iter()
        .filter(|t| !is_language_tag(&t.locale))
        .map(|t| t.locale.clone())
        .collect()
}

/// `(locale, field)` pairs whose required text is empty or whitespace-only
pub fn find_blank_required_fields(
    translations: &[ProjectTranslation],
) -> Vec<(String, &'static str)> {
    let mut blanks = Vec::new();
    for t in translations {
        for (field, value) in [
            ("title", &t.title),
            ("summary", &t.summary),
            ("description", &t.description),
        ] {
            if value.trim().is_empty() {
                blanks.push((t.locale.clone(), field));
            }
        }
    }
    blanks
}

pub fn role_is_blank(form: &ProjectForm) -> bool {
    form.role.trim().is_empty()
}

fn is_language_tag(locale: &str) -> bool {
    let mut subtags = locale.split('-');
    let primary_ok = subtags
        .next()
        .map(|p| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_lowercase()))
        .unwrap_or(false);
    primary_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}
