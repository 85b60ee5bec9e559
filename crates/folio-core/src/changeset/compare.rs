//! Field comparators shared by every change-set computation.
//!
//! Each helper answers one question ("did this field change?") for one shape
//! of field, so entity-specific engines only decide which helper applies to
//! which field.

use std::collections::{BTreeMap, BTreeSet};

/// Collapse the two spellings of "unset" (`None` and `""`) into `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Compare two optional strings, treating `None` and `""` as the same value.
pub fn optional_changed(original: Option<&str>, edited: Option<&str>) -> bool {
    normalize_optional(original) != normalize_optional(edited)
}

/// Order-insensitive equality for tag lists.
///
/// Both sides are reduced to their distinct members; duplicates and ordering
/// never make two lists differ.
pub fn set_equal(a: &[String], b: &[String]) -> bool {
    let set_a: BTreeSet<&str> = a.iter().map(|s| s.as_str()).collect();
    let set_b: BTreeSet<&str> = b.iter().map(|s| s.as_str()).collect();
    set_a == set_b
}

/// A record addressed by its locale rather than its position in a list.
pub trait LocaleRecord {
    /// The matching key; unique within one list
    fn locale(&self) -> &str;

    /// True when any content field differs from `other`.
    ///
    /// Only called for two records with the same locale.
    fn content_differs(&self, other: &Self) -> bool;
}

/// Index a record list by locale.
///
/// If a locale appears twice the first record wins, matching the record a
/// positional form would show for that locale.
pub fn index_by_locale<T: LocaleRecord>(records: &[T]) -> BTreeMap<&str, &T> {
    let mut index = BTreeMap::new();
    for record in records {
        index.entry(record.locale()).or_insert(record);
    }
    index
}

/// Locales whose edited record is new or differs from the original record.
///
/// Locales present only in `original` are not reported: an absent edited
/// record means "no edit", never "delete".
pub fn changed_locales<'a, T: LocaleRecord>(
    original: &BTreeMap<&str, &T>,
    edited: &BTreeMap<&'a str, &T>,
) -> Vec<&'a str> {
    edited
        .iter()
        .filter(|(locale, record)| match original.get(*locale) {
            Some(before) => before.content_differs(record),
            None => true,
        })
        .map(|(locale, _)| *locale)
        .collect()
}

/// Short-circuiting form of [`changed_locales`].
pub fn any_locale_changed<T: LocaleRecord>(
    original: &BTreeMap<&str, &T>,
    edited: &BTreeMap<&str, &T>,
) -> bool {
    edited.iter().any(|(locale, record)| match original.get(*locale) {
        Some(before) => before.content_differs(record),
        None => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    struct Label {
        locale: &'static str,
        text: &'static str,
    }

    impl LocaleRecord for Label {
        fn locale(&self) -> &str {
            self.locale
        }

        fn content_differs(&self, other: &Self) -> bool {
            self.text != other.text
        }
    }

    #[test]
    fn test_optional_unset_spellings_are_equal() {
        assert!(!optional_changed(None, Some("")));
        assert!(!optional_changed(Some(""), None));
        assert!(!optional_changed(None, None));
    }

    #[test]
    fn test_optional_set_and_clear_are_changes() {
        assert!(optional_changed(None, Some("x")));
        assert!(optional_changed(Some(""), Some("x")));
        assert!(optional_changed(Some("x"), Some("")));
        assert!(optional_changed(Some("x"), Some("y")));
    }

    #[test]
    fn test_set_equal_ignores_order_and_duplicates() {
        assert!(set_equal(&strings(&["a", "b"]), &strings(&["b", "a"])));
        assert!(set_equal(&strings(&["a", "a", "b"]), &strings(&["b", "a"])));
        assert!(set_equal(&[], &[]));
    }

    #[test]
    fn test_set_equal_detects_membership_change() {
        assert!(!set_equal(&strings(&["a"]), &strings(&["a", "b"])));
        assert!(!set_equal(&strings(&["a", "b"]), &strings(&["a", "c"])));
    }

    #[test]
    fn test_index_by_locale_keeps_first_duplicate() {
        let records = [
            Label { locale: "en", text: "first" },
            Label { locale: "en", text: "second" },
        ];
        let index = index_by_locale(&records);
        assert_eq!(index.len(), 1);
        assert_eq!(index["en"].text, "first");
    }

    #[test]
    fn test_changed_locales_reports_new_and_modified_only() {
        let original = [
            Label { locale: "en", text: "a" },
            Label { locale: "fr", text: "c" },
        ];
        let edited = [
            Label { locale: "en", text: "a" },
            Label { locale: "ar", text: "b" },
        ];
        let before = index_by_locale(&original);
        let after = index_by_locale(&edited);
        assert_eq!(changed_locales(&before, &after), vec!["ar"]);
        assert!(any_locale_changed(&before, &after));
    }

    #[test]
    fn test_missing_edited_locale_is_not_a_change() {
        let original = [
            Label { locale: "en", text: "a" },
            Label { locale: "ar", text: "b" },
        ];
        let edited = [Label { locale: "en", text: "a" }];
        let before = index_by_locale(&original);
        let after = index_by_locale(&edited);
        assert!(changed_locales(&before, &after).is_empty());
        assert!(!any_locale_changed(&before, &after));
    }
}
