//! Picking the best string for a requested locale.

use indexmap::IndexMap;

use crate::locale::{DEFAULT, ROOT};

/// Return the value in `strings` that best matches `locale`.
///
/// Candidates are tried in this order, stopping at the first hit:
///
/// 1. an exact match for `locale`
/// 2. the first entry with the same primary language subtag
/// 3. `en-US`
/// 4. the first entry whose language is English
/// 5. the root locale, `und`
/// 6. the first entry
///
/// An empty map yields an empty string. "First" always means insertion
/// order. Tags are compared as stored, without case folding.
pub fn best_match<'a>(strings: &'a IndexMap<String, String>, locale: &str) -> &'a str {
    if strings.is_empty() {
        return "";
    }
    if let Some(value) = strings.get(locale) {
        return value;
    }
    let language = primary_language(locale);
    if let Some(value) = first_with_language(strings, language) {
        return value;
    }
    if let Some(value) = strings.get(DEFAULT) {
        return value;
    }
    if let Some(value) = first_with_language(strings, "en") {
        return value;
    }
    if let Some(value) = strings.get(ROOT) {
        return value;
    }
    strings
        .first()
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

fn first_with_language<'a>(strings: &'a IndexMap<String, String>, language: &str) -> Option<&'a str> {
    strings
        .iter()
        .find(|(tag, _)| primary_language(tag) == language)
        .map(|(_, value)| value.as_str())
}

/// The language subtag: everything before the first `-` or `_`.
fn primary_language(tag: &str) -> &str {
    tag.split(|c: char| c == '-' || c == '_')
        .next()
        .unwrap_or(tag)
}
