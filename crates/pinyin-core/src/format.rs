//! Canonical (single-answer) output forms.
//!
//! Every function picks the first candidate of each unit and uppercases it.

use crate::candidates::ResolvedString;

/// Leading character of `s` as a slice; empty for an empty string.
pub(crate) fn first_letter(s: &str) -> &str {
    s.char_indices().nth(1).map_or(s, |(end, _)| &s[..end])
}

/// Concatenated canonical readings, uppercased.
pub fn full_pinyin(resolved: &ResolvedString) -> String {
    resolved
        .iter()
        .map(|u| u.canonical())
        .collect::<String>()
        .to_uppercase()
}

/// First letter of each canonical reading, uppercased.
pub fn first_letters(resolved: &ResolvedString) -> String {
    resolved
        .iter()
        .map(|u| first_letter(u.canonical()))
        .collect::<String>()
        .to_uppercase()
}

/// Uppercased canonical reading per unit, preserving unit boundaries.
///
/// Empty input resolves to one empty unit, so this returns `[""]` rather
/// than an empty vector.
pub fn split_pinyin(resolved: &ResolvedString) -> Vec<String> {
    resolved
        .iter()
        .map(|u| u.canonical().to_uppercase())
        .collect()
}
