//! Resolved candidate lists.

use std::slice;

/// Ordered candidate readings for one input character. Never empty; the
/// first element is the canonical reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCandidates(Vec<String>);

impl CharCandidates {
    /// Returns `None` for an empty list.
    pub fn new(candidates: Vec<String>) -> Option<Self> {
        (!candidates.is_empty()).then_some(Self(candidates))
    }

    /// Single-element list holding `text` unchanged.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self(vec![text.into()])
    }

    pub fn canonical(&self) -> &str {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    /// True when the list holds more than one distinct reading.
    pub fn is_polyphone(&self) -> bool {
        self.0.iter().any(|c| *c != self.0[0])
    }
}

impl<'a> IntoIterator for &'a CharCandidates {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Per-character candidate lists for a whole input string, in input order.
///
/// One unit per character, or a single unit holding the whole input when
/// romanization is unavailable or the input is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedString {
    units: Vec<CharCandidates>,
}

impl ResolvedString {
    pub fn from_units(units: Vec<CharCandidates>) -> Self {
        Self { units }
    }

    /// Whole-input pass-through: one unit containing `text` unchanged.
    pub fn passthrough(text: &str) -> Self {
        Self {
            units: vec![CharCandidates::verbatim(text)],
        }
    }

    pub fn units(&self) -> &[CharCandidates] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, CharCandidates> {
        self.units.iter()
    }

    pub fn polyphone_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_polyphone()).count()
    }
}

impl<'a> IntoIterator for &'a ResolvedString {
    type Item = &'a CharCandidates;
    type IntoIter = slice::Iter<'a, CharCandidates>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
