//! Exhaustive expansion of polyphonic readings.
//!
//! `Combinations` walks the Cartesian product of all candidate lists as an
//! odometer: the canonical combination comes first and the last unit varies
//! fastest. The engine never caps the product; callers that feed long
//! polyphonic strings should check `combination_count` first.

use std::collections::HashSet;
use std::iter::FusedIterator;

use tracing::{debug, debug_span, warn};

use crate::candidates::{CharCandidates, ResolvedString};
use crate::format::first_letter;
use crate::settings::settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionMode {
    /// Whole candidate readings.
    Full,
    /// First letter of each candidate reading.
    FirstLetters,
}

/// Lazy iterator over every combination of one candidate per unit.
///
/// Yields uppercased strings. May yield duplicates when candidate lists
/// repeat a reading or (in first-letter mode) share initials; use
/// `expand_full` / `expand_first_letters` for deduplicated results.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    units: &'a [CharCandidates],
    mode: ExpansionMode,
    cursor: Option<Vec<usize>>,
}

impl<'a> Combinations<'a> {
    pub fn new(resolved: &'a ResolvedString, mode: ExpansionMode) -> Self {
        Self {
            units: resolved.units(),
            mode,
            cursor: Some(vec![0; resolved.len()]),
        }
    }

    pub fn full(resolved: &'a ResolvedString) -> Self {
        Self::new(resolved, ExpansionMode::Full)
    }

    pub fn first_letters(resolved: &'a ResolvedString) -> Self {
        Self::new(resolved, ExpansionMode::FirstLetters)
    }

    fn render(&self, cursor: &[usize]) -> String {
        let mut out = String::new();
        for (unit, &i) in self.units.iter().zip(cursor) {
            let reading = unit.as_slice()[i].as_str();
            match self.mode {
                ExpansionMode::Full => out.push_str(reading),
                ExpansionMode::FirstLetters => out.push_str(first_letter(reading)),
            }
        }
        out.to_uppercase()
    }

    /// Advance the odometer; `false` once every combination was produced.
    fn advance(&self, cursor: &mut [usize]) -> bool {
        for pos in (0..cursor.len()).rev() {
            cursor[pos] += 1;
            if cursor[pos] < self.units[pos].len() {
                return true;
            }
            cursor[pos] = 0;
        }
        false
    }
}

impl Iterator for Combinations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut cursor = self.cursor.take()?;
        let item = self.render(&cursor);
        if self.advance(&mut cursor) {
            self.cursor = Some(cursor);
        }
        Some(item)
    }
}

impl FusedIterator for Combinations<'_> {}

/// Number of combinations `Combinations` yields (product of list lengths).
/// Saturates at `usize::MAX`.
pub fn combination_count(resolved: &ResolvedString) -> usize {
    resolved
        .iter()
        .fold(1usize, |acc, u| acc.saturating_mul(u.len()))
}

fn collect_distinct(resolved: &ResolvedString, mode: ExpansionMode) -> Vec<String> {
    let count = combination_count(resolved);
    let threshold = settings().expansion.warn_threshold;
    if count > threshold {
        warn!(count, threshold, "large pinyin expansion");
    }
    let _span = debug_span!("expand", ?mode, count).entered();

    let mut seen = HashSet::new();
    let out: Vec<String> = Combinations::new(resolved, mode)
        .filter(|s| seen.insert(s.clone()))
        .collect();
    debug!(distinct = out.len(), "expanded");
    out
}

/// Every distinct uppercased full reading, canonical reading first.
pub fn expand_full(resolved: &ResolvedString) -> Vec<String> {
    collect_distinct(resolved, ExpansionMode::Full)
}

/// Every distinct uppercased first-letter acronym, canonical acronym first.
pub fn expand_first_letters(resolved: &ResolvedString) -> Vec<String> {
    collect_distinct(resolved, ExpansionMode::FirstLetters)
}

/// Search keys for `resolved`: all full readings followed by all acronyms,
/// without duplicates. The canonical full reading is always first.
pub fn search_keys(resolved: &ResolvedString) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = expand_full(resolved);
    keys.extend(expand_first_letters(resolved));
    keys.retain(|k| seen.insert(k.clone()));
    keys
}
