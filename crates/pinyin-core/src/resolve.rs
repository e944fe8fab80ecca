//! Character and string resolution against a `PinyinTable`.

use tracing::{debug, debug_span};

use crate::candidates::{CharCandidates, ResolvedString};
use crate::gate::{AvailabilityGate, SystemGate};
use crate::table::{Candidate, PinyinTable, LEGACY_PLACEHOLDER};

/// Maps characters and strings to ordered candidate readings.
///
/// The availability gate is consulted once, at construction. A resolver
/// without a table passes every input through verbatim.
#[derive(Debug, Clone, Copy)]
pub struct PinyinResolver<'t> {
    table: Option<&'t PinyinTable>,
}

impl<'t> PinyinResolver<'t> {
    pub fn new(table: &'t PinyinTable, gate: &impl AvailabilityGate) -> Self {
        Self {
            table: gate.is_available().then_some(table),
        }
    }

    /// Resolver that always uses `table`.
    pub fn with_table(table: &'t PinyinTable) -> Self {
        Self { table: Some(table) }
    }

    /// Resolver that passes everything through.
    pub fn unavailable() -> Self {
        Self { table: None }
    }

    pub fn is_available(&self) -> bool {
        self.table.is_some()
    }

    /// Candidate readings for one character. Never empty.
    pub fn resolve_char(&self, ch: char) -> CharCandidates {
        let Some(table) = self.table else {
            return CharCandidates::verbatim(ch);
        };
        if ch == LEGACY_PLACEHOLDER {
            return CharCandidates::verbatim(table.placeholder());
        }
        let Some(entry) = table.entry(ch) else {
            return CharCandidates::verbatim(ch);
        };
        let readings = entry
            .iter()
            .map(|c| match *c {
                Candidate::Syllable(idx) => table.syllable(idx).to_string(),
                Candidate::Verbatim => ch.to_string(),
            })
            .collect();
        CharCandidates::new(readings).unwrap_or_else(|| CharCandidates::verbatim(ch))
    }

    /// Candidate readings for every character of `s`, in order.
    ///
    /// Empty input, or an unavailable resolver, yields a single unit holding
    /// `s` unchanged.
    pub fn resolve_str(&self, s: &str) -> ResolvedString {
        if s.is_empty() || self.table.is_none() {
            return ResolvedString::passthrough(s);
        }
        let _span = debug_span!("resolve_str", chars = s.chars().count()).entered();
        let resolved = ResolvedString::from_units(s.chars().map(|ch| self.resolve_char(ch)).collect());
        debug!(
            units = resolved.len(),
            polyphones = resolved.polyphone_count(),
            "resolved"
        );
        resolved
    }
}

impl PinyinResolver<'static> {
    /// Resolver over the process-wide table, gated by the cached system probe.
    pub fn system() -> Self {
        let table = SystemGate
            .is_available()
            .then(PinyinTable::global)
            .flatten();
        Self { table }
    }
}
