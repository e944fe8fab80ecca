//! Syllable and candidate tables.
//!
//! `PinyinTable` holds the ordered syllable list and, for every code point in
//! `U+4E00..=U+9FA5`, an ordered list of candidate readings (canonical first).
//! Candidates are stored densely: `offsets[i]..offsets[i + 1]` indexes into a
//! flat candidate array, an empty range meaning "no entry".
//!
//! Tables come from:
//! - TOML source (`parse_table_toml`), embedded by default via `include_str!`
//! - compiled binary (`PYTB`, see `io.rs`), loaded with `open` / `from_bytes`
//! - Unicode Unihan reading data (`parse_unihan_readings`), for building a
//!   complete table

mod config;
mod io;
mod unihan;
#[cfg(test)]
mod tests;

pub use config::{default_toml, parse_table_toml, DEFAULT_TABLE_TOML};
pub use unihan::parse_unihan_readings;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::settings::settings;

/// First code point covered by the candidate table.
pub const HAN_BASE: u32 = 0x4E00;
/// Last code point covered by the candidate table (inclusive).
pub const HAN_LAST: u32 = 0x9FA5;
/// Number of code points covered by the candidate table.
pub const TABLE_SIZE: usize = (HAN_LAST - HAN_BASE + 1) as usize;
/// Legacy zero placeholder (〇), resolved to the table's placeholder syllable.
pub const LEGACY_PLACEHOLDER: char = '\u{3007}';
/// Spelling of `Candidate::Verbatim` in the TOML source format.
pub const VERBATIM_MARKER: &str = "#";

/// Unified error type for table parsing and binary I/O.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected PYTB)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch (expected {expected:08x}, got {actual:08x})")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("invalid table data in {field}: {reason}")]
    Invalid { field: String, reason: String },

    #[error("pinyin table already initialized")]
    AlreadyInitialized,
}

impl TableError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TableError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// One candidate reading of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Candidate {
    /// Index into the syllable list.
    Syllable(u16),
    /// Keep the original character (no confirmed reading).
    Verbatim,
}

/// Offset of `ch` into the candidate table, or `None` outside `HAN_BASE..=HAN_LAST`.
pub fn table_offset(ch: char) -> Option<usize> {
    (ch as u32)
        .checked_sub(HAN_BASE)
        .map(|o| o as usize)
        .filter(|&o| o < TABLE_SIZE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinyinTable {
    syllables: Vec<String>,
    placeholder: u16,
    offsets: Vec<u32>,
    candidates: Vec<Candidate>,
}

static INSTANCE: OnceLock<Option<PinyinTable>> = OnceLock::new();

impl PinyinTable {
    /// Install a custom table before the first `global()` call.
    pub fn init_custom(table: PinyinTable) -> Result<(), TableError> {
        INSTANCE
            .set(Some(table))
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide table.
    ///
    /// Uses the custom table if one was installed, else `table.path` from the
    /// settings, else the embedded default. Returns `None` when loading fails;
    /// callers treat that as "romanization unavailable".
    pub fn global() -> Option<&'static PinyinTable> {
        INSTANCE.get_or_init(load_global).as_ref()
    }

    /// Build a table from per-character candidate lists.
    pub(crate) fn from_entries(
        syllables: Vec<String>,
        placeholder: u16,
        entries: &BTreeMap<char, Vec<Candidate>>,
    ) -> Result<Self, TableError> {
        let mut offsets = Vec::with_capacity(TABLE_SIZE + 1);
        let mut candidates = Vec::new();
        for offset in 0..TABLE_SIZE as u32 {
            offsets.push(candidates.len() as u32);
            if let Some(list) = char::from_u32(HAN_BASE + offset).and_then(|ch| entries.get(&ch)) {
                candidates.extend_from_slice(list);
            }
        }
        offsets.push(candidates.len() as u32);

        let table = Self {
            syllables,
            placeholder,
            offsets,
            candidates,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check the structural invariants every lookup relies on.
    pub(crate) fn validate(&self) -> Result<(), TableError> {
        if self.syllables.is_empty() {
            return Err(TableError::invalid("syllables", "must not be empty"));
        }
        if self.syllables.len() > u16::MAX as usize + 1 {
            return Err(TableError::invalid(
                "syllables",
                format!("too many syllables ({})", self.syllables.len()),
            ));
        }
        if let Some(pos) = self.syllables.iter().position(|s| s.is_empty()) {
            return Err(TableError::invalid(
                format!("syllables[{pos}]"),
                "empty syllable",
            ));
        }
        if self.placeholder as usize >= self.syllables.len() {
            return Err(TableError::invalid(
                "placeholder",
                format!("syllable index {} out of range", self.placeholder),
            ));
        }
        if self.offsets.len() != TABLE_SIZE + 1 {
            return Err(TableError::invalid(
                "offsets",
                format!("expected {} offsets, got {}", TABLE_SIZE + 1, self.offsets.len()),
            ));
        }
        if self.offsets[0] != 0 || self.offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(TableError::invalid("offsets", "must start at 0 and never decrease"));
        }
        if self.offsets[TABLE_SIZE] as usize != self.candidates.len() {
            return Err(TableError::invalid(
                "offsets",
                format!(
                    "last offset {} does not match {} candidates",
                    self.offsets[TABLE_SIZE],
                    self.candidates.len()
                ),
            ));
        }
        for (pos, candidate) in self.candidates.iter().enumerate() {
            if let Candidate::Syllable(idx) = *candidate {
                if idx as usize >= self.syllables.len() {
                    return Err(TableError::invalid(
                        format!("candidates[{pos}]"),
                        format!("syllable index {idx} out of range"),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Syllable string for a validated index.
    pub fn syllable(&self, index: u16) -> &str {
        &self.syllables[index as usize]
    }

    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    /// Reading of the legacy placeholder character.
    pub fn placeholder(&self) -> &str {
        self.syllable(self.placeholder)
    }

    /// Candidate list for `ch`, or `None` when the character is outside the
    /// table range or has no entry.
    pub fn entry(&self, ch: char) -> Option<&[Candidate]> {
        let offset = table_offset(ch)?;
        let start = self.offsets[offset] as usize;
        let end = self.offsets[offset + 1] as usize;
        (start < end).then(|| &self.candidates[start..end])
    }

    /// All characters with an entry, in code point order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &[Candidate])> + '_ {
        (0..TABLE_SIZE as u32).filter_map(move |offset| {
            let ch = char::from_u32(HAN_BASE + offset)?;
            self.entry(ch).map(|list| (ch, list))
        })
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Number of characters that have an entry.
    pub fn entry_count(&self) -> usize {
        self.offsets.windows(2).filter(|w| w[0] < w[1]).count()
    }

    /// Total number of stored candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Number of characters with more than one distinct candidate.
    pub fn polyphone_count(&self) -> usize {
        self.entries()
            .filter(|(_, list)| list.iter().any(|c| *c != list[0]))
            .count()
    }
}

fn load_global() -> Option<PinyinTable> {
    let result = match &settings().table.path {
        Some(path) => PinyinTable::open(path),
        None => parse_table_toml(DEFAULT_TABLE_TOML),
    };
    match result {
        Ok(table) => {
            debug!(
                syllables = table.syllable_count(),
                entries = table.entry_count(),
                "pinyin table loaded"
            );
            Some(table)
        }
        Err(e) => {
            warn!(error = %e, "pinyin table unavailable");
            None
        }
    }
}
