use pinyin_core::{expand_first_letters, expand_full, ResolvedString, TableError};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PinyinError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<TableError> for PinyinError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::Io(_) => PinyinError::Io { msg: e.to_string() },
            _ => PinyinError::InvalidData { msg: e.to_string() },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// Candidate readings of one input unit, canonical first.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct PinyinCharCandidates {
    pub text: String,
    pub candidates: Vec<String>,
}

/// Every distinct reading and acronym of a string, canonical first.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct PinyinExpansion {
    pub full: Vec<String>,
    pub first_letters: Vec<String>,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(super) fn to_char_candidates(text: &str, resolved: &ResolvedString) -> Vec<PinyinCharCandidates> {
    let originals: Vec<String> = if resolved.len() == 1 {
        vec![text.to_string()]
    } else {
        text.chars().map(String::from).collect()
    };
    originals
        .into_iter()
        .zip(resolved)
        .map(|(text, unit)| PinyinCharCandidates {
            text,
            candidates: unit.as_slice().to_vec(),
        })
        .collect()
}

pub(super) fn to_expansion(resolved: &ResolvedString) -> PinyinExpansion {
    PinyinExpansion {
        full: expand_full(resolved),
        first_letters: expand_first_letters(resolved),
    }
}
