//! UniFFI export layer: type-safe host bindings for the pinyin engine.
//!
//! Top-level functions use the process-wide table and availability probe;
//! `PinyinConverter` wraps an explicitly opened table.

mod converter;
mod types;

pub use converter::PinyinConverter;
pub use types::{PinyinCharCandidates, PinyinError, PinyinExpansion};

use std::path::Path;

use pinyin_core::{
    first_letters, full_pinyin, romanization_available, search_keys, split_pinyin,
    PinyinResolver, PinyinTable,
};

use types::{to_char_candidates, to_expansion};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn pinyin_available() -> bool {
    romanization_available()
}

#[uniffi::export]
fn pinyin_full(text: String) -> String {
    full_pinyin(&PinyinResolver::system().resolve_str(&text))
}

#[uniffi::export]
fn pinyin_first_letters(text: String) -> String {
    first_letters(&PinyinResolver::system().resolve_str(&text))
}

#[uniffi::export]
fn pinyin_split(text: String) -> Vec<String> {
    split_pinyin(&PinyinResolver::system().resolve_str(&text))
}

#[uniffi::export]
fn pinyin_candidates(text: String) -> Vec<PinyinCharCandidates> {
    to_char_candidates(&text, &PinyinResolver::system().resolve_str(&text))
}

#[uniffi::export]
fn pinyin_expand(text: String) -> PinyinExpansion {
    to_expansion(&PinyinResolver::system().resolve_str(&text))
}

#[uniffi::export]
fn pinyin_search_keys(text: String) -> Vec<String> {
    search_keys(&PinyinResolver::system().resolve_str(&text))
}

/// Install a compiled table as the process-wide table. Must run before any
/// conversion call.
#[uniffi::export]
fn table_load(path: String) -> Result<(), PinyinError> {
    let table = PinyinTable::open(Path::new(&path)).map_err(|e| match PinyinError::from(e) {
        PinyinError::Io { msg } => PinyinError::Io {
            msg: format!("{path}: {msg}"),
        },
        other => other,
    })?;
    PinyinTable::init_custom(table)?;
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), PinyinError> {
    let content = std::fs::read_to_string(&path).map_err(|e| PinyinError::Io {
        msg: format!("{path}: {e}"),
    })?;
    pinyin_core::settings::init_custom(content)
        .map_err(|e| PinyinError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    pinyin_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn table_default_config() -> String {
    pinyin_core::table::DEFAULT_TABLE_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
