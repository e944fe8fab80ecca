//! Pinyin engine: UniFFI bindings over `pinyin-core` for the host application.

uniffi::setup_scaffolding!();

mod api;
pub mod trace_init;

pub use api::{PinyinCharCandidates, PinyinConverter, PinyinError, PinyinExpansion};
pub use pinyin_core::{settings, table};
