//! Han character to pinyin resolution for sorting and search keys.
//!
//! Input strings resolve per character into ordered candidate readings
//! (`resolve`), then either collapse to one canonical answer (`format`) or
//! expand into every polyphonic combination (`expand`).

pub mod candidates;
pub mod expand;
pub mod format;
pub mod gate;
pub mod resolve;
pub mod settings;
pub mod table;
#[cfg(test)]
mod tests;

pub use candidates::{CharCandidates, ResolvedString};
pub use expand::{
    combination_count, expand_first_letters, expand_full, search_keys, Combinations,
    ExpansionMode,
};
pub use format::{first_letters, full_pinyin, split_pinyin};
pub use gate::{romanization_available, AvailabilityGate, SettingsGate, SystemGate};
pub use resolve::PinyinResolver;
pub use table::{PinyinTable, TableError};
