use std::path::Path;
use std::sync::Arc;

use pinyin_core::{
    first_letters, full_pinyin, search_keys, split_pinyin, PinyinResolver, PinyinTable,
    SettingsGate,
};

use super::types::{to_char_candidates, to_expansion};
use super::{PinyinCharCandidates, PinyinError, PinyinExpansion};

/// Converter bound to one compiled table, independent of the global one.
///
/// Still honors `romanization.enabled`: when disabled, every method passes
/// its input through.
#[derive(uniffi::Object)]
pub struct PinyinConverter {
    pub(crate) table: Arc<PinyinTable>,
}

impl PinyinConverter {
    fn resolver(&self) -> PinyinResolver<'_> {
        PinyinResolver::new(&self.table, &SettingsGate)
    }
}

#[uniffi::export]
impl PinyinConverter {
    #[uniffi::constructor]
    pub fn open(path: String) -> Result<Arc<Self>, PinyinError> {
        let table = PinyinTable::open(Path::new(&path))?;
        Ok(Arc::new(Self {
            table: Arc::new(table),
        }))
    }

    pub fn full(&self, text: String) -> String {
        full_pinyin(&self.resolver().resolve_str(&text))
    }

    pub fn first_letters(&self, text: String) -> String {
        first_letters(&self.resolver().resolve_str(&text))
    }

    pub fn split(&self, text: String) -> Vec<String> {
        split_pinyin(&self.resolver().resolve_str(&text))
    }

    pub fn candidates(&self, text: String) -> Vec<PinyinCharCandidates> {
        to_char_candidates(&text, &self.resolver().resolve_str(&text))
    }

    pub fn expand(&self, text: String) -> PinyinExpansion {
        to_expansion(&self.resolver().resolve_str(&text))
    }

    pub fn search_keys(&self, text: String) -> Vec<String> {
        search_keys(&self.resolver().resolve_str(&text))
    }
}
