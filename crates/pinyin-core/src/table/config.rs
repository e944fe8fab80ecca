use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{table_offset, Candidate, PinyinTable, TableError, VERBATIM_MARKER};

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLE_TOML
}

#[derive(Deserialize, Serialize)]
pub(super) struct TableSource {
    pub(super) placeholder: String,
    pub(super) syllables: Vec<String>,
    pub(super) chars: BTreeMap<String, Vec<String>>,
}

/// Parse and validate a table in TOML source format.
pub fn parse_table_toml(toml_str: &str) -> Result<PinyinTable, TableError> {
    let source: TableSource =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    build_table(source)
}

/// Validate a source table and build its dense form.
pub(super) fn build_table(source: TableSource) -> Result<PinyinTable, TableError> {
    if source.syllables.is_empty() {
        return Err(TableError::invalid("syllables", "must not be empty"));
    }

    let mut index: HashMap<&str, u16> = HashMap::with_capacity(source.syllables.len());
    for (pos, syllable) in source.syllables.iter().enumerate() {
        if syllable.is_empty()
            || !syllable
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == ':')
        {
            return Err(TableError::invalid(
                format!("syllables[{pos}]"),
                format!("'{syllable}' must be lowercase ASCII letters or ':'"),
            ));
        }
        let id = u16::try_from(pos)
            .map_err(|_| TableError::invalid("syllables", "more than 65536 syllables"))?;
        if index.insert(syllable, id).is_some() {
            return Err(TableError::invalid(
                format!("syllables[{pos}]"),
                format!("duplicate syllable '{syllable}'"),
            ));
        }
    }

    let placeholder = *index.get(source.placeholder.as_str()).ok_or_else(|| {
        TableError::invalid(
            "placeholder",
            format!("unknown syllable '{}'", source.placeholder),
        )
    })?;

    let mut entries = BTreeMap::new();
    for (key, readings) in &source.chars {
        let field = || format!("chars.{key}");
        let mut chars = key.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => return Err(TableError::invalid(field(), "key must be a single character")),
        };
        if table_offset(ch).is_none() {
            return Err(TableError::invalid(
                field(),
                format!("U+{:04X} is outside the table range", ch as u32),
            ));
        }
        if readings.is_empty() {
            return Err(TableError::invalid(field(), "candidate list is empty"));
        }
        let mut list = Vec::with_capacity(readings.len());
        for reading in readings {
            if reading == VERBATIM_MARKER {
                list.push(Candidate::Verbatim);
                continue;
            }
            let id = index.get(reading.as_str()).ok_or_else(|| {
                TableError::invalid(field(), format!("unknown syllable '{reading}'"))
            })?;
            list.push(Candidate::Syllable(*id));
        }
        entries.insert(ch, list);
    }

    PinyinTable::from_entries(source.syllables, placeholder, &entries)
}

impl PinyinTable {
    /// Export to the TOML source format accepted by `parse_table_toml`.
    pub fn to_toml(&self) -> Result<String, TableError> {
        let chars = self
            .entries()
            .map(|(ch, list)| {
                let readings = list
                    .iter()
                    .map(|c| match *c {
                        Candidate::Syllable(idx) => self.syllable(idx).to_string(),
                        Candidate::Verbatim => VERBATIM_MARKER.to_string(),
                    })
                    .collect();
                (ch.to_string(), readings)
            })
            .collect();
        let source = TableSource {
            placeholder: self.placeholder().to_string(),
            syllables: self.syllables().to_vec(),
            chars,
        };
        toml::to_string(&source).map_err(|e| TableError::Parse(e.to_string()))
    }
}
