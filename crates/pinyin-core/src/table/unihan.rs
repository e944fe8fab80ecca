//! Import from the Unicode Unihan reading data (`Unihan_Readings.txt`).
//!
//! Line format: `U+4E2D<TAB>kMandarin<TAB>zhōng`. Readings come from
//! `kMandarin` (most common first), then `kHanyuPinyin`, `kXHC1983` and
//! `kTGHZ2013` (`location[,location]:reading[,reading]` groups). Tone marks
//! are stripped and `ü` becomes `u:`; readings that differ only in tone stay
//! as separate candidates.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, warn};

use super::config::{build_table, TableSource};
use super::{table_offset, PinyinTable, TableError};

const FIELD_COUNT: usize = 4;

/// Unihan fields read, in candidate priority order.
const READING_FIELDS: [&str; FIELD_COUNT] =
    ["kMandarin", "kHanyuPinyin", "kXHC1983", "kTGHZ2013"];

/// Build a table from Unihan reading data. `placeholder` is added to the
/// syllable list if no character uses it.
pub fn parse_unihan_readings(text: &str, placeholder: &str) -> Result<PinyinTable, TableError> {
    // char -> toned readings per field, in field priority order
    let mut toned: HashMap<char, [Vec<&str>; FIELD_COUNT]> = HashMap::new();

    for (lineno, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(code), Some(field), Some(value)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(TableError::Parse(format!(
                "line {}: expected 3 tab-separated fields",
                lineno + 1
            )));
        };
        let Some(rank) = READING_FIELDS.iter().position(|f| *f == field) else {
            continue;
        };
        let ch = parse_code_point(code).ok_or_else(|| {
            TableError::Parse(format!("line {}: bad code point '{code}'", lineno + 1))
        })?;
        if table_offset(ch).is_none() {
            continue;
        }
        let slot = &mut toned.entry(ch).or_default()[rank];
        if rank == 0 {
            slot.extend(value.split(' ').filter(|r| !r.is_empty()));
        } else {
            for group in value.split(' ') {
                let readings = group.rsplit_once(':').map_or(group, |(_, r)| r);
                slot.extend(readings.split(',').filter(|r| !r.is_empty()));
            }
        }
    }

    let mut syllables = BTreeSet::new();
    let mut chars = BTreeMap::new();
    let mut skipped = 0usize;
    for (ch, per_field) in toned {
        let mut seen = Vec::new();
        for reading in per_field.iter().flatten() {
            if !seen.contains(reading) {
                seen.push(*reading);
            }
        }
        let mut readings = Vec::with_capacity(seen.len());
        for reading in seen {
            match strip_tones(reading) {
                Some(plain) => readings.push(plain),
                None => {
                    skipped += 1;
                    warn!(ch = %ch, reading, "unrecognized pinyin reading skipped");
                }
            }
        }
        if readings.is_empty() {
            continue;
        }
        syllables.extend(readings.iter().cloned());
        chars.insert(ch.to_string(), readings);
    }
    syllables.insert(placeholder.to_string());
    debug!(
        chars = chars.len(),
        syllables = syllables.len(),
        skipped,
        "unihan readings imported"
    );

    build_table(TableSource {
        placeholder: placeholder.to_string(),
        syllables: syllables.into_iter().collect(),
        chars,
    })
}

fn parse_code_point(code: &str) -> Option<char> {
    let hex = code.strip_prefix("U+")?;
    char::from_u32(u32::from_str_radix(hex, 16).ok()?)
}

/// Toneless ASCII spelling of a reading (`lǜ` -> `lu:`), or `None` if it
/// contains anything that is not a pinyin letter.
fn strip_tones(reading: &str) -> Option<String> {
    let mut out = String::with_capacity(reading.len() + 1);
    for c in reading.chars() {
        match c {
            'a'..='z' => out.push(c),
            'A'..='Z' => out.push(c.to_ascii_lowercase()),
            'ā' | 'á' | 'ǎ' | 'à' => out.push('a'),
            'ē' | 'é' | 'ě' | 'è' | 'ê' | 'ế' | 'ề' => out.push('e'),
            'ī' | 'í' | 'ǐ' | 'ì' => out.push('i'),
            'ō' | 'ó' | 'ǒ' | 'ò' => out.push('o'),
            'ū' | 'ú' | 'ǔ' | 'ù' => out.push('u'),
            'ü' | 'ǖ' | 'ǘ' | 'ǚ' | 'ǜ' => out.push_str("u:"),
            'ḿ' => out.push('m'),
            'ń' | 'ň' | 'ǹ' => out.push('n'),
            // combining tone marks
            '\u{0300}' | '\u{0301}' | '\u{0304}' | '\u{030C}' => {}
            _ => return None,
        }
    }
    (!out.is_empty()).then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{parse_table_toml, Candidate};

    const SAMPLE: &str = "\
# Unihan_Readings.txt excerpt
U+4E2D\tkDefinition\tcentral; center, middle
U+4E2D\tkHanyuPinyin\t10019.020:zhōng,zhòng
U+4E2D\tkMandarin\tzhōng
U+56FD\tkMandarin\tguó
U+884C\tkHanyuPinyin\t73450.010:xíng,háng,hàng,héng
U+884C\tkMandarin\txíng
U+7EFF\tkMandarin\tlǜ
U+7EFF\tkXHC1983\t0763.120:lǜ 0766.020:lù
U+3400\tkMandarin\tqiū
";

    #[test]
    fn strips_tones_and_umlaut() {
        assert_eq!(strip_tones("zhōng").as_deref(), Some("zhong"));
        assert_eq!(strip_tones("lüè").as_deref(), Some("lu:e"));
        assert_eq!(strip_tones("ǹg").as_deref(), Some("ng"));
        assert_eq!(strip_tones("m\u{0304}").as_deref(), Some("m"));
        assert_eq!(strip_tones("x2"), None);
        assert_eq!(strip_tones(""), None);
    }

    #[test]
    fn mandarin_reading_is_canonical() {
        let table = parse_unihan_readings(SAMPLE, "ling").unwrap();
        let readings = |ch: char| -> Vec<String> {
            table
                .entry(ch)
                .unwrap()
                .iter()
                .map(|c| match *c {
                    Candidate::Syllable(idx) => table.syllable(idx).to_string(),
                    Candidate::Verbatim => ch.to_string(),
                })
                .collect()
        };
        assert_eq!(readings('中'), ["zhong", "zhong"]);
        assert_eq!(readings('国'), ["guo"]);
        assert_eq!(readings('行'), ["xing", "hang", "hang", "heng"]);
        assert_eq!(readings('绿'), ["lu:", "lu"]);
        assert_eq!(table.placeholder(), "ling");
    }

    #[test]
    fn skips_out_of_range_characters() {
        let table = parse_unihan_readings(SAMPLE, "ling").unwrap();
        assert_eq!(table.entry_count(), 4);
        assert!(!table.syllables().iter().any(|s| s == "qiu"));
    }

    #[test]
    fn imported_table_round_trips_through_toml() {
        let table = parse_unihan_readings(SAMPLE, "ling").unwrap();
        let toml = table.to_toml().unwrap();
        assert_eq!(parse_table_toml(&toml).unwrap(), table);
    }

    #[test]
    fn malformed_line_rejected() {
        let err = parse_unihan_readings("U+4E2D kMandarin zhōng\n", "ling").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
