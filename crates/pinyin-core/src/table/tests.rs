use super::io::{HEADER_SIZE, MAGIC, VERSION};
use super::*;

fn sample_table() -> PinyinTable {
    parse_table_toml(
        r##"
placeholder = "ling"
syllables = ["hang", "hao", "ling", "xing", "zou"]

[chars]
"好" = ["hao", "hao"]
"行" = ["xing", "hang"]
"走" = ["zou"]
"乄" = ["#"]
"##,
    )
    .unwrap()
}

/// Wrap a raw bincode payload in a valid PYTB header.
fn frame(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&[0u8; 3]);
    buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    buf.extend_from_slice(&crc32fast::hash(payload).to_le_bytes());
    buf.extend_from_slice(payload);
    buf
}

#[test]
fn test_table_offset_bounds() {
    assert_eq!(table_offset('\u{4E00}'), Some(0));
    assert_eq!(table_offset('\u{9FA5}'), Some(TABLE_SIZE - 1));
    assert_eq!(table_offset('\u{9FA6}'), None);
    assert_eq!(table_offset('\u{4DFF}'), None);
    assert_eq!(table_offset('A'), None);
    assert_eq!(table_offset(LEGACY_PLACEHOLDER), None);
    assert_eq!(table_offset('\u{20000}'), None);
}

#[test]
fn test_entry_lookup() {
    let table = sample_table();
    let hao = table.entry('好').unwrap();
    assert_eq!(hao.len(), 2);
    assert_eq!(hao[0], hao[1]);
    let xing = table.entry('行').unwrap();
    assert_eq!(xing, &[Candidate::Syllable(3), Candidate::Syllable(0)]);
    assert_eq!(table.syllable(3), "xing");
    assert_eq!(table.entry('中'), None);
    assert_eq!(table.entry('A'), None);
}

#[test]
fn test_entries_in_code_point_order() {
    let table = sample_table();
    let chars: Vec<char> = table.entries().map(|(ch, _)| ch).collect();
    let mut sorted = chars.clone();
    sorted.sort_unstable();
    assert_eq!(chars, sorted);
    assert_eq!(chars.len(), 4);
}

#[test]
fn test_counts() {
    let table = sample_table();
    assert_eq!(table.syllable_count(), 5);
    assert_eq!(table.entry_count(), 4);
    assert_eq!(table.candidate_count(), 6);
    // 好 repeats one syllable, so only 行 counts as a polyphone.
    assert_eq!(table.polyphone_count(), 1);
}

#[test]
fn test_binary_roundtrip() {
    let table = sample_table();
    let bytes = table.to_bytes().unwrap();
    assert_eq!(&bytes[..4], MAGIC);
    assert_eq!(bytes[4], VERSION);
    assert_eq!(PinyinTable::from_bytes(&bytes).unwrap(), table);
}

#[test]
fn test_save_and_open() {
    let table = parse_table_toml(DEFAULT_TABLE_TOML).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.pytb");
    table.save(&path).unwrap();
    let opened = PinyinTable::open(&path).unwrap();
    assert_eq!(opened, table);
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PinyinTable::open(&dir.path().join("missing.pytb")).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn test_invalid_magic() {
    let mut bytes = sample_table().to_bytes().unwrap();
    bytes[0] = b'X';
    assert!(matches!(
        PinyinTable::from_bytes(&bytes),
        Err(TableError::InvalidMagic)
    ));
}

#[test]
fn test_unsupported_version() {
    let mut bytes = sample_table().to_bytes().unwrap();
    bytes[4] = 99;
    assert!(matches!(
        PinyinTable::from_bytes(&bytes),
        Err(TableError::UnsupportedVersion(99))
    ));
}

#[test]
fn test_truncated() {
    let bytes = sample_table().to_bytes().unwrap();
    assert!(matches!(
        PinyinTable::from_bytes(&bytes[..3]),
        Err(TableError::InvalidHeader)
    ));
    assert!(matches!(
        PinyinTable::from_bytes(&bytes[..HEADER_SIZE - 1]),
        Err(TableError::InvalidHeader)
    ));
    assert!(matches!(
        PinyinTable::from_bytes(&bytes[..bytes.len() - 1]),
        Err(TableError::InvalidHeader)
    ));
}

#[test]
fn test_trailing_bytes_rejected() {
    let mut bytes = sample_table().to_bytes().unwrap();
    bytes.push(0);
    assert!(matches!(
        PinyinTable::from_bytes(&bytes),
        Err(TableError::InvalidHeader)
    ));
}

#[test]
fn test_oversized_payload_len() {
    let mut bytes = sample_table().to_bytes().unwrap();
    bytes[8..12].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        PinyinTable::from_bytes(&bytes),
        Err(TableError::InvalidHeader)
    ));
}

#[test]
fn test_checksum_mismatch() {
    let mut bytes = sample_table().to_bytes().unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    assert!(matches!(
        PinyinTable::from_bytes(&bytes),
        Err(TableError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_rejects_syllable_index_out_of_range() {
    let mut table = sample_table();
    table.candidates[0] = Candidate::Syllable(42);
    let bytes = frame(&bincode::serialize(&table).unwrap());
    let err = PinyinTable::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, TableError::Invalid { .. }));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_rejects_short_offsets() {
    let mut table = sample_table();
    table.offsets.pop();
    let bytes = frame(&bincode::serialize(&table).unwrap());
    let err = PinyinTable::from_bytes(&bytes).unwrap_err();
    assert!(err.to_string().contains("offsets"));
}

#[test]
fn test_rejects_decreasing_offsets() {
    let mut table = sample_table();
    let (i, _) = table
        .offsets
        .iter()
        .enumerate()
        .find(|(_, &o)| o > 0)
        .unwrap();
    table.offsets[i - 1] = table.offsets[i] + 1;
    let bytes = frame(&bincode::serialize(&table).unwrap());
    assert!(matches!(
        PinyinTable::from_bytes(&bytes),
        Err(TableError::Invalid { .. })
    ));
}

#[test]
fn test_rejects_bad_placeholder() {
    let mut table = sample_table();
    table.placeholder = 5;
    let bytes = frame(&bincode::serialize(&table).unwrap());
    let err = PinyinTable::from_bytes(&bytes).unwrap_err();
    assert!(err.to_string().contains("placeholder"));
}

#[test]
fn test_garbage_payload() {
    let bytes = frame(&[1, 2, 3]);
    assert!(matches!(
        PinyinTable::from_bytes(&bytes),
        Err(TableError::Deserialize(_))
    ));
}
