use std::fs;
use std::path::Path;

use pinyin_core::table::{
    self, parse_table_toml, parse_unihan_readings, PinyinTable, HAN_BASE, HAN_LAST,
};

pub fn table_export(table_file: Option<&str>) {
    match table_file {
        None => print!("{}", table::default_toml()),
        Some(path) => {
            let table = die!(PinyinTable::open(Path::new(path)), "Error opening table: {}");
            let toml = die!(table.to_toml(), "Error exporting table: {}");
            print!("{toml}");
        }
    }
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(parse_table_toml(&content), "Error: {}");
    println!("OK: {}", summary(&table));
}

pub fn table_compile(input_toml: &str, output_file: &str) {
    let content = die!(
        fs::read_to_string(input_toml),
        "Error reading {input_toml}: {}"
    );
    let table = die!(parse_table_toml(&content), "Error: {}");
    die!(
        table.save(Path::new(output_file)),
        "Error writing {output_file}: {}"
    );
    let size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    println!("Wrote {output_file} ({size} bytes): {}", summary(&table));
}

/// Build a table TOML source from Unicode `Unihan_Readings.txt`.
pub fn table_import(unihan_file: &str, output_toml: &str, placeholder: &str) {
    let content = die!(
        fs::read_to_string(unihan_file),
        "Error reading {unihan_file}: {}"
    );
    let table = die!(
        parse_unihan_readings(&content, placeholder),
        "Error importing Unihan data: {}"
    );
    let toml = die!(table.to_toml(), "Error exporting table: {}");
    die!(
        fs::write(output_toml, toml),
        "Error writing {output_toml}: {}"
    );
    println!("Wrote {output_toml}: {}", summary(&table));
}

pub fn table_info(file: &str) {
    let table = die!(PinyinTable::open(Path::new(file)), "Error opening table: {}");
    println!("range:        U+{HAN_BASE:04X}..U+{HAN_LAST:04X}");
    println!("syllables:    {}", table.syllable_count());
    println!("entries:      {}", table.entry_count());
    println!("candidates:   {}", table.candidate_count());
    println!("polyphones:   {}", table.polyphone_count());
    println!("placeholder:  {}", table.placeholder());
}

pub fn summary(table: &PinyinTable) -> String {
    format!(
        "{} syllables, {} entries, {} polyphones",
        table.syllable_count(),
        table.entry_count(),
        table.polyphone_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_table_matches_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("table.toml");
        let out = dir.path().join("table.pytb");
        fs::write(&src, table::default_toml()).unwrap();

        table_compile(src.to_str().unwrap(), out.to_str().unwrap());

        let compiled = PinyinTable::open(&out).unwrap();
        let parsed = parse_table_toml(table::default_toml()).unwrap();
        assert_eq!(compiled, parsed);
        assert_eq!(summary(&compiled), summary(&parsed));
    }

    #[test]
    fn test_import_unihan() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("Unihan_Readings.txt");
        let out = dir.path().join("table.toml");
        fs::write(
            &src,
            "U+4E2D\tkMandarin\tzhōng\nU+884C\tkHanyuPinyin\t73450.010:xíng,háng\n",
        )
        .unwrap();

        table_import(src.to_str().unwrap(), out.to_str().unwrap(), "ling");

        let table = parse_table_toml(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(table.entry_count(), 2);
        assert_eq!(table.polyphone_count(), 1);
        assert_eq!(table.placeholder(), "ling");
    }
}
