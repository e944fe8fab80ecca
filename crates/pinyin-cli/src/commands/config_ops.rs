use std::fs;

pub fn settings_export() {
    print!("{}", pinyin_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        pinyin_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    let table = s
        .table
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<embedded>".to_string());
    println!(
        "OK: romanization.enabled={}, table.path={}, expansion.warn_threshold={}",
        s.romanization.enabled, table, s.expansion.warn_threshold
    );
}
