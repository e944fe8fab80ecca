use std::path::Path;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use pinyin_core::{
    combination_count, expand_first_letters, expand_full, first_letters, full_pinyin,
    search_keys, split_pinyin, PinyinResolver, PinyinTable, ResolvedString, SettingsGate,
};

/// Run `f` with a resolver over `table_file`, or over the global table.
/// Both honor `romanization.enabled`.
pub fn with_resolver<R>(
    table_file: Option<&str>,
    f: impl FnOnce(PinyinResolver<'_>) -> R,
) -> R {
    match table_file {
        Some(path) => {
            let table = die!(PinyinTable::open(Path::new(path)), "Error opening table: {}");
            f(PinyinResolver::new(&table, &SettingsGate))
        }
        None => f(PinyinResolver::system()),
    }
}

pub fn convert_cmd(table_file: Option<&str>, text: &str) {
    with_resolver(table_file, |resolver| {
        if !resolver.is_available() {
            eprintln!("warning: romanization unavailable, passing input through");
        }
        let resolved = resolver.resolve_str(text);
        println!("full:     {}", full_pinyin(&resolved));
        println!("initials: {}", first_letters(&resolved));
    });
}

pub fn split_cmd(table_file: Option<&str>, text: &str) {
    with_resolver(table_file, |resolver| {
        let resolved = resolver.resolve_str(text);
        let (top, bottom) = align_split(text, &resolved);
        println!("{top}");
        println!("{bottom}");
    });
}

/// Two lines, original units above their canonical readings, each column
/// padded to the wider of the two by display width.
pub fn align_split(text: &str, resolved: &ResolvedString) -> (String, String) {
    let readings = split_pinyin(resolved);
    let originals: Vec<String> = if resolved.len() == 1 {
        vec![text.to_string()]
    } else {
        text.chars().map(String::from).collect()
    };

    let mut top = Vec::with_capacity(readings.len());
    let mut bottom = Vec::with_capacity(readings.len());
    for (orig, reading) in originals.iter().zip(&readings) {
        let width = orig.width().max(reading.width());
        top.push(pad(orig, width));
        bottom.push(pad(reading, width));
    }
    (
        top.join(" ").trim_end().to_string(),
        bottom.join(" ").trim_end().to_string(),
    )
}

fn pad(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(s.width())));
    out
}

pub fn candidates_cmd(table_file: Option<&str>, text: &str) {
    with_resolver(table_file, |resolver| {
        for ch in text.chars() {
            let candidates = resolver.resolve_char(ch);
            let list: Vec<&str> = candidates.iter().map(String::as_str).collect();
            let marker = if candidates.is_polyphone() { " *" } else { "" };
            println!("{ch}\tU+{:04X}\t{}{marker}", ch as u32, list.join(" "));
        }
    });
}

#[derive(Debug, Serialize)]
pub struct ExpandReport {
    pub input: String,
    pub combinations: usize,
    pub full: Vec<String>,
    pub first_letters: Vec<String>,
    pub search_keys: Vec<String>,
}

pub fn expand_report(text: &str, resolved: &ResolvedString) -> ExpandReport {
    ExpandReport {
        input: text.to_string(),
        combinations: combination_count(resolved),
        full: expand_full(resolved),
        first_letters: expand_first_letters(resolved),
        search_keys: search_keys(resolved),
    }
}

pub fn expand_cmd(table_file: Option<&str>, text: &str, json: bool) {
    with_resolver(table_file, |resolver| {
        let resolved = resolver.resolve_str(text);
        let report = expand_report(text, &resolved);
        if json {
            let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
            println!("{out}");
            return;
        }
        println!("combinations: {}", report.combinations);
        println!("full:");
        for s in &report.full {
            println!("  {s}");
        }
        println!("first letters:");
        for s in &report.first_letters {
            println!("  {s}");
        }
    });
}
