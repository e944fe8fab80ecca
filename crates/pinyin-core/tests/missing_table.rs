//! A configured table path that cannot be opened disables romanization.
//! Runs as its own process so the global settings and table start unset.

use pinyin_core::settings;
use pinyin_core::{
    expand_full, first_letters, full_pinyin, romanization_available, split_pinyin,
    PinyinResolver, PinyinTable,
};

#[test]
fn missing_table_file_passes_input_through() {
    settings::init_custom(
        "[romanization]\nenabled = true\n\n[table]\npath = \"/nonexistent/pinyin.pytb\"\n\n[expansion]\nwarn_threshold = 512\n"
            .to_string(),
    )
    .unwrap();

    assert!(PinyinTable::global().is_none());
    assert!(!romanization_available());

    let resolver = PinyinResolver::system();
    assert!(!resolver.is_available());
    let r = resolver.resolve_str("中国");
    assert_eq!(r.len(), 1);
    assert_eq!(full_pinyin(&r), "中国");
    assert_eq!(first_letters(&r), "中");
    assert_eq!(split_pinyin(&r), ["中国"]);
    assert_eq!(expand_full(&r), ["中国"]);
}
