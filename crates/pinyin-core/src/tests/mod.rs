
use crate::table::{parse_table_toml, PinyinTable};

/// Small table covering the polyphone scenarios, independent of the
/// embedded default data.
pub(super) fn make_test_table() -> PinyinTable {
    parse_table_toml(
        r##"
placeholder = "ling"
syllables = ["guo", "hang", "hao", "ling", "lu", "lu:", "xing", "zhang", "zhong", "zou"]

[chars]
"好" = ["hao", "hao"]
"中" = ["zhong", "zhong"]
"国" = ["guo"]
"行" = ["xing", "hang"]
"走" = ["zou"]
"长" = ["zhang", "zhong"]
"绿" = ["lu:", "lu"]
"乄" = ["#"]
"##,
    )
    .expect("test table must be valid")
}
