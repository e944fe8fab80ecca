//! Subcommand implementations for `pinyintool`.
//!
//! Commands print to stdout and exit with status 1 on the first error.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod table_ops;
