use clap::{Parser, Subcommand};

use pinyin_cli::commands::{config_ops, convert_ops, table_ops};

#[derive(Parser)]
#[command(name = "pinyintool", about = "Pinyin table build and conversion tool")]
struct Cli {
    /// Compiled table (.pytb) to use instead of the configured one
    #[arg(long, global = true)]
    table: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical full pinyin and initials of a string
    Convert {
        /// Input text
        text: String,
    },
    /// Print each character above its canonical reading
    Split {
        /// Input text
        text: String,
    },
    /// List the candidate readings of every character
    Candidates {
        /// Input text
        text: String,
    },
    /// Print every polyphonic reading and acronym of a string
    Expand {
        /// Input text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the table as TOML (embedded default, or --table)
    TableExport,
    /// Validate a table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Compile a table TOML file into the binary format
    TableCompile {
        /// Input TOML file
        input_toml: String,
        /// Output binary file
        output_file: String,
    },
    /// Build a table TOML file from Unicode Unihan reading data
    TableImport {
        /// Unihan_Readings.txt
        unihan_file: String,
        /// Output TOML file
        output_toml: String,
        /// Syllable used for the legacy zero placeholder
        #[arg(long, default_value = "ling")]
        placeholder: String,
    },
    /// Show compiled table info
    TableInfo {
        /// Compiled table file (.pytb)
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let table = cli.table.as_deref();

    match cli.command {
        Command::Convert { text } => convert_ops::convert_cmd(table, &text),
        Command::Split { text } => convert_ops::split_cmd(table, &text),
        Command::Candidates { text } => convert_ops::candidates_cmd(table, &text),
        Command::Expand { text, json } => convert_ops::expand_cmd(table, &text, json),
        Command::TableExport => table_ops::table_export(table),
        Command::TableValidate { file } => table_ops::table_validate(&file),
        Command::TableCompile {
            input_toml,
            output_file,
        } => table_ops::table_compile(&input_toml, &output_file),
        Command::TableImport {
            unihan_file,
            output_toml,
            placeholder,
        } => table_ops::table_import(&unihan_file, &output_toml, &placeholder),
        Command::TableInfo { file } => table_ops::table_info(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
