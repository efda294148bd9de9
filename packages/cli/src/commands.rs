//! Command parsing and execution.
//!
//! Commands:
//! - `get <file> <path>` - Print the JSON value at path
//! - `set <file> <path> <value>` - Write a value at path
//! - `show <file>` - Print the whole document
//! - `init <file>` - Create the file holding `{}` if it does not exist

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;

use utilkit_json_store::{PathJsonStore, StoreError, StoreOptions};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// utilkit - read and write JSON documents by key path
#[derive(Parser, Debug)]
#[command(name = "utilkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Spaces per indentation level when writing documents
    #[arg(long, env = "UTILKIT_INDENT", default_value_t = 4)]
    pub indent: usize,

    /// Fail instead of creating a missing document
    #[arg(long)]
    pub no_create: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the value at a path such as "server / port"
    Get { file: PathBuf, path: String },

    /// Write a value at a path; values that are not valid JSON are stored as strings
    Set {
        file: PathBuf,
        path: String,
        value: String,
    },

    /// Print the whole document
    Show { file: PathBuf },

    /// Create the document holding an empty object if it does not exist
    Init { file: PathBuf },
}

impl Cli {
    fn options(&self) -> StoreOptions {
        StoreOptions {
            indent: self.indent,
            create_missing: !self.no_create,
        }
    }
}

/// Execute the command, returning the text to print, if any.
pub fn run(cli: &Cli) -> Result<Option<String>, CliError> {
    let options = cli.options();

    match &cli.command {
        Command::Get { file, path } => {
            let store = PathJsonStore::open_with(file, options)?;
            let value = store.get(path.as_str())?;
            Ok(Some(serde_json::to_string_pretty(&value)?))
        }
        Command::Set { file, path, value } => {
            let mut store = PathJsonStore::open_with(file, options)?;
            store.set(path.as_str(), parse_value(value))?;
            log::info!("Set '{}' in {}", path, file.display());
            Ok(None)
        }
        Command::Show { file } => {
            let store = PathJsonStore::open_with(file, options)?;
            Ok(Some(store.render()?))
        }
        Command::Init { file } => {
            let existed = file.exists();
            PathJsonStore::open_with(
                file,
                StoreOptions {
                    create_missing: true,
                    ..options
                },
            )?;
            if existed {
                Ok(Some(format!("{} already exists", file.display())))
            } else {
                Ok(Some(format!("Created {}", file.display())))
            }
        }
    }
}

/// Parse a command line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_are_parsed_as_json() {
        assert_eq!(parse_value("8080"), json!(8080));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("null"), JsonValue::Null);
        assert_eq!(parse_value(r#"{"a": [1]}"#), json!({"a": [1]}));
        assert_eq!(parse_value(r#""quoted""#), json!("quoted"));
    }

    #[test]
    fn non_json_values_are_strings() {
        assert_eq!(parse_value("main"), json!("main"));
        assert_eq!(parse_value("{broken"), json!("{broken"));
        assert_eq!(parse_value(""), json!(""));
    }

    #[test]
    fn arguments_parse() {
        let cli = Cli::try_parse_from(["utilkit", "--indent", "2", "get", "f.json", "a / b"])
            .unwrap();
        assert_eq!(cli.indent, 2);
        assert!(!cli.no_create);
        assert_eq!(
            cli.command,
            Command::Get {
                file: PathBuf::from("f.json"),
                path: "a / b".to_string()
            }
        );
    }

    #[test]
    fn no_create_flag() {
        let cli = Cli::try_parse_from(["utilkit", "--no-create", "show", "f.json"]).unwrap();
        assert!(!cli.options().create_missing);
    }
}
