//! Text/JSON result printing.

use mactypes_core::config::OutputFormat;
use serde_json::Value;

/// Prints `text` or `json` depending on the configured format.
pub(crate) fn emit(format: OutputFormat, text: &str, json: Value) {
    match format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => println!("{}", json),
    }
}
