//! Path command: file URL to POSIX path.

use crate::cli::output::emit;
use anyhow::Result;
use mactypes_core::config::OutputFormat;
use mactypes_core::file_url_codec::url_to_path;
use serde_json::json;

pub fn run_path(url: &str, format: OutputFormat) -> Result<()> {
    let path = url_to_path(url)?;
    emit(format, &path, json!({ "url": url, "path": path }));
    Ok(())
}
