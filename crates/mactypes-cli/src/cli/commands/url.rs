//! Url command: POSIX path to file URL.

use crate::cli::output::emit;
use mactypes_core::config::OutputFormat;
use mactypes_core::file_url_codec::path_to_url;
use serde_json::json;

pub fn run_url(path: &str, format: OutputFormat) {
    let url = path_to_url(path);
    emit(format, &url, json!({ "path": path, "url": url }));
}
