//! File-url command: file URL for a location that may not exist.

use crate::cli::output::emit;
use anyhow::{Context, Result};
use mactypes_core::config::OutputFormat;
use mactypes_core::descriptor::PosixDesc;
use mactypes_core::FileUrl;
use serde_json::json;

pub fn run_file_url(path: &str, to_alias: bool, format: OutputFormat) -> Result<()> {
    let furl = FileUrl::<PosixDesc>::from_path(path);
    let url = furl.url()?;
    if !to_alias {
        emit(format, &url, json!({ "path": path, "url": url }));
        return Ok(());
    }

    let alias = furl.to_alias().context("convert file URL to alias")?;
    let alias_path = alias.path()?;
    emit(
        format,
        &format!("{}\n{}", url, alias_path),
        json!({ "path": path, "url": url, "alias": alias_path }),
    );
    Ok(())
}
