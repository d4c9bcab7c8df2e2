//! Alias command: resolve an existing filesystem object.

use crate::cli::output::emit;
use anyhow::{Context, Result};
use mactypes_core::config::OutputFormat;
use mactypes_core::descriptor::PosixDesc;
use mactypes_core::Alias;
use serde_json::json;

pub fn run_alias(path: &str, format: OutputFormat) -> Result<()> {
    let alias = Alias::<PosixDesc>::from_path(path).context("resolve alias")?;
    let resolved = alias.path()?;
    let url = alias.url()?;
    tracing::info!("alias {} -> {}", path, resolved);
    emit(
        format,
        &format!("{}\n{}", resolved, url),
        json!({ "path": resolved, "url": url }),
    );
    Ok(())
}
