//! Units command: render a measurement.

use crate::cli::output::emit;
use anyhow::{bail, Result};
use mactypes_core::config::MacTypesConfig;
use mactypes_core::units::STANDARD_UNITS;
use mactypes_core::Units;
use serde_json::{json, Value};

/// Rejects non-standard unit tags unless the config allows them.
pub fn check_unit(unit: &str, cfg: &MacTypesConfig) -> Result<()> {
    if !cfg.units.allow_custom && !STANDARD_UNITS.contains(&unit) {
        bail!(
            "unknown unit {:?} (custom units are disabled in config; known: {})",
            unit,
            STANDARD_UNITS.join(", ")
        );
    }
    Ok(())
}

/// Text line and JSON object for a measurement.
fn describe_units(value: f64, unit: &str, cfg: &MacTypesConfig) -> Result<(String, Value)> {
    check_unit(unit, cfg)?;
    let units = Units::new(value, unit);
    let rendered = units.to_string();
    let float = units.to_float()?;
    let text = format!("{}\t{}", rendered, float);
    let json = json!({
        "value": float,
        "unit": units.unit(),
        "display": rendered,
        "standard": units.is_standard_unit(),
    });
    Ok((text, json))
}

pub fn run_units(value: f64, unit: &str, cfg: &MacTypesConfig) -> Result<()> {
    let (text, json) = describe_units(value, unit, cfg)?;
    emit(cfg.output, &text, json);
    Ok(())
}
