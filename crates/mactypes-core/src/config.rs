use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Units handling (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsConfig {
    /// Accept unit tags outside the Apple Event Manager's standard set.
    pub allow_custom: bool,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self { allow_custom: true }
    }
}

/// Global configuration loaded from `~/.config/mactypes/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacTypesConfig {
    /// Output format: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub units: UnitsConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mactypes")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MacTypesConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MacTypesConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MacTypesConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MacTypesConfig::default();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!(cfg.units.allow_custom);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MacTypesConfig {
            output: OutputFormat::Json,
            units: UnitsConfig {
                allow_custom: false,
            },
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MacTypesConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.output, OutputFormat::Json);
        assert!(!parsed.units.allow_custom);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: MacTypesConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!(cfg.units.allow_custom);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            output = "json"

            [units]
            allow_custom = false
        "#;
        let cfg: MacTypesConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(!cfg.units.allow_custom);
    }

    #[test]
    fn config_toml_rejects_unknown_output() {
        assert!(toml::from_str::<MacTypesConfig>(r#"output = "yaml""#).is_err());
    }
}
