use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level miti configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MitiConfig {
    /// Year-table data settings.
    #[serde(default)]
    pub data: DataConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Directory holding the per-year `<year>.json` tables.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Show the tithi line in `today` output.
    #[serde(default = "default_true")]
    pub show_tithi: bool,

    /// Show the event list in `today` and `month` output.
    #[serde(default = "default_true")]
    pub show_events: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_tithi: true,
            show_events: true,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_true() -> bool {
    true
}

/// Load configuration, applying CLI overrides.
///
/// An explicit `--config` path must exist; without one, `miti.toml` in
/// the working directory is used when present, defaults otherwise.
pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<MitiConfig> {
    let mut config = match config_path {
        Some(path) => parse_file(path)?,
        None => {
            let implicit = Path::new("miti.toml");
            if implicit.exists() {
                parse_file(implicit)?
            } else {
                MitiConfig::default()
            }
        }
    };

    if let Some(dir) = data_dir {
        config.data.dir = dir;
    }
    Ok(config)
}

fn parse_file(path: &Path) -> Result<MitiConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse TOML: {}", path.display()))
}
