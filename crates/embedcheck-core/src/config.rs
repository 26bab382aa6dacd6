use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How `embedcheck check` renders its verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per URL, one per line.
    Json,
}

/// What to do with an input line that does not parse as an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// Warn and move on to the next input.
    #[default]
    Skip,
    /// Abort the run with an error.
    Error,
}

/// Global configuration loaded from `~/.config/embedcheck/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedCheckConfig {
    /// Output format: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
    /// Unparseable inputs: "skip" (default) or "error".
    #[serde(default)]
    pub invalid_input: InvalidInputPolicy,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("embedcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EmbedCheckConfig> {
    load_from_path(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_from_path(path: &Path) -> Result<EmbedCheckConfig> {
    if !path.exists() {
        let default_cfg = EmbedCheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: EmbedCheckConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
