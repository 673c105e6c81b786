use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CINELANE_PATH environment variable (with tilde expansion)
/// 3. `cinelane` under the XDG data directory
/// 4. ~/.cinelane when there is no XDG data directory
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CINELANE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("cinelane"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".cinelane"));
    }

    anyhow::bail!("Could not determine data directory: no HOME directory or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Poll interval of the interactive screen
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long the play notification stays in the status bar
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_ms() -> u64 {
    3000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_ms: default_toast_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file used instead of the built-in picks.
    /// Relative paths are resolved against the data directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Configured catalog path, made absolute against `data_dir`.
    pub fn catalog_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.catalog.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                data_dir.join(path)
            }
        })
    }
}
