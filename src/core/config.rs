//! `kiauh.toml` loading.
//!
//! Files are read in order and merged field by field; later files win:
//!
//! 1. `$KIAUH_SYSTEM_CONFIG`, else `/etc/kiauh/kiauh.toml`
//! 2. `$KIAUH_CONFIG`, else `$XDG_CONFIG_HOME/kiauh/kiauh.toml`
//! 3. an explicit `--config` path, which must exist
//!
//! ```toml
//! color = "auto"          # auto | always | never
//! clear_screen = true
//!
//! [delegates]
//! klipper_setup = ["/opt/kiauh/klipper-setup"]   # receives install|remove
//! moonraker_remove = ["/opt/kiauh/moonraker-remove-menu"]
//! mainsail_remove = ["/opt/kiauh/mainsail-remove-menu"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::style::ColorMode;

const SYSTEM_CONFIG: &str = "/etc/kiauh/kiauh.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    color: Option<ColorMode>,
    clear_screen: Option<bool>,
    delegates: Option<DelegateCommands>,
}

/// External commands that stand in for the removal collaborators.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DelegateCommands {
    pub klipper_setup: Option<Vec<String>>,
    pub moonraker_remove: Option<Vec<String>>,
    pub mainsail_remove: Option<Vec<String>>,
}

impl ConfigToml {
    fn merge(&mut self, other: ConfigToml) {
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.clear_screen.is_some() {
            self.clear_screen = other.clear_screen;
        }
        match (self.delegates.as_mut(), other.delegates) {
            (Some(dst), Some(src)) => dst.merge(src),
            (None, Some(src)) => self.delegates = Some(src),
            _ => {}
        }
    }
}

impl DelegateCommands {
    fn merge(&mut self, other: DelegateCommands) {
        if other.klipper_setup.is_some() {
            self.klipper_setup = other.klipper_setup;
        }
        if other.moonraker_remove.is_some() {
            self.moonraker_remove = other.moonraker_remove;
        }
        if other.mainsail_remove.is_some() {
            self.mainsail_remove = other.mainsail_remove;
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    pub clear_screen: bool,
    pub delegates: DelegateCommands,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            clear_screen: true,
            delegates: DelegateCommands::default(),
        }
    }
}

impl From<ConfigToml> for Config {
    fn from(raw: ConfigToml) -> Self {
        let defaults = Config::default();
        Self {
            color: raw.color.unwrap_or(defaults.color),
            clear_screen: raw.clear_screen.unwrap_or(defaults.clear_screen),
            delegates: raw.delegates.unwrap_or_default(),
        }
    }
}

/// System-wide config path (`$KIAUH_SYSTEM_CONFIG` or `/etc/kiauh/kiauh.toml`).
pub fn system_config_path() -> PathBuf {
    std::env::var_os("KIAUH_SYSTEM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SYSTEM_CONFIG))
}

/// Per-user config path (`$KIAUH_CONFIG` or the XDG location).
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("KIAUH_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("kiauh").join("kiauh.toml"))
}

fn read_toml(path: &Path) -> Result<ConfigToml> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config: {}", path.display()))
}

impl Config {
    /// Load the standard locations, then `explicit` if given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut optional = vec![system_config_path()];
        optional.extend(user_config_path());
        Self::load_from(&optional, explicit)
    }

    /// Merge every existing file in `optional`, then `explicit`, which must exist.
    pub fn load_from(optional: &[PathBuf], explicit: Option<&Path>) -> Result<Self> {
        let mut merged = ConfigToml::default();
        for path in optional {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading config");
                merged.merge(read_toml(path)?);
            }
        }
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading explicit config");
            merged.merge(read_toml(path)?);
        }
        Ok(merged.into())
    }
}
