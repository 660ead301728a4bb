//! Terminal color selection for menu rendering.
//!
//! Menus are rendered into strings so the exact bytes can be compared in
//! tests. The [`Palette`] decides whether those strings carry ANSI escapes.

use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Deserialize;

/// When to emit ANSI color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current process environment.
    pub fn resolve(self) -> Palette {
        let enabled = match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
        Palette { enabled }
    }
}

/// Paints menu text, or passes it through untouched when colors are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const PLAIN: Palette = Palette { enabled: false };
    pub const COLORED: Palette = Palette { enabled: true };

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn red(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn cyan(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}
