//! Shell configuration.
//!
//! Loaded from a TOML file when one is supplied; every field has a default
//! so a missing file or a partial file both work.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Viewport width at and above which the desktop layout is used.
pub const DEFAULT_DESKTOP_BREAKPOINT: u32 = 1024;

/// Top-level shell configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NimbusConfig {
    /// Window title.
    pub window_title: String,
    /// Initial window width in pixels.
    pub screen_width: u32,
    /// Initial window height in pixels.
    pub screen_height: u32,
    /// Viewport width at which the layout switches to desktop.
    pub desktop_breakpoint: u32,
    /// Route fragment shown on startup (e.g. "#features"). Empty = none.
    pub start_route: String,
}

impl Default for NimbusConfig {
    fn default() -> Self {
        Self {
            window_title: "NIMBUS".to_string(),
            screen_width: 1280,
            screen_height: 800,
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
            start_route: String::new(),
        }
    }
}

impl NimbusConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = NimbusConfig::default();
        assert_eq!(cfg.window_title, "NIMBUS");
        assert_eq!(cfg.screen_width, 1280);
        assert_eq!(cfg.desktop_breakpoint, DEFAULT_DESKTOP_BREAKPOINT);
        assert!(cfg.start_route.is_empty());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg = NimbusConfig::from_toml("screen_width = 480\n").unwrap();
        assert_eq!(cfg.screen_width, 480);
        assert_eq!(cfg.screen_height, 800);
        assert_eq!(cfg.window_title, "NIMBUS");
    }

    #[test]
    fn full_toml() {
        let text = r##"
window_title = "Demo"
screen_width = 800
screen_height = 600
desktop_breakpoint = 900
start_route = "#pricing"
"##;
        let cfg = NimbusConfig::from_toml(text).unwrap();
        assert_eq!(cfg.window_title, "Demo");
        assert_eq!(cfg.desktop_breakpoint, 900);
        assert_eq!(cfg.start_route, "#pricing");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(NimbusConfig::from_toml("screen_width = [[[").is_err());
    }
}
