//! Optional `calcard.toml` configuration.
//!
//! The file supplies layout defaults so a card style can be kept next to the
//! values it is rendered with. Every key is optional:
//!
//! ```toml
//! [layout]
//! font = "Avenir Next"
//! fontsize = 10
//! xpitch = 40
//! ypitch = 30
//! unit = "px"
//! ```
//!
//! Command-line flags and `CALCARD_*` environment variables take precedence over
//! the file; the file takes precedence over [`LayoutConfig::default`].

use std::path::Path;

use serde::Deserialize;

use crate::error::{CalcardError, Result};

/// Default file name looked up in the working directory.
pub const CONFIG_FILE: &str = "calcard.toml";

pub const DEFAULT_FONT: &str = "Avenir Next";
pub const DEFAULT_FONTSIZE: i64 = 10;
pub const DEFAULT_XPITCH: i64 = 40;
pub const DEFAULT_YPITCH: i64 = 30;

/// Top-level config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalcardConfig {
    #[serde(default)]
    pub layout: LayoutOverrides,
}

/// `[layout]` table; unset keys fall through to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverrides {
    pub font: Option<String>,
    pub fontsize: Option<i64>,
    pub xpitch: Option<i64>,
    pub ypitch: Option<i64>,
    pub unit: Option<String>,
}

/// Fully resolved, not yet validated, layout inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub font: String,
    pub fontsize: i64,
    pub xpitch: i64,
    pub ypitch: i64,
    pub unit: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.into(),
            fontsize: DEFAULT_FONTSIZE,
            xpitch: DEFAULT_XPITCH,
            ypitch: DEFAULT_YPITCH,
            unit: None,
        }
    }
}

impl LayoutConfig {
    /// Apply overrides on top of `self`; set fields win.
    pub fn merge(self, over: LayoutOverrides) -> Self {
        Self {
            font: over.font.unwrap_or(self.font),
            fontsize: over.fontsize.unwrap_or(self.fontsize),
            xpitch: over.xpitch.unwrap_or(self.xpitch),
            ypitch: over.ypitch.unwrap_or(self.ypitch),
            unit: over.unit.or(self.unit),
        }
    }
}

impl CalcardConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CalcardError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: CalcardConfig =
            toml::from_str(&contents).map_err(|e| CalcardError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if it exists. A missing file is an error only when `required`.
    pub fn load_or_default(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            tracing::trace!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = LayoutConfig::default();
        assert_eq!(c.font, "Avenir Next");
        assert_eq!((c.fontsize, c.xpitch, c.ypitch), (10, 40, 30));
        assert!(c.unit.is_none());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let merged = LayoutConfig::default().merge(LayoutOverrides {
            font: Some("Arial".into()),
            xpitch: Some(50),
            ..Default::default()
        });
        assert_eq!(merged.font, "Arial");
        assert_eq!(merged.xpitch, 50);
        assert_eq!(merged.ypitch, 30);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[layout]\nfont = \"Helvetica\"\nypitch = 35\nunit = \"px\"\n").unwrap();
        let config = CalcardConfig::load(&path).unwrap();
        assert_eq!(config.layout.font.as_deref(), Some("Helvetica"));
        assert_eq!(config.layout.ypitch, Some(35));
        assert_eq!(config.layout.fontsize, None);
        assert_eq!(config.layout.unit.as_deref(), Some("px"));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "").unwrap();
        let config = CalcardConfig::load(&path).unwrap();
        assert_eq!(config.layout, LayoutOverrides::default());
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[layout]\nxptich = 40\n").unwrap();
        assert!(matches!(
            CalcardConfig::load(&path),
            Err(CalcardError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_load_rejects_wrong_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[layout]\nfontsize = \"big\"\n").unwrap();
        assert!(matches!(
            CalcardConfig::load(&path),
            Err(CalcardError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(CalcardConfig::load_or_default(&path, false).is_ok());
        assert!(matches!(
            CalcardConfig::load_or_default(&path, true),
            Err(CalcardError::ConfigNotFound { .. })
        ));
    }
}
