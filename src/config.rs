//! Server configuration loaded from an optional TOML file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Capture server settings
///
/// ```toml
/// default_context = "@casa"
/// auto_expand = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Context applied when a capture does not name one
    pub default_context: Option<String>,
    /// Expand slash commands before classifying and storing
    pub auto_expand: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_context: None,
            auto_expand: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Context to use for a capture: the explicit one if non-blank, else the default
    pub fn resolve_context<'a>(&'a self, context: Option<&'a str>) -> Option<&'a str> {
        context
            .filter(|c| !c.trim().is_empty())
            .or(self.default_context.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_context() {
        let config = Config {
            default_context: Some("@casa".to_string()),
            auto_expand: true,
        };
        assert_eq!(config.resolve_context(Some("trabalho")), Some("trabalho"));
        assert_eq!(config.resolve_context(Some("  ")), Some("@casa"));
        assert_eq!(config.resolve_context(None), Some("@casa"));
        assert_eq!(Config::default().resolve_context(None), None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(r#"default_context = "rua""#).unwrap();
        assert_eq!(config.default_context.as_deref(), Some("rua"));
        assert!(config.auto_expand);
    }
}
