//! `chai.toml` configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! default = "Default Masala Chai"
//!
//! [menu]
//! discount = 0.5
//!
//! [orders]
//! fallback = "11"
//! ```
//!
//! Every section and key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "chai.toml";

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ChaiConfig {
    pub serve: ServeSettings,
    pub menu: MenuSettings,
    pub orders: OrderSettings,
}

/// `[serve]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ServeSettings {
    /// Served when no message is given.
    pub default: String,
}

impl Default for ServeSettings {
    fn default() -> Self {
        ServeSettings {
            default: "Default Masala Chai🍵".to_string(),
        }
    }
}

/// `[menu]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct MenuSettings {
    /// Price multiplier applied by `chai menu`.
    pub discount: f64,
}

impl Default for MenuSettings {
    fn default() -> Self {
        MenuSettings { discount: 0.5 }
    }
}

/// `[orders]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct OrderSettings {
    /// Reported by `chai current` when the wanted order is not in the list.
    pub fallback: String,
}

impl Default for OrderSettings {
    fn default() -> Self {
        OrderSettings {
            fallback: "11".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ── Functions ─────────────────────────────────────────────────────────────────

pub(crate) fn parse_config(content: &str) -> Result<ChaiConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, `chai.toml` in the working
/// directory is used when present and defaults otherwise.
pub(crate) fn load_config(path: Option<&Path>) -> Result<ChaiConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(ChaiConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ChaiConfig::default());
        assert_eq!(config.menu.discount, 0.5);
        assert_eq!(config.orders.fallback, "11");
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config("[serve]\ndefault = \"Ginger Chai\"\n").unwrap();
        assert_eq!(config.serve.default, "Ginger Chai");
        assert_eq!(config.menu, MenuSettings::default());
    }

    #[test]
    fn test_wrong_type_is_error() {
        assert!(parse_config("[menu]\ndiscount = \"half\"\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = load_config(Some(Path::new("/nonexistent/chai.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_explicit_file_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chai.toml");
        std::fs::write(&path, "[orders]\nfallback = \"none\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.orders.fallback, "none");
    }
}
