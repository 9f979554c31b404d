//! Configuration for NBTI
//!
//! Loads `nbti.toml`:
//!
//! ```toml
//! [defaults]
//! format = "json"
//! no_color = true
//!
//! [thresholds.stage1]
//! slim_at_least = 1.2
//!
//! [thresholds.stage2]
//! high_max_at_least = 1.10
//!
//! [share]
//! base_url = "https://nbti.example.com"
//! ```
//!
//! Lookup order: `--config <path>`, `./nbti.toml`, the user config
//! (`~/.config/nbti/config.toml`), then built-in defaults. The
//! `NBTI_FORMAT` environment variable overrides `defaults.format`.

mod user_config;

pub use user_config::{user_config_path, write_example_config, EXAMPLE_CONFIG};

use crate::classifier::Thresholds;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "nbti.toml";

/// Environment variable overriding the default output format
pub const FORMAT_ENV: &str = "NBTI_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NbtiConfig {
    pub defaults: CliDefaults,
    pub thresholds: Thresholds,
    pub share: ShareConfig,
}

/// Default CLI flags
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable ANSI colors in text output
    #[serde(default)]
    pub no_color: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ShareConfig {
    /// Site prefix for image links in share cards
    #[serde(default)]
    pub base_url: Option<String>,
}

impl NbtiConfig {
    /// Parse and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: NbtiConfig = toml::from_str(content)?;
        config.thresholds.validate()?;
        Ok(config)
    }

    pub fn format(&self) -> &str {
        self.defaults.format.as_deref().unwrap_or("text")
    }

    pub fn no_color(&self) -> bool {
        self.defaults.no_color.unwrap_or(false)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.share.base_url.as_deref().filter(|s| !s.is_empty())
    }

    /// Apply an output format override (from the environment)
    pub fn with_format_override(mut self, format: Option<String>) -> Self {
        if let Some(f) = format.filter(|f| !f.trim().is_empty()) {
            self.defaults.format = Some(f);
        }
        self
    }
}

/// Load configuration.
///
/// An explicit path must exist and parse. Implicit files that fail to
/// parse are skipped with a warning.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<NbtiConfig> {
    let config = match explicit {
        Some(path) => {
            let config = NbtiConfig::from_file(path)?;
            debug!("Loaded config from {}", path.display());
            config
        }
        None => load_implicit(working_dir),
    };
    Ok(config.with_format_override(std::env::var(FORMAT_ENV).ok()))
}

fn load_implicit(working_dir: &Path) -> NbtiConfig {
    let project = working_dir.join(PROJECT_CONFIG_FILE);
    load_first(std::iter::once(project).chain(user_config_path()))
}

/// First candidate that exists and parses, else the defaults
fn load_first(candidates: impl IntoIterator<Item = PathBuf>) -> NbtiConfig {
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match NbtiConfig::from_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Ignoring {}: {:#}", path.display(), e);
            }
        }
    }
    debug!("No config found, using defaults");
    NbtiConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NbtiConfig::default();
        assert_eq!(config.format(), "text");
        assert!(!config.no_color());
        assert!(config.base_url().is_none());
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = NbtiConfig::from_toml("").unwrap();
        assert_eq!(config, NbtiConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = NbtiConfig::from_toml(
            r#"
[defaults]
format = "json"
no_color = true

[thresholds.stage1]
emotional_above = 1.03

[thresholds.stage2]
low_mean_below = 1.04

[share]
base_url = "https://nbti.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.format(), "json");
        assert!(config.no_color());
        assert_eq!(config.thresholds.stage1.emotional_above, 1.03);
        assert_eq!(config.thresholds.stage1.instinct_below, 0.98);
        assert_eq!(config.thresholds.stage2.low_mean_below, 1.04);
        assert_eq!(config.base_url(), Some("https://nbti.example.com"));
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let result = NbtiConfig::from_toml(
            r#"
[thresholds.stage1]
instinct_below = 1.5
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(NbtiConfig::from_toml("this is [[ not valid toml {{{}}}").is_err());
    }

    #[test]
    fn test_format_override() {
        let config = NbtiConfig::default().with_format_override(Some("markdown".into()));
        assert_eq!(config.format(), "markdown");
        let config = config.with_format_override(Some("  ".into()));
        assert_eq!(config.format(), "markdown");
        let config = config.with_format_override(None);
        assert_eq!(config.format(), "markdown");
    }

    #[test]
    fn test_explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_project_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[share]\nbase_url = \"https://a.test\"\n",
        )
        .unwrap();
        let config = load_implicit(dir.path());
        assert_eq!(config.base_url(), Some("https://a.test"));
    }

    #[test]
    fn test_first_valid_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[[[broken").unwrap();
        std::fs::write(&good, "[defaults]\nformat = \"json\"\n").unwrap();
        let config = load_first([dir.path().join("missing.toml"), broken, good]);
        assert_eq!(config.format(), "json");
    }

    #[test]
    fn test_broken_project_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&project, "[[[broken").unwrap();
        assert_eq!(load_first([project]), NbtiConfig::default());
    }
}
