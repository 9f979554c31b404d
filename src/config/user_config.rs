//! User-level config location and the example file written by `nbti init`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Commented example written by `nbti init`
pub const EXAMPLE_CONFIG: &str = r#"# NBTI Configuration

[defaults]
# Output format: text, json, markdown
format = "text"

# Disable ANSI colors in text output
# no_color = true

[thresholds.stage1]
# 2D:4D ratio above this is emotional, below instinct_below is instinct
emotional_above = 1.02
instinct_below = 0.98
# Average nail height/width at or above this is slim
slim_at_least = 1.2

[thresholds.stage2]
# Any nail curvature at or above this is the high (iron) band
high_max_at_least = 1.10
# Curvature spread at or above this is also the high band
high_std_dev_at_least = 0.03
# Mean curvature below this (with small spread) is the low (glass) band
low_mean_below = 1.03

[share]
# Prefix for image links in share cards
# base_url = "https://nbti.example.com"
"#;

/// `~/.config/nbti/config.toml` (platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nbti").join("config.toml"))
}

/// Write the example config to `path` unless a file already exists.
///
/// Returns whether a file was written.
pub fn write_example_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}
