//! Init command - write an example config file

use crate::config::{user_config_path, write_example_config, PROJECT_CONFIG_FILE};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(path: &Path, user: bool) -> Result<()> {
    let config_path = if user {
        user_config_path().context("Could not determine the user config directory")?
    } else {
        let dir = path
            .canonicalize()
            .with_context(|| format!("Path does not exist: {}", path.display()))?;
        if !dir.is_dir() {
            anyhow::bail!("Path is not a directory: {}", dir.display());
        }
        dir.join(PROJECT_CONFIG_FILE)
    };

    if write_example_config(&config_path)? {
        println!(
            "{} Created {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    } else {
        println!(
            "{} Already exists: {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    println!("\nNext steps:");
    println!("  {} Classify the sample hand", style("nbti analyze --sample").cyan());
    println!("  {} Classify a payload", style("nbti step1 payload.json").cyan());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_project_config() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), false).unwrap();
        let written = std::fs::read_to_string(dir.path().join(PROJECT_CONFIG_FILE)).unwrap();
        assert!(written.contains("[thresholds.stage2]"));
    }

    #[test]
    fn test_init_rejects_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.txt");
        std::fs::write(&file, "").unwrap();
        assert!(run(&file, false).is_err());
    }
}
