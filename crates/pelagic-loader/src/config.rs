use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pelagic_config::{CONFIG_FILE_NAME, SeedConfig};

/// Load pelagic.json config from current directory.
pub fn load_config() -> Result<SeedConfig> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if !path.exists() {
        anyhow::bail!("pelagic.json not found. Run 'pelagic init' first.");
    }

    let content = fs::read_to_string(&path).context("read pelagic.json")?;
    let config: SeedConfig = serde_json::from_str(&content).context("parse pelagic.json")?;
    Ok(config)
}

/// Load config from a specific path.
pub fn load_config_from_path(path: PathBuf) -> Result<SeedConfig> {
    if !path.exists() {
        anyhow::bail!("pelagic.json not found at: {}", path.display());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let config: SeedConfig = serde_json::from_str(&content)
        .with_context(|| format!("parse config: {}", path.display()))?;
    Ok(config)
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<SeedConfig> {
    let config_path = if let Some(root) = project_root {
        root.join(CONFIG_FILE_NAME)
    } else {
        PathBuf::from(CONFIG_FILE_NAME)
    };

    if config_path.exists() {
        load_config_from_path(config_path)
    } else {
        Ok(SeedConfig::default())
    }
}
