use crate::error::{KisanError, Result};
use kisan_common::Config;
use std::path::{Path, PathBuf};

/// `~/.config/kisan/config.json`
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| KisanError::Config("home directory not found".into()))?;
    Ok(home.join(".config").join("kisan").join("config.json"))
}

/// Load the user's config file, or defaults when there is none
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        Ok(Config::default())
    }
}

pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = Config::from_json(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
