use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::AppConfig;

const CONFIG_DIR: &str = "lazymenu";
const CONFIG_FILE: &str = "config.toml";

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`.
pub fn load(path: Option<&Path>) -> color_eyre::Result<AppConfig> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            debug!("No config directory found, using defaults");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        debug!("Config file not found at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content)?;
    debug!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Locale;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("lazymenu-missing-config.toml");
        let _ = fs::remove_file(&path);
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let path = std::env::temp_dir().join(format!("lazymenu-{}.toml", std::process::id()));
        fs::write(&path, "locale = \"th\"\n[theme]\nname = \"Catppuccin Latte\"\n").unwrap();
        let config = load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.locale, Locale::Th);
        assert_eq!(config.theme.name, "Catppuccin Latte");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("lazymenu-bad-{}.toml", std::process::id()));
        fs::write(&path, "locale = [").unwrap();
        let result = load(Some(&path));
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
