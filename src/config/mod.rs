pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pollstation")
        .join("config.toml")
}

/// Load the configuration at `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("pollstation-test-missing").join("config.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.officer.session_secs, 120);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("pollstation-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.officer.polling_center = "Galle Methodist College".into();
        save_config(&config, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.officer.polling_center, "Galle Methodist College");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = std::env::temp_dir().join(format!("pollstation-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[officer\nsession_secs = ").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
