use crate::error::{DeskTermError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// User name shown in the prompt and by `whoami`.
    pub username: String,
    /// Host name shown in the prompt.
    pub hostname: String,
    /// Maximum scrollback lines retained. 0 means unbounded, matching the
    /// uncapped transcript of a single interactive session.
    pub scrollback_lines: usize,
    /// Print the "Last login" banner when a session starts.
    pub welcome_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            username: "guest".to_string(),
            hostname: "deskterm".to_string(),
            scrollback_lines: 0,
            welcome_banner: true,
        }
    }
}

impl AppConfig {
    /// Get the project directories for DeskTerm.
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "deskterm", "DeskTerm").ok_or_else(|| {
            DeskTermError::Config("Could not determine config directory".to_string())
        })
    }

    /// Get the config directory path.
    pub fn config_dir() -> PathBuf {
        match Self::project_dirs() {
            Ok(dirs) => dirs.config_dir().to_path_buf(),
            Err(_) => {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".config").join("deskterm")
            }
        }
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load config from disk, or create and save defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Self = toml::from_str(&content).map_err(|e| {
                DeskTermError::Config(format!(
                    "Failed to parse config at {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        let dir = Self::config_dir();

        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DeskTermError::Serialization(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&path, content)?;
        info!("Saved config to {}", path.display());

        Ok(())
    }
}
