// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Year wheel config (saved as JSON in the platform config directory)
//!

use directories_next::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use yearwheel_core::SharedPassword;
use yearwheel_renderer::WheelLayoutParams;

const PROJECT_QUALIFIER: &str = "no";
const ORG_NAME: &str = "NTNU";
const APPLICATION_NAME: &str = "Arshjul";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_DATABASE_FILE_NAME: &str = "yearwheel.sqlite";
const DEFAULT_DISPLAY_YEAR: i32 = 2025;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No home directory found for the config")]
    NoProjectDirs,

    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// The config that's saved to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database
    database_path: PathBuf,

    /// The year shown on the wheel
    #[serde(default = "default_display_year")]
    pub display_year: i32,

    /// The wheel's size and proportions (the year comes from `display_year`)
    #[serde(default)]
    pub wheel: WheelLayoutParams,

    /// Unlocks editing
    #[serde(default)]
    pub password: SharedPassword,
}

fn default_display_year() -> i32 {
    DEFAULT_DISPLAY_YEAR
}

impl Config {
    /// The default config, with the database at the given path
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            database_path,
            display_year: DEFAULT_DISPLAY_YEAR,
            wheel: WheelLayoutParams::default(),
            password: SharedPassword::default(),
        }
    }

    /// Load the config from the platform config directory, creating it with
    /// the defaults if it doesn't exist
    pub fn ensure_setup() -> Result<Self, ConfigError> {
        info!("Ensuring config exists");
        let project_dirs = project_dirs()?;
        let config_path = project_dirs.config_dir().join(CONFIG_FILE_NAME);
        let database_path = project_dirs.data_dir().join(DEFAULT_DATABASE_FILE_NAME);
        Self::load_or_create_at(&config_path, database_path)
    }

    /// Load the config at the path, creating it (with the given database
    /// path) if it doesn't exist
    pub fn load_or_create_at(path: &Path, database_path: PathBuf) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load_from(path);
        }
        info!("No config file found at {path:?}");
        let config = Self::new(database_path);
        config.save_to(path)?;
        info!("Config created = {config:?}");
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {path:?}");
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Saving config to {path:?}");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn set_database_path(&mut self, path: &Path) {
        self.database_path = path.to_owned();
    }

    /// The wheel layout parameters for the display year
    pub fn wheel_layout_params(&self) -> WheelLayoutParams {
        WheelLayoutParams {
            year: self.display_year,
            ..self.wheel
        }
    }
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(debug_assertions)]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    info!("Getting project directories (dev build)");
    ProjectDirs::from(
        PROJECT_QUALIFIER,
        ORG_NAME,
        &format!("{APPLICATION_NAME} Dev"),
    )
    .ok_or(ConfigError::NoProjectDirs)
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(not(debug_assertions))]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    info!("Getting project directories");
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
        .ok_or(ConfigError::NoProjectDirs)
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn created_with_defaults() {
        let dir = TempDir::new("yearwheel-store-config").unwrap();
        let path = dir.path().join("config").join(CONFIG_FILE_NAME);
        let database_path = dir.path().join("db.sqlite");

        let config = Config::load_or_create_at(&path, database_path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(config.database_path(), database_path);
        assert_eq!(config.display_year, 2025);
        assert_eq!(config.wheel.size, 800.0);
        assert!(config.password.verify("ntnu"));

        // Loaded (not replaced) the second time
        let mut changed = config.clone();
        changed.display_year = 2026;
        changed.save_to(&path).unwrap();
        let loaded = Config::load_or_create_at(&path, PathBuf::from("/elsewhere")).unwrap();
        assert_eq!(loaded, changed);
        assert_eq!(loaded.wheel_layout_params().year, 2026);
    }

    #[test]
    fn partial_file() {
        let dir = TempDir::new("yearwheel-store-config").unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"database_path": "/tmp/db.sqlite", "password": "hemmelig"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.display_year, 2025);
        assert_eq!(config.wheel, WheelLayoutParams::default());
        assert!(config.password.verify("hemmelig"));
    }

    #[test]
    fn invalid_file() {
        let dir = TempDir::new("yearwheel-store-config").unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::SerdeJson(_))));
    }
}
