//! Configuration management module.
//!
//! This module handles loading and saving the persisted preferences: the
//! light/dark theme choice and the path of the last attached process image.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/vendor-guide-tui";

const THEME_DARK: &str = "dark";
const THEME_LIGHT: &str = "light";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub theme: String,
    pub image_path: Option<PathBuf>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub image_path: Option<PathBuf>,
}

fn default_theme() -> String {
    THEME_LIGHT.to_string()
}

impl Config {
    /// Return a new instance with default preferences.
    ///
    pub fn new() -> Config {
        Config {
            theme: default_theme(),
            image_path: None,
            file_path: None,
        }
    }

    /// Whether the persisted theme selects dark mode. Any unrecognized value
    /// falls back to light.
    ///
    pub fn is_dark(&self) -> bool {
        self.theme == THEME_DARK
    }

    /// Record a theme preference for the next save.
    ///
    pub fn set_dark(&mut self, is_dark: bool) -> &mut Self {
        self.theme = if is_dark { THEME_DARK } else { THEME_LIGHT }.to_string();
        self
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing or unreadable file leaves the defaults in
    /// place; only filesystem setup problems are reported as errors.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            // A malformed file means no usable preference; fall back to the
            // defaults rather than refusing to start.
            match serde_yaml::from_str::<FileSpec>(&contents) {
                Ok(data) => {
                    self.theme = data.theme;
                    self.image_path = data.image_path;
                }
                Err(e) => {
                    warn!(
                        "Ignoring malformed configuration at {}: {}",
                        file_path.display(),
                        e
                    );
                }
            }
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme: self.theme.clone(),
            image_path: self.image_path.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_light_with_no_image() {
        let config = Config::new();
        assert!(!config.is_dark());
        assert!(config.image_path.is_none());
    }

    #[test]
    fn test_unrecognized_theme_value_is_light() {
        let mut config = Config::new();
        config.theme = "solarized".to_string();
        assert!(!config.is_dark());
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let mut config = Config::new();
        config.load(Some(dir.path().to_str().unwrap())).unwrap();
        assert!(!config.is_dark());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        let mut config = Config::new();
        config.load(Some(dir_str)).unwrap();
        config.set_dark(true);
        config.image_path = Some(PathBuf::from("/tmp/map.png"));
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(dir_str)).unwrap();
        assert!(reloaded.is_dark());
        assert_eq!(reloaded.image_path, Some(PathBuf::from("/tmp/map.png")));
    }

    #[test]
    fn test_each_toggle_is_individually_persisted() {
        let dir = tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        let mut config = Config::new();
        config.load(Some(dir_str)).unwrap();

        config.set_dark(true);
        config.save().unwrap();
        let mut observed = Config::new();
        observed.load(Some(dir_str)).unwrap();
        assert!(observed.is_dark());

        config.set_dark(false);
        config.save().unwrap();
        let mut observed = Config::new();
        observed.load(Some(dir_str)).unwrap();
        assert!(!observed.is_dark());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        fs::write(dir.path().join(FILE_NAME), ":: not yaml ::").unwrap();

        let mut config = Config::new();
        config.load(Some(dir_str)).unwrap();
        assert!(!config.is_dark());
        assert!(config.image_path.is_none());
    }

    #[test]
    fn test_save_without_load_reports_missing_path() {
        let config = Config::new();
        assert!(config.save().is_err());
    }
}
