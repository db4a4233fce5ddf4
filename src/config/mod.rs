//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including theme, logging, and hotkey preferences. Tasks themselves are never
//! written to disk.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, ModeHotkeys};

use crate::error::AppResult;
use crate::ui::Theme;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todo-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub log_level: String,
    pub show_log: bool,
    pub hotkeys: ModeHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub show_log: bool,
    #[serde(default)]
    pub hotkeys: ModeHotkeys,
}

fn default_theme_name() -> String {
    "material-light".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default settings and no file path.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            show_log: false,
            hotkeys: ModeHotkeys::default(),
            file_path: None,
        }
    }

    /// Load an existing configuration from the disk using the custom directory
    /// if provided, or the default directory otherwise. When no file exists
    /// yet, the defaults are written so they can be edited by hand.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            return self.save();
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

        if Theme::from_name(&data.theme_name).is_none() {
            return Err(ConfigError::UnknownTheme(data.theme_name).into());
        }
        parse_log_level(&data.log_level)?;

        self.theme_name = data.theme_name;
        self.log_level = data.log_level;
        self.show_log = data.show_log;
        self.hotkeys = data.hotkeys;
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            show_log: self.show_log,
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

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

    /// Override the configured log level, e.g. from the command line.
    ///
    pub fn set_log_level(&mut self, level: &str) -> AppResult<()> {
        parse_log_level(level)?;
        self.log_level = level.to_string();
        Ok(())
    }

    /// Return the configured log level as a filter.
    ///
    pub fn log_level_filter(&self) -> AppResult<LevelFilter> {
        Ok(parse_log_level(&self.log_level)?)
    }

    /// Return the configured theme, falling back to the default palette.
    ///
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme_name).unwrap_or_default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

fn parse_log_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level).map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "todo-tui-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn load_writes_defaults_when_missing() {
        let dir = temp_dir("defaults");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(Some(file_path.as_path()), config.file_path());
        assert_eq!("material-light", config.theme_name);
        assert_eq!(LevelFilter::Info, config.log_level_filter().unwrap());
        assert!(!config.show_log);
        assert_eq!(ModeHotkeys::default(), config.hotkeys);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = temp_dir("existing");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "theme_name: tokyo-night\nlog_level: debug\nshow_log: true\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!("tokyo-night", config.theme_name);
        assert_eq!("tokyo-night", config.theme().name);
        assert_eq!(LevelFilter::Debug, config.log_level_filter().unwrap());
        assert!(config.show_log);
        // Hotkeys omitted from the file fall back to the defaults
        assert_eq!(ModeHotkeys::default(), config.hotkeys);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = temp_dir("round-trip");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.theme_name = "material-dark".to_string();
        config.show_log = true;
        config
            .hotkeys
            .task_list
            .insert(HotkeyAction::AddTask, hotkeys::Hotkey::char('n'));
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!("material-dark", reloaded.theme_name);
        assert!(reloaded.show_log);
        assert_eq!(
            Some(&hotkeys::Hotkey::char('n')),
            reloaded.hotkeys.task_list.get(&HotkeyAction::AddTask)
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_invalid_yaml() {
        let dir = temp_dir("invalid-yaml");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "show_log: [not, a, bool]\n").unwrap();

        let mut config = Config::new();
        let error = config.load(dir.to_str()).unwrap_err();
        assert!(matches!(
            error,
            AppError::Config(ConfigError::DeserializationFailed(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_rejects_unknown_theme() {
        let dir = temp_dir("unknown-theme");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "theme_name: neon\n").unwrap();

        let mut config = Config::new();
        let error = config.load(dir.to_str()).unwrap_err();
        assert!(matches!(
            error,
            AppError::Config(ConfigError::UnknownTheme(_))
        ));
        assert!(error.to_string().contains("material-light, material-dark, tokyo-night"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn set_log_level_validates() {
        let mut config = Config::new();
        config.set_log_level("trace").unwrap();
        assert_eq!(LevelFilter::Trace, config.log_level_filter().unwrap());
        assert!(config.set_log_level("loud").is_err());
        assert_eq!("trace", config.log_level);
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save().unwrap_err(),
            AppError::Config(ConfigError::FilePathNotSet)
        ));
    }
}
