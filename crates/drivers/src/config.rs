use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "launchpad.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {name}: {message}")]
    Env { name: &'static str, message: String },
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("page_size must be positive")]
    ZeroPageSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub shortcuts_dir: PathBuf,
    pub image_root: PathBuf,
    pub fallback_poster: PathBuf,
    pub catalog_path: String,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shortcuts_dir: default_shortcuts_dir(),
            image_root: dirs::config_dir()
                .map(|dir| dir.join("Playnite").join("library").join("files"))
                .unwrap_or_else(|| PathBuf::from("library").join("files")),
            fallback_poster: PathBuf::from("assets").join("placeholder.jpg"),
            catalog_path: "launcher.sqlite3".to_string(),
            page_size: 24,
        }
    }
}

#[cfg(windows)]
fn default_shortcuts_dir() -> PathBuf {
    PathBuf::from(r"C:\ProgramData\Microsoft\Windows\Start Menu\Programs\Games")
}

#[cfg(not(windows))]
fn default_shortcuts_dir() -> PathBuf {
    PathBuf::from("shortcuts")
}

impl AppConfig {
    /// Defaults, then the config file, then `LAUNCHPAD_*` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(value) = lookup("LAUNCHPAD_SHORTCUTS_DIR") {
            self.shortcuts_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("LAUNCHPAD_IMAGE_ROOT") {
            self.image_root = PathBuf::from(value);
        }
        if let Some(value) = lookup("LAUNCHPAD_FALLBACK_POSTER") {
            self.fallback_poster = PathBuf::from(value);
        }
        if let Some(value) = lookup("LAUNCHPAD_CATALOG") {
            self.catalog_path = value;
        }
        if let Some(value) = lookup("LAUNCHPAD_PAGE_SIZE") {
            self.page_size = value.trim().parse().map_err(|error| ConfigError::Env {
                name: "LAUNCHPAD_PAGE_SIZE",
                message: format!("{value:?}: {error}"),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shortcuts_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyField("shortcuts_dir"));
        }
        if self.image_root.as_os_str().is_empty() {
            return Err(ConfigError::EmptyField("image_root"));
        }
        if self.fallback_poster.as_os_str().is_empty() {
            return Err(ConfigError::EmptyField("fallback_poster"));
        }
        if self.catalog_path.trim().is_empty() {
            return Err(ConfigError::EmptyField("catalog_path"));
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_path, "launcher.sqlite3");
        assert_eq!(config.page_size, 24);
        config.validate().expect("defaults should validate");
    }

    #[test]
    fn file_overrides_only_the_keys_it_sets() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("launchpad.toml");
        fs::write(
            &path,
            "shortcuts_dir = \"D:/Shortcuts\"\npage_size = 12\n",
        )
        .expect("write");

        let config = AppConfig::from_file(&path).expect("parse");

        assert_eq!(config.shortcuts_dir, PathBuf::from("D:/Shortcuts"));
        assert_eq!(config.page_size, 12);
        assert_eq!(config.catalog_path, AppConfig::default().catalog_path);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("launchpad.toml");
        fs::write(&path, "mongo_uri = \"mongodb://localhost\"\n").expect("write");

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn environment_wins_over_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("LAUNCHPAD_IMAGE_ROOT", "/mnt/playnite/files"),
            ("LAUNCHPAD_CATALOG", "/var/lib/launchpad.sqlite3"),
            ("LAUNCHPAD_PAGE_SIZE", " 6 "),
        ]);
        let mut config = AppConfig::default();

        config
            .apply_env(|name| env.get(name).map(|value| value.to_string()))
            .expect("env should apply");

        assert_eq!(config.image_root, PathBuf::from("/mnt/playnite/files"));
        assert_eq!(config.catalog_path, "/var/lib/launchpad.sqlite3");
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn bad_page_size_from_environment_is_reported() {
        let mut config = AppConfig::default();
        let result = config.apply_env(|name| {
            (name == "LAUNCHPAD_PAGE_SIZE").then(|| "many".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::Env {
                name: "LAUNCHPAD_PAGE_SIZE",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_empty_paths_and_zero_page_size() {
        let empty_root = AppConfig {
            image_root: PathBuf::new(),
            ..AppConfig::default()
        };
        assert!(matches!(
            empty_root.validate(),
            Err(ConfigError::EmptyField("image_root"))
        ));

        let zero_page = AppConfig {
            page_size: 0,
            ..AppConfig::default()
        };
        assert!(matches!(zero_page.validate(), Err(ConfigError::ZeroPageSize)));
    }
}
