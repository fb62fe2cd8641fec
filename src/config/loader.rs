use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Loaded configuration plus an optional warning for the host to show
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Location of the user config file, if a config directory exists
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("envpick").join("config.toml"))
}

/// Load the user config file, falling back to defaults
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load configuration from an explicit path
///
/// Never fails: a missing file is not an error, and unreadable or invalid
/// files produce defaults with a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            return with_warning(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ));
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => with_warning(format!(
            "Invalid config file {}: {}",
            path.display(),
            e
        )),
    }
}

fn with_warning(warning: String) -> ConfigResult {
    log::warn!("{}", warning);
    ConfigResult {
        config: Config::default(),
        warning: Some(warning),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
