use std::{
    fs,
    path::{Path, PathBuf},
};

pub use p3clock_proto::config::*;

use log::{info, warn};
use masterror::Error;
use shellexpand::full;

/// Errors raised while locating or decoding the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to expand config path '{path}': {reason}")]
    Expand { path: String, reason: String },

    #[error("config file does not exist: {path}")]
    NotFound { path: String },

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Invalid {
        path: String,
        #[source]
        source: ConfigValidationError,
    },
}

/// Resolves the config path and loads it, falling back to defaults when the
/// file cannot be used.
///
/// # Errors
///
/// Fails only when the path cannot be expanded or an explicitly requested
/// file does not exist. Nothing is ever written to disk.
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigError> {
    match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(&path)?;

            if !expanded.exists() {
                return Err(ConfigError::NotFound {
                    path: expanded.display().to_string(),
                });
            }

            Ok((load_or_default(&expanded), expanded))
        }
        None => {
            let expanded = expand_path(Path::new(DEFAULT_CONFIG_FILE_PATH))?;

            if !expanded.exists() {
                info!("No config file at {expanded:?}, using defaults");
                return Ok((Config::default(), expanded));
            }

            Ok((load_or_default(&expanded), expanded))
        }
    }
}

fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let str_path = path.to_string_lossy();
    let expanded = full(&str_path).map_err(|err| ConfigError::Expand {
        path: str_path.to_string(),
        reason: err.to_string(),
    })?;

    Ok(PathBuf::from(expanded.into_owned()))
}

fn load_or_default(path: &Path) -> Config {
    load_config(path).unwrap_or_else(|err| {
        warn!("{err}, falling back to defaults");
        Config::default()
    })
}

/// Reads, decodes and validates the config file at `path`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let display = || path.display().to_string();

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display(),
        source,
    })?;

    info!("Decoding config file {path:?}");

    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: display(),
        source,
    })?;

    config.validate().map_err(|source| ConfigError::Invalid {
        path: display(),
        source,
    })?;

    info!("Config file loaded successfully");
    Ok(config)
}
