// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Centralized configuration loading with environment variable overrides.
//!
//! Loading a file goes through these steps:
//! 1. Resolve the path (an empty path means the default directory)
//! 2. Read the file
//! 3. Decode it with the format chosen by its extension
//! 4. Apply environment variable overrides (see [`super::sync`])

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::env::{EnvReader, ProcessEnv};
use super::fields::EnvFields;
use super::format::{display_extension, CodecError, Format};
use super::sync::{sync_env, SyncError};
use super::types::EnvDefaults;

/// Base name used when looking up a configuration file in a directory.
pub const DEFAULT_CONFIG_NAME: &str = "config";

/// Directory searched when no path is given.
pub const DEFAULT_CONFIG_DIR: &str = ".";

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file format [{extension}] not supported")]
    UnsupportedFormat { extension: String },

    #[error("Failed to parse {format} config file {}: {source}", path.display())]
    Decode {
        format: Format,
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("Failed to serialize config as {format}: {source}")]
    Encode {
        format: Format,
        #[source]
        source: CodecError,
    },

    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Loads configuration files and applies environment overrides from `E`.
#[derive(Debug, Clone)]
pub struct ConfigLoader<E = ProcessEnv> {
    env: E,
    default_dir: PathBuf,
}

impl ConfigLoader<ProcessEnv> {
    /// Create a loader reading the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            env: ProcessEnv,
            default_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
        }
    }
}

impl Default for ConfigLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvReader> ConfigLoader<E> {
    /// Replace the environment the loader reads overrides from.
    #[must_use]
    pub fn with_env<F: EnvReader>(self, env: F) -> ConfigLoader<F> {
        ConfigLoader {
            env,
            default_dir: self.default_dir,
        }
    }

    /// Directory searched when `load` is called with an empty path.
    #[must_use]
    pub fn with_default_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_dir = dir.into();
        self
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Load a configuration from `path` and apply environment overrides.
    ///
    /// An empty `name` means [`DEFAULT_CONFIG_NAME`]; an empty `path` means
    /// the default directory. When the path is a directory, the first of
    /// `<name>.json`, `<name>.yml`, `<name>.toml` and `<name>.hcl` that exists
    /// inside it is loaded.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if the path (or every candidate in the
    ///   directory) does not exist
    /// - [`ConfigError::Io`] if the file cannot be read
    /// - [`ConfigError::UnsupportedFormat`] if the extension is not one of
    ///   `.json`, `.yml`, `.toml`, `.hcl`
    /// - [`ConfigError::Decode`] if the content is malformed
    /// - [`ConfigError::Sync`] if an environment override cannot be parsed
    pub fn load<T>(&self, name: &str, path: impl AsRef<Path>) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + EnvFields,
    {
        let path = self.resolve(name, path.as_ref())?;
        let content = fs::read(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let format = Format::from_path(&path).ok_or_else(|| ConfigError::UnsupportedFormat {
            extension: display_extension(&path),
        })?;
        let mut config: T = format
            .decode(&content)
            .map_err(|source| ConfigError::Decode {
                format,
                path: path.clone(),
                source,
            })?;
        debug!("Decoded {format} config from {}", path.display());

        let report = sync_env(&mut config, &self.env)?;
        if !report.is_empty() {
            info!(
                "Applied environment overrides for: {}",
                report.overridden.join(", ")
            );
        }

        Ok(config)
    }

    /// Build a configuration from environment-seeded defaults and apply
    /// environment overrides, without reading any file.
    pub fn load_defaults<T>(&self) -> Result<T, ConfigError>
    where
        T: EnvDefaults + EnvFields,
    {
        let mut config = T::from_env_defaults(&self.env);
        sync_env(&mut config, &self.env)?;
        Ok(config)
    }

    fn resolve(&self, name: &str, path: &Path) -> Result<PathBuf, ConfigError> {
        let name = if name.is_empty() {
            DEFAULT_CONFIG_NAME
        } else {
            name
        };
        let path = if path.as_os_str().is_empty() {
            self.default_dir.as_path()
        } else {
            path
        };

        let metadata = fs::metadata(path).map_err(|source| not_found_or_io(path, source))?;
        if !metadata.is_dir() {
            return Ok(path.to_path_buf());
        }

        Format::ALL
            .iter()
            .map(|format| path.join(format!("{name}.{}", format.extension())))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ConfigError::NotFound {
                path: path.join(format!("{name}.*")),
            })
    }
}

fn not_found_or_io(path: &Path, source: std::io::Error) -> ConfigError {
    if source.kind() == std::io::ErrorKind::NotFound {
        ConfigError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Load a configuration using the process environment.
///
/// # Examples
///
/// ```no_run
/// use confsync::config::{load_config, AppConfig};
///
/// let config: AppConfig = load_config("", "settings.toml").unwrap();
/// println!("{}", config.a_string);
/// ```
pub fn load_config<T>(name: &str, path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + EnvFields,
{
    ConfigLoader::new().load(name, path)
}

/// Load the configuration file at `path` using the process environment.
pub fn load_config_file<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + EnvFields,
{
    load_config("", path)
}

/// Build the environment-seeded defaults and apply environment overrides.
pub fn load_defaults<T>() -> Result<T, ConfigError>
where
    T: EnvDefaults + EnvFields,
{
    ConfigLoader::new().load_defaults()
}

/// Save a configuration in the format chosen by the extension of `path`.
///
/// Note: values are written as they currently are in memory, including any
/// environment overrides that were applied while loading.
pub fn save_config_file<T: Serialize>(config: &T, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        extension: display_extension(path),
    })?;
    let content = format
        .encode(config)
        .map_err(|source| ConfigError::Encode { format, source })?;

    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
