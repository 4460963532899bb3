//! # tb-config
//!
//! Layered configuration loading for the typebook client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TYPEBOOK_*` prefix, `__` as separator)
//! 2. Project-level `.typebook/config.toml`
//! 3. User-level `~/.config/typebook/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TYPEBOOK_SERVER__URL` -> `server.url`,
//! `TYPEBOOK_OUTPUT__INDENT` -> `output.indent`.
//!
//! ```no_run
//! use tb_config::TbConfig;
//!
//! let config = TbConfig::load_with_dotenv().expect("config");
//! println!("registry: {}", config.server.url);
//! ```

mod error;
mod output;
mod server;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use server::ServerConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TYPEBOOK_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".typebook/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TbConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl TbConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`TbConfig::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when the merged values do not validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the working directory, then [`TbConfig::load`].
    ///
    /// # Errors
    ///
    /// See [`TbConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// See [`TbConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the provider chain used by [`TbConfig::load`].
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(Self::global_config_path().as_deref(), Path::new(PROJECT_CONFIG_PATH))
    }

    /// Provider chain over explicit file locations. Missing files are skipped.
    #[must_use]
    pub fn figment_with(global: Option<&Path>, project: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global));
        }
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.output.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("typebook").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TbConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.url, "127.0.0.1:8888");
        assert_eq!(config.output.indent, 2);
    }

    #[test]
    fn figment_without_files_yields_defaults() {
        let figment = TbConfig::figment_with(None, Path::new("does/not/exist.toml"));
        let config: TbConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.server.timeout_secs, 30);
    }
}
