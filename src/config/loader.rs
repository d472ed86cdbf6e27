//! Configuration loader.
//!
//! Handles layered configuration loading from TOML files with environment
//! variable overrides.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "MINIMART";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading.
///
/// Sources in order of priority (later overrides earlier):
/// 1. `default.toml` - base configuration (required)
/// 2. `{environment}.toml` - environment-specific configuration (optional)
/// 3. `local.toml` - local development overrides (optional)
/// 4. `MINIMART_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Creates a loader rooted at the given configuration directory, or the
    /// default `config/` directory when none is given.
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            environment: AppEnvironment::from_env(),
        }
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Loads and validates settings from all sources.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {e}"))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        if !default_path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                default_path.display()
            )));
        }

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let local_path = self.config_dir.join("local.toml");

        let builder = Config::builder()
            .add_source(Self::file_source(&default_path, true))
            .add_source(Self::file_source(&env_path, false))
            .add_source(Self::file_source(&local_path, false))
            // MINIMART_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            );

        builder.build().map_err(ConfigError::from)
    }

    fn file_source(path: &Path, required: bool) -> File<config::FileSourceFile, FileFormat> {
        File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    #[test]
    fn missing_default_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(Some(temp_dir.path().to_path_buf()));
        assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn loads_settings_from_default_toml() {
        let temp_dir = setup_config_dir(&[(
            "default.toml",
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [jwt]
            secret = "0123456789abcdef0123456789abcdef"

            [database]
            url = "postgres://localhost/minimart"
            "#,
        )]);

        let loader = ConfigLoader::new(Some(temp_dir.path().to_path_buf()));
        let settings = loader.load().expect("settings should load");
        assert_eq!(settings.server.address(), "0.0.0.0:9000");
        assert_eq!(settings.database.url, "postgres://localhost/minimart");
        // untouched sections fall back to defaults
        assert_eq!(settings.jwt.token_expiration_minutes, 60);
    }

    #[test]
    fn local_toml_overrides_default() {
        let temp_dir = setup_config_dir(&[
            (
                "default.toml",
                r#"
                [server]
                port = 9000

                [jwt]
                secret = "0123456789abcdef0123456789abcdef"
                "#,
            ),
            (
                "local.toml",
                r#"
                [server]
                port = 9001
                "#,
            ),
        ]);

        let loader = ConfigLoader::new(Some(temp_dir.path().to_path_buf()));
        let settings = loader.load().expect("settings should load");
        assert_eq!(settings.server.port, 9001);
    }

    #[test]
    fn invalid_settings_are_rejected_at_load() {
        let temp_dir = setup_config_dir(&[(
            "default.toml",
            r#"
            [jwt]
            secret = "too-short"
            "#,
        )]);

        // jwt validation happens at startup, not load; but database bounds do
        let temp_dir_bad = setup_config_dir(&[(
            "default.toml",
            r#"
            [database]
            min_connections = 50
            max_connections = 10
            "#,
        )]);

        let loader = ConfigLoader::new(Some(temp_dir_bad.path().to_path_buf()));
        assert!(loader.load().is_err());
        drop(temp_dir);
    }
}
