//! Configuration management module.
//!
//! Layered configuration loading with support for TOML files and environment
//! variable overrides across development, test and production environments.
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - base configuration
//! 2. `{environment}.toml` - environment-specific configuration
//! 3. `local.toml` - local development overrides (not committed)
//! 4. `MINIMART_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{DatabaseConfig, JwtConfig, LogConfig, SeedConfig, ServerConfig, Settings};
