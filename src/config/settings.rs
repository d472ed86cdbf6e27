//! Configuration settings structures for minimart.
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "minimart".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_token_expiration_minutes() -> i64 {
    60
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

fn default_admin_full_name() -> String {
    "Admin".to_string()
}

fn default_admin_balance() -> i64 {
    100_000
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection acquisition timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

// ============================================================================
// JWT Configuration
// ============================================================================

/// JWT authentication configuration.
///
/// The signing secret must come from configuration or the environment
/// (`MINIMART_JWT__SECRET`), never from a literal in the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Symmetric signing secret
    #[serde(default)]
    pub secret: String,

    /// Token lifetime in minutes
    #[serde(default = "default_token_expiration_minutes")]
    pub token_expiration_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_expiration_minutes: default_token_expiration_minutes(),
        }
    }
}

impl JwtConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret must be configured",
            ));
        }
        if self.secret.len() < 32 {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret must be at least 32 characters",
            ));
        }
        if self.token_expiration_minutes <= 0 {
            return Err(ConfigError::validation(
                "jwt.token_expiration_minutes",
                "token lifetime must be positive",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Seed Configuration
// ============================================================================

/// Startup seeding for the built-in admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to create the admin account at startup when missing
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    #[serde(default = "default_admin_full_name")]
    pub admin_full_name: String,

    /// Plain admin password, hashed before storage
    #[serde(default)]
    pub admin_password: String,

    /// Initial admin balance in the smallest currency unit
    #[serde(default = "default_admin_balance")]
    pub admin_balance: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            admin_email: default_admin_email(),
            admin_full_name: default_admin_full_name(),
            admin_password: String::new(),
            admin_balance: default_admin_balance(),
        }
    }
}

// ============================================================================
// Log Configuration
// ============================================================================

/// Tracing subscriber configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON-formatted log lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub jwt: JwtConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Settings {
    /// Validates cross-field constraints after deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "min_connections cannot exceed max_connections",
            ));
        }
        if self.database.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "connection_timeout must be positive",
            ));
        }
        if self.server.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "request_timeout must be positive",
            ));
        }
        if self.seed.enabled {
            if self.seed.admin_password.len() < 6 {
                return Err(ConfigError::validation(
                    "seed.admin_password",
                    "admin password must be at least 6 characters",
                ));
            }
            if !(0..=100_000_000).contains(&self.seed.admin_balance) {
                return Err(ConfigError::validation(
                    "seed.admin_balance",
                    "admin balance must be between 0 and 100,000,000",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.jwt.token_expiration_minutes, 60);
        assert!(!settings.seed.enabled);
        assert_eq!(settings.log.level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn jwt_secret_must_be_configured() {
        let jwt = JwtConfig::default();
        assert!(jwt.validate().is_err());
    }

    #[test]
    fn jwt_secret_must_be_long_enough() {
        let jwt = JwtConfig {
            secret: "short".to_string(),
            ..Default::default()
        };
        assert!(jwt.validate().is_err());

        let jwt = JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            ..Default::default()
        };
        assert!(jwt.validate().is_ok());
    }

    #[test]
    fn seed_password_checked_only_when_enabled() {
        let mut settings = Settings::default();
        settings.seed.admin_password = "x".to_string();
        assert!(settings.validate().is_ok());

        settings.seed.enabled = true;
        assert!(settings.validate().is_err());

        settings.seed.admin_password = "adminpassword".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn min_connections_bounded_by_max() {
        let mut settings = Settings::default();
        settings.database.min_connections = 20;
        settings.database.max_connections = 10;
        assert!(settings.validate().is_err());
    }

    proptest! {
        #[test]
        fn server_address_joins_host_and_port(port in 1u16..=65535) {
            let server = ServerConfig {
                host: "0.0.0.0".to_string(),
                port,
                ..Default::default()
            };
            prop_assert_eq!(server.address(), format!("0.0.0.0:{}", port));
        }
    }
}
