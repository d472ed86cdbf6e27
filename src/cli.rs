//! Command line interface.
//!
//! `serve` runs the HTTP server (the default when no subcommand is
//! given); `migrate` applies pending schema migrations and exits.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ConfigLoader, Settings};
use crate::db::run_pending_migrations;
use crate::logger::init_logger;
use crate::server::Server;

/// REST backend for a balance-funded e-commerce store
#[derive(Parser, Debug)]
#[command(name = "minimart")]
#[command(about = "REST backend for a balance-funded e-commerce store")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the TOML configuration files
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,

        /// Log level override
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit without starting
        #[arg(long)]
        dry_run: bool,
    },
    /// Apply pending database migrations and exit
    Migrate,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// Runs the selected subcommand to completion.
    pub async fn execute(self) -> anyhow::Result<()> {
        let mut settings = ConfigLoader::new(self.config.clone()).load()?;
        self.apply_overrides(&mut settings);

        init_logger(&settings.log)?;

        match self.command.unwrap_or(Commands::Serve {
            host: None,
            port: None,
            log_level: None,
            dry_run: false,
        }) {
            Commands::Serve { dry_run: true, .. } => {
                settings.validate()?;
                settings.jwt.validate()?;
                tracing::info!("Configuration is valid");
                Ok(())
            }
            Commands::Serve { .. } => Server::new(settings).run().await,
            Commands::Migrate => {
                settings.validate()?;
                run_pending_migrations(&settings.database.url).await?;
                tracing::info!("Migrations applied");
                Ok(())
            }
        }
    }

    /// Folds CLI flags into the loaded settings; flags win over files.
    fn apply_overrides(&self, settings: &mut Settings) {
        if self.verbose {
            settings.log.level = "debug".to_string();
        }
        if self.quiet {
            settings.log.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &self.command
        {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
            if let Some(level) = log_level {
                settings.log.level = level.as_str().to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_override_settings() {
        let cli = Cli::parse_from([
            "minimart", "serve", "--host", "0.0.0.0", "--port", "9000", "--log-level", "debug",
        ]);
        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.log.level, "debug");
    }

    #[test]
    fn quiet_drops_log_level_to_error() {
        let cli = Cli::parse_from(["minimart", "--quiet", "serve"]);
        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.log.level, "error");
    }
}
