//! Startup configuration
//!
//! Command-line flags fall back to environment variables. The parsed [`Args`]
//! are validated once into an [`AppConfig`] that is passed down explicitly.

use std::net::SocketAddr;

use clap::Parser;

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;

/// Environment variable holding the PostgreSQL connection string
pub const DATABASE_URL_ENV: &str = "POSTGRES_DSN";

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Birthday greeting HTTP service
#[derive(Parser, Debug)]
#[command(name = "birthday-server", version, about)]
pub struct Args {
    /// PostgreSQL connection string
    #[arg(long, env = DATABASE_URL_ENV, hide_env_values = true)]
    pub database_url: Option<String>,

    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Maximum number of pooled database connections
    #[arg(long, env = "POSTGRES_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long)]
    pub debug: bool,
}

/// Validated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn new(
        bind_addr: SocketAddr,
        database_url: Option<String>,
        max_connections: u32,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        if max_connections == 0 {
            return Err(ConfigError::Validation(
                "max connections must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            database_url,
            max_connections,
        })
    }
}

impl TryFrom<Args> for AppConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Self::new(args.bind, args.database_url, args.max_connections)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {} is not set", DATABASE_URL_ENV)]
    MissingDatabaseUrl,
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> SocketAddr {
        DEFAULT_BIND_ADDR.parse().unwrap()
    }

    #[test]
    fn default_bind_is_8080() {
        assert_eq!(addr().port(), 8080);
    }

    #[test]
    fn accepts_database_url() {
        let config = AppConfig::new(addr(), Some("postgres://localhost/db".into()), 5).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/db");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn missing_database_url_fails() {
        let err = AppConfig::new(addr(), None, 5).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
        assert_eq!(err.to_string(), "environment variable POSTGRES_DSN is not set");
    }

    #[test]
    fn empty_database_url_fails() {
        let err = AppConfig::new(addr(), Some("  ".into()), 5).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn zero_connections_fails() {
        let err = AppConfig::new(addr(), Some("postgres://localhost/db".into()), 0).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from([
            "birthday-server",
            "--database-url",
            "postgres://localhost/db",
            "--bind",
            "127.0.0.1:9090",
            "--max-connections",
            "3",
        ])
        .unwrap();
        let config = AppConfig::try_from(args).unwrap();
        assert_eq!(config.bind_addr.port(), 9090);
        assert_eq!(config.max_connections, 3);
    }
}
