//! # Service Configuration
//!
//! Environment-based configuration, loaded once at startup. A `.env` file is
//! honored when present (`dotenvy`); real environment variables win over it.
//!
//! Variables:
//! - `PORT`: listening port for the HTTP socket
//! - `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_USER`, `POSTGRES_PW`,
//!   `POSTGRES_DB`: connection parameters for the `tasks` database

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

/// Configuration loading failures, reported before the socket binds
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {name} has invalid value {value:?}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// PostgreSQL connection parameters
///
/// TLS is disabled by design; the service talks to a co-located database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DatabaseConfig {
    /// Read the `POSTGRES_*` variables from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: require_var("POSTGRES_HOST")?,
            port: parse_var("POSTGRES_PORT")?,
            user: require_var("POSTGRES_USER")?,
            password: require_var("POSTGRES_PW")?,
            database: require_var("POSTGRES_DB")?,
        })
    }

    /// Typed connection options, the sqlx-native form of
    /// `host=... port=... user=... password=... dbname=... sslmode=disable`
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }
}

/// Full service configuration: listening port plus database parameters
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Read `PORT` and the `POSTGRES_*` variables from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_var("PORT")?,
            database: DatabaseConfig::from_env()?,
        })
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn parse_var<T>(name: &'static str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = require_var(name)?;
    value.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
        name,
        value,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 6] = [
        "PORT",
        "POSTGRES_HOST",
        "POSTGRES_PORT",
        "POSTGRES_USER",
        "POSTGRES_PW",
        "POSTGRES_DB",
    ];

    fn set_complete_env() {
        std::env::set_var("PORT", "8080");
        std::env::set_var("POSTGRES_HOST", "db.internal");
        std::env::set_var("POSTGRES_PORT", "5433");
        std::env::set_var("POSTGRES_USER", "taskboard");
        std::env::set_var("POSTGRES_PW", "secret");
        std::env::set_var("POSTGRES_DB", "tasks");
    }

    fn clear_env() {
        for name in ALL_VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_happy_path() {
        set_complete_env();

        let config = AppConfig::from_env().expect("complete env should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5433);
        assert_eq!(config.database.user, "taskboard");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.database, "tasks");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_connect_options_reflect_config() {
        let config = DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "u".to_string(),
            password: "p".to_string(),
            database: "d".to_string(),
        };

        let options = config.connect_options();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "u");
        assert_eq!(options.get_database(), Some("d"));
    }

    #[test]
    #[serial]
    fn test_missing_variable_is_reported_by_name() {
        set_complete_env();
        std::env::remove_var("POSTGRES_PW");

        let err = AppConfig::from_env().expect_err("missing var should fail");
        match err {
            ConfigError::MissingVar(name) => assert_eq!(name, "POSTGRES_PW"),
            other => panic!("Expected MissingVar, got {other:?}"),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_port_is_invalid() {
        set_complete_env();
        std::env::set_var("PORT", "not-a-port");

        let err = AppConfig::from_env().expect_err("bad port should fail");
        match err {
            ConfigError::InvalidVar { name, value, .. } => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "not-a-port");
            }
            other => panic!("Expected InvalidVar, got {other:?}"),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", ConfigError::MissingVar("PORT")),
            "missing required environment variable PORT"
        );

        let err = ConfigError::InvalidVar {
            name: "PORT",
            value: "x".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "environment variable PORT has invalid value \"x\": invalid digit found in string"
        );
    }
}
