//! Environment-driven configuration for the todo service.
//!
//! Every setting is optional and falls back to a local-development default.
//! `Config::from_lookup` takes an arbitrary key lookup so tests never have to
//! mutate the process environment.

use std::net::SocketAddr;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_NAME: &str = "todo_db";
const DEFAULT_DB_PASSWORD: &str = "password";
const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a port number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{host}:{port} is not a valid listen address")]
    InvalidAddress { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db: DatabaseConfig,
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub host: String,
    pub name: String,
    pub password: String,
    pub port: u16,
}

// The password stays out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("host", &self.host)
            .field("name", &self.name)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let port = |key: &'static str, default: u16| match lookup(key) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { key, value }),
            None => Ok(default),
        };

        Ok(Config {
            host: string("HOST", DEFAULT_HOST),
            port: port("PORT", DEFAULT_PORT)?,
            db: DatabaseConfig {
                user: string("DB_USER", DEFAULT_DB_USER),
                host: string("DB_HOST", DEFAULT_DB_HOST),
                name: string("DB_NAME", DEFAULT_DB_NAME),
                password: string("DB_PASSWORD", DEFAULT_DB_PASSWORD),
                port: port("DB_PORT", DEFAULT_DB_PORT)?,
            },
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}
