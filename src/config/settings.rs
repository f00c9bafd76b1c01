use crate::config::env::{self, EnvKey};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ADMIN_USERNAME must be set")]
    MissingAdminUsername,
    #[error("either ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set")]
    MissingAdminSecret,
}

/// Where the admin principal's secret comes from.
#[derive(Clone)]
pub enum AdminSecret {
    /// Argon2 PHC string, used as-is.
    Hash(String),
    /// Plain password, hashed once at startup.
    Plain(String),
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminSecret::Hash(_) => f.write_str("Hash(<redacted>)"),
            AdminSecret::Plain(_) => f.write_str("Plain(<redacted>)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub secret: AdminSecret,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub admin: AdminCredentials,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let username = env::get_opt(EnvKey::AdminUsername).ok_or(ConfigError::MissingAdminUsername)?;
        let secret = match (
            env::get_opt(EnvKey::AdminPasswordHash),
            env::get_opt(EnvKey::AdminPassword),
        ) {
            (Some(hash), _) => AdminSecret::Hash(hash),
            (None, Some(password)) => AdminSecret::Plain(password),
            (None, None) => return Err(ConfigError::MissingAdminSecret),
        };

        Ok(Self {
            server_host: env::get_or(EnvKey::ServerHost, "0.0.0.0"),
            server_port: env::get_parsed(EnvKey::ServerPort, 8080),
            database_url: env::get_or(EnvKey::DatabaseUrl, "sqlite://media.db"),
            db_max_connections: env::get_parsed(EnvKey::DbMaxConnections, 5),
            admin: AdminCredentials { username, secret },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
