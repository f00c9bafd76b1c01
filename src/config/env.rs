use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum EnvKey {
    ServerHost,
    ServerPort,
    DatabaseUrl,
    DbMaxConnections,
    AdminUsername,
    AdminPassword,
    AdminPasswordHash,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerHost => "APP_HOST",
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::DatabaseUrl => "DATABASE_URL",
            EnvKey::DbMaxConnections => "DB_MAX_CONNECTIONS",
            EnvKey::AdminUsername => "ADMIN_USERNAME",
            EnvKey::AdminPassword => "ADMIN_PASSWORD",
            EnvKey::AdminPasswordHash => "ADMIN_PASSWORD_HASH",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Like [`get`], but treats an unset or blank variable as absent.
pub fn get_opt(key: EnvKey) -> Option<String> {
    get(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    get_opt(key).unwrap_or_else(|| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
