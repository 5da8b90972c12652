use std::time::Duration;

use order_core_api::{OrderError, OrderResult};
use sqlx::postgres::{PgPool, PgPoolOptions};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "DATABASE_MAX_CONNECTIONS";
pub const ACQUIRE_TIMEOUT_VAR: &str = "DATABASE_ACQUIRE_TIMEOUT_SECS";

/// Connection settings for the order database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(Self::DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> OrderResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> OrderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| OrderError::Configuration(format!("{DATABASE_URL_VAR} is not set")))?;

        let mut config = Self::new(url);
        if let Some(value) = lookup(MAX_CONNECTIONS_VAR) {
            config.max_connections = parse_var(MAX_CONNECTIONS_VAR, &value)?;
        }
        if let Some(value) = lookup(ACQUIRE_TIMEOUT_VAR) {
            config.acquire_timeout = Duration::from_secs(parse_var(ACQUIRE_TIMEOUT_VAR, &value)?);
        }
        Ok(config)
    }

    pub async fn connect(&self) -> OrderResult<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.url)
            .await?;
        Ok(pool)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> OrderResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| OrderError::Configuration(format!("{name} has an invalid value: {value:?}")))
}
