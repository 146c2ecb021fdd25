//! Database connection parameters.
//!
//! Three named environments select distinct databases derived from the same
//! base name:
//!
//! | `APP_ENV`     | database             |
//! |---------------|----------------------|
//! | `development` | `<DB_NAME>_development` |
//! | `test`        | `<DB_NAME>_test`        |
//! | `production`  | `<DB_NAME>_production`  |
//!
//! # Environment Variables
//!
//! - `APP_ENV` (default `development`)
//! - `DB_USER` (default `postgres`), `DB_PASSWORD` (default `postgres`)
//! - `DB_NAME` (default `rentcar`), `DB_HOST` (default `localhost`),
//!   `DB_PORT` (default `5432`)
//! - `DB_MAX_CONNECTIONS` (default `5`)
//! - `DATABASE_URL`: when set, used verbatim and the variables above are ignored

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub environment: Environment,
    pub user: String,
    pub password: String,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub url_override: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(crate::env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup("APP_ENV")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            user: lookup("DB_USER").unwrap_or_else(|| "postgres".to_string()),
            password: lookup("DB_PASSWORD").unwrap_or_else(|| "postgres".to_string()),
            name: lookup("DB_NAME").unwrap_or_else(|| "rentcar".to_string()),
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: lookup("DB_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            url_override: lookup("DATABASE_URL"),
        }
    }

    /// Database selected by the current environment.
    pub fn database_name(&self) -> String {
        format!("{}_{}", self.name, self.environment)
    }

    pub fn url(&self) -> String {
        match &self.url_override {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user,
                self.password,
                self.host,
                self.port,
                self.database_name()
            ),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("environment", &self.environment)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("url_override", &self.url_override.as_ref().map(|_| "<set>"))
            .finish()
    }
}
