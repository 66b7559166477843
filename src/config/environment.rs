//! Configuración de variables de entorno
//!
//! Reads the service settings from the process environment (after `.env`
//! has been loaded by `dotenvy`). Every variable has a default except
//! `DATABASE_URL`, whose absence selects the in-memory store.

use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub catalog_base_url: String,
    pub catalog_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            environment: var("ENVIRONMENT", "development"),
            host: var("HOST", "0.0.0.0"),
            port: parse_number("PORT", &var("PORT", "8000"))?,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_max_connections: parse_number(
                "DATABASE_MAX_CONNECTIONS",
                &var("DATABASE_MAX_CONNECTIONS", "10"),
            )?,
            catalog_base_url: var("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            catalog_timeout: Duration::from_secs(parse_number(
                "CATALOG_TIMEOUT_SECS",
                &var("CATALOG_TIMEOUT_SECS", "10"),
            )?),
            cors_origins: var("CORS_ORIGINS", "")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
