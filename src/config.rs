//! Configuration management for the logic server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Library branch this instance serves. The branches share every endpoint
/// but apply different registration rules.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Aarhus,
    Cph,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Aarhus => "aarhus",
            Branch::Cph => "cph",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub branch: Branch,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PersistenceConfig {
    /// gRPC endpoint of the persistence service, e.g. `http://localhost:9090`
    pub url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoansConfig {
    pub duration_days: i64,
    pub extension_days: i64,
    pub max_extensions: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub persistence: PersistenceConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub loans: LoansConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // LOGIC_SERVER__BRANCH=cph, LOGIC_PERSISTENCE__URL=...
            .add_source(
                Environment::with_prefix("LOGIC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("persistence.url", env::var("PERSISTENCE_URL").ok())?
            .set_override_option("auth.jwt_secret", env::var("JWT_SECRET").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            persistence: PersistenceConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
            loans: LoansConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            branch: Branch::Aarhus,
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9090".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-this-secret-in-production".to_string(),
            jwt_expiration_minutes: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            duration_days: 30,
            extension_days: 30,
            max_extensions: 12,
        }
    }
}
