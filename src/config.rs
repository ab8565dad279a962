//! Configuration management for Bookshelf server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which `BookStore` implementation backs the API
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Mongodb,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    pub url: String,
    /// Database name
    pub name: String,
    pub collection: String,
    /// Bound on the startup connect + ping
    pub connect_timeout_secs: u64,
    /// Bound on every per-request storage operation
    pub operation_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }
}

fn default_backend() -> StorageBackend {
    StorageBackend::Mongodb
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. BOOKSHELF__SERVER__PORT=9000)
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override MongoDB URL from MONGODB_URI env var if present
            .set_override_option("database.url", env::var("MONGODB_URI").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: "mongodb://localhost:27017".to_string(),
            name: "library".to_string(),
            collection: "books".to_string(),
            connect_timeout_secs: 10,
            operation_timeout_secs: 10,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.backend, StorageBackend::Mongodb);
        assert_eq!(config.database.name, "library");
        assert_eq!(config.database.collection, "books");
        assert_eq!(config.database.operation_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("server.host", "127.0.0.1")
            .unwrap()
            .set_override("server.port", 9000)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.url, "mongodb://localhost:27017");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_memory_backend_parses() {
        let config: AppConfig = Config::builder()
            .set_override("database.backend", "memory")
            .unwrap()
            .set_override("database.url", "unused")
            .unwrap()
            .set_override("database.name", "library")
            .unwrap()
            .set_override("database.collection", "books")
            .unwrap()
            .set_override("database.connect_timeout_secs", 1)
            .unwrap()
            .set_override("database.operation_timeout_secs", 2)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert_eq!(config.database.operation_timeout(), Duration::from_secs(2));
    }
}
