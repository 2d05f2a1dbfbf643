//! Server configuration loaded from `config.toml`.
//!
//! Every field has a development default, so an empty file (or no file at
//! all) yields a runnable configuration. Environment variables override the
//! file for values that differ per deployment or should stay out of it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use paylens_auth::AuthConfig;

/// Main server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of HTTP workers; 0 means one per CPU core.
    #[serde(default)]
    pub workers: usize,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_rocksdb_path")]
    pub rocksdb_path: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file_path")]
    pub file_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    /// File layer format: "compact" or "json".
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// CORS settings
///
/// The refresh cookie crosses origins, so the browser origin must be named
/// explicitly; a wildcard cannot carry credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            rocksdb_path: default_rocksdb_path(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: default_log_file_path(),
            log_to_console: true,
            format: default_log_format(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_rocksdb_path() -> String {
    "./data/rocksdb".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file_path() -> String {
    "./logs/paylens.log".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_true() -> bool {
    true
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let mut config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - PAYLENS_HOST: Override server.host
    /// - PAYLENS_PORT: Override server.port
    /// - PAYLENS_ROCKSDB_PATH: Override storage.rocksdb_path
    /// - PAYLENS_LOG_FILE_PATH: Override logging.file_path
    /// - PAYLENS_JWT_SECRET: Override auth.jwt_secret (keeps the key out of the file)
    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        use std::env;

        if let Ok(host) = env::var("PAYLENS_HOST") {
            self.server.host = host;
        }

        if let Ok(port_str) = env::var("PAYLENS_PORT") {
            self.server.port = port_str
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid PAYLENS_PORT value: {}", port_str))?;
        }

        if let Ok(path) = env::var("PAYLENS_ROCKSDB_PATH") {
            self.storage.rocksdb_path = path;
        }

        if let Ok(path) = env::var("PAYLENS_LOG_FILE_PATH") {
            self.logging.file_path = path;
        }

        if let Ok(secret) = env::var("PAYLENS_JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }

        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ));
        }

        let valid_formats = ["compact", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_formats.join(", ")
            ));
        }

        if self.cors.allowed_origin.trim().is_empty() {
            return Err(anyhow::anyhow!("cors.allowed_origin cannot be empty"));
        }

        self.auth.validate()?;

        Ok(())
    }
}
