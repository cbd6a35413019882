//! Application configuration module
//!
//! Provides the configuration consumed by the server: where documents are
//! stored, where the frontend lives, and which address to bind.
//!
//! Values are resolved in layers, each overriding the previous one:
//!
//! 1. Built-in defaults (`data`, `static`, `0.0.0.0:5000`)
//! 2. An optional TOML file named by `RUBRICY_CONFIG`
//! 3. Environment variables `DATA_DIR`, `STATIC_DIR`, `SERVER_HOST`, `SERVER_PORT`
//!
//! ```toml
//! data_dir = "/var/lib/rubricy"
//! port = 8080
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "RUBRICY_CONFIG";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one `<id>.json` file per document
    pub data_dir: PathBuf,
    /// Directory the frontend (`index.html` and assets) is served from
    pub static_dir: PathBuf,
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// On-disk shape of the TOML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolve the configuration from defaults, the optional config file and
    /// the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            tracing::info!("Reading configuration file {}", path);
            builder = builder.merge_file(Path::new(&path))?;
        }
        builder.merge_env(|key| std::env::var(key).ok())?.build()
    }

    /// Parse a TOML document into a configuration, falling back to defaults
    /// for missing keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::builder().merge_toml(source)?.build()
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("data_dir"));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingValue("host"));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort("0".to_string()));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    data_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the document directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the static frontend directory
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Set the bind host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the bind port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Overlay values from a TOML file on disk
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_toml(&source)
    }

    /// Overlay values from a TOML document
    pub fn merge_toml(mut self, source: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(source)?;
        if let Some(dir) = file.data_dir {
            self.data_dir = Some(dir);
        }
        if let Some(dir) = file.static_dir {
            self.static_dir = Some(dir);
        }
        if let Some(host) = file.host {
            self.host = Some(host);
        }
        if let Some(port) = file.port {
            self.port = Some(port);
        }
        Ok(self)
    }

    /// Overlay values from environment-style lookups
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.static_dir = Some(PathBuf::from(dir));
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = Some(host);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let parsed = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            self.port = Some(parsed);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            data_dir: self.data_dir.unwrap_or(defaults.data_dir),
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
