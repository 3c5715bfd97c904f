//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `dashpush.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use dashpush_adapter_http_axum::render::{Theme, ViewConfig};
use serde::Deserialize;

/// Secret used when none is configured. Startup logs a warning when it is
/// still in effect.
pub const DEFAULT_SECRET: &str = "change-me";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Write authorization.
    pub auth: AuthConfig,
    /// Snapshot file location.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Widget page behaviour.
    pub widgets: WidgetsConfig,
    /// Colors, font and layout units.
    pub theme: Theme,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Shared-secret configuration.
#[derive(Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Secret expected in `Authorization: Bearer <secret>`.
    pub secret: String,
}

/// Snapshot storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON snapshot file.
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
    /// Interval of the keep-alive log line, in seconds. `0` disables it.
    pub heartbeat_seconds: u64,
}

/// Widget page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    /// Auto-refresh period of widget pages, in seconds. `0` disables it.
    pub refresh_seconds: u32,
}

impl Config {
    /// Load configuration from `dashpush.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("dashpush.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides looked up through `var`.
    ///
    /// Later keys win over earlier ones for the same field, so `RUST_LOG`
    /// beats `DASHPUSH_LOG` and `DASHPUSH_SECRET` beats `UPDATE_SECRET`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("DASHPUSH_HOST") {
            self.server.host = val;
        }
        for key in ["PORT", "DASHPUSH_PORT"] {
            if let Some(port) = var(key).and_then(|val| val.parse().ok()) {
                self.server.port = port;
            }
        }
        if let Some(val) = var("DASHPUSH_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        for key in ["UPDATE_SECRET", "DASHPUSH_SECRET"] {
            if let Some(val) = var(key) {
                self.auth.secret = val;
            }
        }
        if let Some(val) = var("DASHPUSH_SNAPSHOT_PATH") {
            self.storage.path = PathBuf::from(val);
        }
        for key in ["DASHPUSH_LOG", "RUST_LOG"] {
            if let Some(val) = var(key) {
                self.logging.filter = val;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.auth.secret.is_empty() {
            return Err(ConfigError::Validation(
                "auth secret must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Whether the built-in placeholder secret is still in use.
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.auth.secret == DEFAULT_SECRET
    }

    /// Presentation settings handed to the HTTP adapter.
    #[must_use]
    pub fn view(&self) -> ViewConfig {
        ViewConfig {
            theme: self.theme.clone(),
            refresh_seconds: self.widgets.refresh_seconds,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"***")
            .finish()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dashboard.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "dashpushd=info,dashpush=info,tower_http=debug".to_string(),
            heartbeat_seconds: 60,
        }
    }
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: 60,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
