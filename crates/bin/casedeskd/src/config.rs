//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `casedesk.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Workflow rule settings.
    pub workflow: WorkflowConfig,
    /// Notification bus settings.
    pub notifications: NotificationsConfig,
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

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Start each session with the two example rules (`wf-1`, `wf-2`).
    pub seed_examples: bool,
    /// Rule executions kept in memory across all rules. Oldest go first.
    pub history_limit: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// How many in-app notifications a slow SSE subscriber may fall behind
    /// before it starts losing them.
    pub bus_capacity: usize,
}

impl Config {
    /// Load configuration from `casedesk.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override variable holds an unparsable value, or if the result fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("casedesk.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
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

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CASEDESK_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("CASEDESK_PORT") {
            self.server.port = parse_env("CASEDESK_PORT", &val)?;
        }
        if let Some(val) = lookup("CASEDESK_BIND") {
            let (host, port) = val.rsplit_once(':').ok_or_else(|| ConfigError::Env {
                var: "CASEDESK_BIND",
                value: val.clone(),
            })?;
            self.server.port = parse_env("CASEDESK_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(val) = lookup("CASEDESK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("CASEDESK_SEED_EXAMPLES") {
            self.workflow.seed_examples = parse_flag("CASEDESK_SEED_EXAMPLES", &val)?;
        }
        if let Some(val) = lookup("CASEDESK_HISTORY_LIMIT") {
            self.workflow.history_limit = parse_env("CASEDESK_HISTORY_LIMIT", &val)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.notifications.bus_capacity == 0 {
            return Err(ConfigError::Validation(
                "notification bus capacity must be non-zero".to_string(),
            ));
        }
        if self.workflow.history_limit == 0 {
            return Err(ConfigError::Validation(
                "execution history limit must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        var,
        value: value.to_string(),
    })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Env {
            var,
            value: value.to_string(),
        }),
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

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "casedesk=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            seed_examples: true,
            history_limit: 1000,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { bus_capacity: 256 }
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
    /// An override variable could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    Env { var: &'static str, value: String },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
