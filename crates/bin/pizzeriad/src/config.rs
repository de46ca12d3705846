//! Configuration loading from `pizzeria.toml` and the environment.
//!
//! The file is optional and every field has a default. Environment variables
//! are applied afterwards, in [`ENV_OVERRIDES`] order, so a later entry wins
//! over an earlier one touching the same field.

use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_FILE: &str = "pizzeria.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5555;
const DEFAULT_DATABASE_URL: &str = "sqlite:pizzeria.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "pizzeriad=info,pizzeria=info,tower_http=debug";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx `SQLite` URL, e.g. `sqlite:pizzeria.db?mode=rwc`.
    pub url: String,
    /// Insert demo restaurants and pizzas when no restaurant exists yet.
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            seed_demo_data: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

type Override = fn(&mut Config, String);

/// Environment variables understood by `pizzeriad`, applied top to bottom.
const ENV_OVERRIDES: &[(&str, Override)] = &[
    ("PIZZERIA_HOST", |config, val| config.server.host = val),
    ("PIZZERIA_PORT", |config, val| {
        if let Ok(port) = val.parse() {
            config.server.port = port;
        }
    }),
    ("PIZZERIA_BIND", apply_bind),
    ("DB_URI", |config, val| config.database.url = val),
    ("PIZZERIA_DATABASE_URL", |config, val| config.database.url = val),
    ("PIZZERIA_SEED", |config, val| {
        config.database.seed_demo_data = matches!(val.as_str(), "1" | "true" | "yes");
    }),
    ("PIZZERIA_LOG", |config, val| config.logging.filter = val),
    ("RUST_LOG", |config, val| config.logging.filter = val),
];

fn apply_bind(config: &mut Config, val: String) {
    let Some((host, port)) = val.rsplit_once(':') else {
        return;
    };
    config.server.host = host.to_string();
    if let Ok(port) = port.parse() {
        config.server.port = port;
    }
}

impl Config {
    /// Read `pizzeria.toml` from the working directory, then the environment.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed, or when the
    /// merged result is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    fn resolve(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::read(path)?;
        for (key, apply) in ENV_OVERRIDES {
            if let Some(val) = env(key) {
                apply(&mut config, val);
            }
        }
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Invalid("server.host is empty"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero"));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Invalid("database.url is empty"));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
