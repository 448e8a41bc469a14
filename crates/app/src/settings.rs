//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` and from `LEMONADE__*` environment variables,
//! e.g. `LEMONADE__SERVER__PORT=8080`.
//!
//! ```toml
//! [app]
//! level = "debug"
//!
//! [server]
//! port = 3000
//! database = { sqlite = "lemonade.db" }
//! ```
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level for the workspace crates.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("LEMONADE").separator("__"))
            .build()?
            .try_deserialize()
    }
}
