//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Seed data loaded at startup.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Seed data configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Teacher accounts inserted into the principal store at startup.
    #[serde(default)]
    pub teachers: Vec<TeacherSeed>,
}

/// A seeded teacher account.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherSeed {
    /// Sign-in identity, used as the store key.
    pub username: String,
    /// Human-readable name.
    #[serde(default)]
    pub display_name: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `CAMPUS_ENV`)
    /// 3. Environment variables with `CAMPUS_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("CAMPUS_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CAMPUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("CAMPUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
