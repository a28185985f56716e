use serde::Deserialize;

use crate::validator::DEFAULT_MAX_RANGE_DAYS;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Telemetry CSV read on every query.
    pub csv_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Longest accepted `to - from` span.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_range_days: default_max_range_days(),
        }
    }
}

fn default_max_range_days() -> u32 {
    DEFAULT_MAX_RANGE_DAYS
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.data.csv_path.is_empty(),
            "data.csv_path must be non-empty"
        );
        anyhow::ensure!(
            self.query.max_range_days > 0,
            "query.max_range_days must be > 0, got {}",
            self.query.max_range_days
        );
        Ok(())
    }
}
