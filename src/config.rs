use std::{env, fmt::Display, str::FromStr};

use anyhow::Context;
use tracing::info;

pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub session_inactivity: time::Duration,
}

impl Config {
    /// Reads the process environment, after merging a `.env` file if one is
    /// present.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            info!("loaded environment from {}", path.display());
        }

        let minutes: i64 = try_load("SESSION_INACTIVITY_MINUTES", "30")?;

        Ok(Self {
            listen_addr: try_load("LISTEN_ADDR", "0.0.0.0:8080")?,
            database_url: try_load("DATABASE_URL", "sqlite://connecthub.db?mode=rwc")?,
            session_inactivity: time::Duration::minutes(minutes),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("invalid {key} value: {raw}"))
}
