use std::env;

use anyhow::bail;

pub const DEFAULT_MAX_REQUESTS: u32 = 3;
pub const DEFAULT_WINDOW_HOURS: u32 = 24;
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Immutable quota and retention configuration, validated once at startup.
#[derive(Clone, Copy, Debug)]
pub struct BotConfig {
    pub max_requests: u32,
    pub window_hours: u32,
    pub retention_days: u32,
}

impl BotConfig {
    /// Read configuration from `RATE_LIMIT_REQUESTS`,
    /// `RATE_LIMIT_WINDOW_HOURS` and `LOG_RETENTION_DAYS`, applying defaults
    /// for missing or unparsable values.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env_u32("RATE_LIMIT_REQUESTS", DEFAULT_MAX_REQUESTS),
            env_u32("RATE_LIMIT_WINDOW_HOURS", DEFAULT_WINDOW_HOURS),
            env_u32("LOG_RETENTION_DAYS", DEFAULT_RETENTION_DAYS),
        )
    }

    /// Validate explicit configuration values.
    pub fn from_values(
        max_requests: u32,
        window_hours: u32,
        retention_days: u32,
    ) -> anyhow::Result<Self> {
        if max_requests == 0 {
            bail!("RATE_LIMIT_REQUESTS must be at least 1");
        }
        if window_hours == 0 {
            bail!("RATE_LIMIT_WINDOW_HOURS must be at least 1");
        }
        if retention_days == 0 {
            bail!("LOG_RETENTION_DAYS must be at least 1");
        }

        Ok(Self {
            max_requests,
            window_hours,
            retention_days,
        })
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    match env::var(key) {
        Ok(value) => value.trim().parse::<u32>().unwrap_or(default),
        Err(_) => default,
    }
}
