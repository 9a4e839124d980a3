pub mod config;

use std::time::Instant;

use hooksmith_database::{Database, RateLimiter};

pub use config::BotConfig;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub limiter: RateLimiter,
    pub config: BotConfig,
    pub started_at: Instant,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
