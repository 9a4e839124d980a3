use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use hooksmith_database::Database;
use hooksmith_database::impls::request_log::run_retention_sweep;
use hooksmith_utils::time::{millis_until_daily_tick, now_unix_millis};

/// Hour of day (UTC) when the retention sweep runs.
const SWEEP_HOUR_UTC: u64 = 2;

/// Spawn the daily retention sweeper.
///
/// A failed sweep is logged and retried on the next scheduled tick, never
/// immediately. The sweep runs concurrently with request traffic.
pub fn spawn_retention_sweeper(db: Database, retention_days: u32) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let wait_ms = millis_until_daily_tick(now_unix_millis(), SWEEP_HOUR_UTC);
            tokio::time::sleep(Duration::from_millis(wait_ms)).await;

            match run_retention_sweep(&db, retention_days, now_unix_millis()).await {
                Ok(deleted) => info!(deleted, retention_days, "daily retention sweep finished"),
                Err(err) => error!(?err, "daily retention sweep failed"),
            }
        }
    })
}
