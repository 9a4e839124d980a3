use serde::Serialize;

/// One row per user tracking the current fixed quota window.
///
/// `window_start` is always a multiple of the configured window length
/// (windows are aligned to the epoch, not to first-request time).
#[derive(Clone, Copy, Debug)]
pub struct UserQuotaRecord {
    pub user_id: u64,
    pub request_count: u32,
    pub window_start: u64,
    pub updated_at: u64,
}

/// Admission summary returned by the rate limiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuotaResult {
    pub request_count: u32,
    pub remaining: u32,
    pub reset_at_ms: u64,
}
